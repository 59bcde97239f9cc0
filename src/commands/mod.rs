pub mod check;
pub mod lsp;
pub mod serve;

pub use check::execute_check;
pub use lsp::execute_lsp;
pub use serve::execute_serve;
