//! Expression trees and their rendering to infix strings.

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::Expr;
pub use display::hanging_plus_or_minus;
pub use errors::ExpressionError;
