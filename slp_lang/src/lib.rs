pub mod analysis;
pub mod ast;
pub mod errors;
pub mod graphviz;
pub mod printer;

pub use crate::ast::{BinOp, Child, Exp, ExpList, Stm};
pub use crate::errors::OutputError;
