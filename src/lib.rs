pub extern crate slp_lang;

pub use crate::slp_lang::analysis::{max_args, max_args_program};
pub use crate::slp_lang::ast::{build, BinOp, Child, Exp, ExpList, Stm};
pub use crate::slp_lang::errors::OutputError;
pub use crate::slp_lang::graphviz::{serialize, write_dot, AstGraph, EdgeRole};
pub use crate::slp_lang::printer::{
    print_expression, print_expression_list, print_source, print_statement, write_source,
};
