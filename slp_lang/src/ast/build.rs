//! Smart constructors for every node variant.
//!
//! Each constructor takes ownership of its children and returns the new node
//! boxed, ready to be passed on as the child of another constructor. Children
//! may be given as a boxed node or as [`Child::hole`]. Nothing is validated
//! beyond the types, so constructors cannot fail.

use super::{BinOp, Child, Exp, ExpList, Stm};

pub fn compound_stm(stm1: impl Into<Child<Stm>>, stm2: impl Into<Child<Stm>>) -> Box<Stm> {
    Box::new(Stm::Compound(stm1.into(), stm2.into()))
}

pub fn assign_stm(id: impl Into<String>, exp: impl Into<Child<Exp>>) -> Box<Stm> {
    Box::new(Stm::Assign(id.into(), exp.into()))
}

pub fn print_stm(exps: impl Into<Child<ExpList>>) -> Box<Stm> {
    Box::new(Stm::Print(exps.into()))
}

pub fn id_exp(id: impl Into<String>) -> Box<Exp> {
    Box::new(Exp::Id(id.into()))
}

pub fn num_exp(n: i64) -> Box<Exp> {
    Box::new(Exp::Num(n))
}

pub fn op_exp(left: impl Into<Child<Exp>>, op: BinOp, right: impl Into<Child<Exp>>) -> Box<Exp> {
    Box::new(Exp::Op(left.into(), op, right.into()))
}

pub fn eseq_exp(stm: impl Into<Child<Stm>>, exp: impl Into<Child<Exp>>) -> Box<Exp> {
    Box::new(Exp::Eseq(stm.into(), exp.into()))
}

pub fn pair_exp_list(head: impl Into<Child<Exp>>, tail: impl Into<Child<ExpList>>) -> Box<ExpList> {
    Box::new(ExpList::Pair(head.into(), tail.into()))
}

pub fn last_exp_list(last: impl Into<Child<Exp>>) -> Box<ExpList> {
    Box::new(ExpList::Last(last.into()))
}
