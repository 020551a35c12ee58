//! MaxArgs: the widest `print` argument list anywhere in a program.
//!
//! Used to size an evaluator's argument storage. Branches combine by `max`;
//! only the links of a single argument list are summed.


use crate::ast::{Child, Exp, ExpList, Stm};

pub fn max_args(stm: &Stm) -> usize {
    let n = stm_args(stm);
    tracing::trace!(max_args = n, "computed print width");
    n
}

/// Like [`max_args`], but an absent program counts 0.
pub fn max_args_program(prog: Option<&Stm>) -> usize {
    prog.map_or(0, max_args)
}

// Holes are the base case of every walk and count 0
fn child<T>(node: &Child<T>, count: fn(&T) -> usize) -> usize {
    node.get().map_or(0, count)
}

fn stm_args(stm: &Stm) -> usize {
    match stm {
        Stm::Compound(stm1, stm2) => child(stm1, stm_args).max(child(stm2, stm_args)),
        Stm::Assign(_, exp) => child(exp, exp_args),
        Stm::Print(exps) => child(exps, exp_list_args),
    }
}

fn exp_args(exp: &Exp) -> usize {
    match exp {
        Exp::Id(_) | Exp::Num(_) => 1,
        Exp::Op(left, _, right) => child(left, exp_args).max(child(right, exp_args)),
        // Only the statement half is counted
        Exp::Eseq(stm, _) => child(stm, stm_args),
    }
}

fn exp_list_args(list: &ExpList) -> usize {
    match list {
        ExpList::Pair(head, tail) => child(head, exp_args) + child(tail, exp_list_args),
        ExpList::Last(last) => child(last, exp_args),
    }
}
