//! Renders an AST back to source text.
//!
//! Expressions are printed with the fewest parentheses that keep the tree's
//! grouping under standard left-associative arithmetic precedence. Statements
//! are laid out with compound statements as indented brace blocks.

#[cfg(test)]
mod tests;

use std::fmt::Write;

use crate::ast::{Child, Exp, ExpList, Stm};
use crate::errors::OutputError;

// Context level that lets any operator through unparenthesized. An operator
// is wrapped iff its precedence is below the level its context requires.
const TOP: u32 = 0;
const INDENT_STEP: usize = 2;

const EMPTY_PROGRAM: &str = "<empty>";
const HOLE_STM: &str = "<null-stmt>";
const HOLE_EXP: &str = "<null-exp>";
const HOLE_LIST: &str = "<null-list>";

/// Prints a whole program followed by a newline. An absent program prints
/// `<empty>`.
pub fn print_source<W: Write>(prog: Option<&Stm>, out: &mut W) -> std::fmt::Result {
    match prog {
        None => writeln!(out, "{}", EMPTY_PROGRAM),
        Some(stm) => {
            Printer { out: &mut *out }.stm(stm, 0)?;
            writeln!(out)
        }
    }
}

pub fn print_statement<W: Write>(stm: &Stm, out: &mut W) -> std::fmt::Result {
    Printer { out }.stm(stm, 0)
}

pub fn print_expression<W: Write>(exp: &Exp, out: &mut W) -> std::fmt::Result {
    Printer { out }.exp(exp, TOP)
}

pub fn print_expression_list<W: Write>(list: &ExpList, out: &mut W) -> std::fmt::Result {
    Printer { out }.exp_list(list, TOP)
}

/// Same as [`print_source`] but for byte sinks such as stdout or a file.
pub fn write_source<W: std::io::Write>(prog: Option<&Stm>, mut out: W) -> Result<(), OutputError> {
    let mut text = String::new();
    print_source(prog, &mut text)?;
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

struct Printer<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> Printer<'a, W> {
    fn indent(&mut self, indent: usize) -> std::fmt::Result {
        write!(self.out, "{:width$}", "", width = indent)
    }

    // Holes inside a block still sit on their own indented line
    fn child_stm(&mut self, stm: &Child<Stm>, indent: usize) -> std::fmt::Result {
        match stm.get() {
            Some(stm) => self.stm(stm, indent),
            None => {
                self.indent(indent)?;
                self.out.write_str(HOLE_STM)
            }
        }
    }

    fn child_exp(&mut self, exp: &Child<Exp>, parent_prec: u32) -> std::fmt::Result {
        match exp.get() {
            Some(exp) => self.exp(exp, parent_prec),
            None => self.out.write_str(HOLE_EXP),
        }
    }

    fn child_exp_list(&mut self, list: &Child<ExpList>, parent_prec: u32) -> std::fmt::Result {
        match list.get() {
            Some(list) => self.exp_list(list, parent_prec),
            None => self.out.write_str(HOLE_LIST),
        }
    }

    fn stm(&mut self, stm: &Stm, indent: usize) -> std::fmt::Result {
        match stm {
            Stm::Compound(stm1, stm2) => {
                self.indent(indent)?;
                self.out.write_str("{\n")?;
                self.child_stm(stm1, indent + INDENT_STEP)?;
                self.out.write_str(";\n")?;
                self.child_stm(stm2, indent + INDENT_STEP)?;
                self.out.write_char('\n')?;
                self.indent(indent)?;
                self.out.write_char('}')
            }
            Stm::Assign(id, exp) => {
                self.indent(indent)?;
                write!(self.out, "{} := ", id)?;
                self.child_exp(exp, TOP)
            }
            Stm::Print(exps) => {
                self.indent(indent)?;
                self.out.write_str("print(")?;
                self.child_exp_list(exps, TOP)?;
                self.out.write_char(')')
            }
        }
    }

    fn exp(&mut self, exp: &Exp, parent_prec: u32) -> std::fmt::Result {
        match exp {
            Exp::Id(id) => self.out.write_str(id),
            Exp::Num(n) => write!(self.out, "{}", n),
            Exp::Op(left, op, right) => {
                let prec = op.precedence();
                let parens = prec < parent_prec;
                if parens {
                    self.out.write_char('(')?;
                }
                // An equal-precedence operator on the right must keep its
                // parentheses, otherwise it would reparse as left-nested.
                self.child_exp(left, prec)?;
                write!(self.out, " {} ", op)?;
                self.child_exp(right, prec + 1)?;
                if parens {
                    self.out.write_char(')')?;
                }
                Ok(())
            }
            Exp::Eseq(stm, exp) => {
                self.out.write_str("eseq { ")?;
                self.child_stm(stm, 0)?;
                self.out.write_str(" ; ")?;
                self.child_exp(exp, TOP)?;
                self.out.write_str(" }")
            }
        }
    }

    fn exp_list(&mut self, list: &ExpList, parent_prec: u32) -> std::fmt::Result {
        match list {
            ExpList::Pair(head, tail) => {
                self.child_exp(head, parent_prec)?;
                self.out.write_str(", ")?;
                self.child_exp_list(tail, parent_prec)
            }
            ExpList::Last(last) => self.child_exp(last, parent_prec),
        }
    }
}
