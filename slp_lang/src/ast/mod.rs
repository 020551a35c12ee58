pub mod build;
mod utils;

pub use build::*;

// An owned child slot of a node. Trees are built bottom-up by value, so every
// node has exactly one owner and no cycles can form. A slot may be left empty
// (a hole); every consumer handles holes explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Child<T>(Option<Box<T>>);

impl<T> Child<T> {
    pub fn hole() -> Self {
        Child(None)
    }

    pub fn get(&self) -> Option<&T> {
        self.0.as_deref()
    }

    pub fn is_hole(&self) -> bool {
        self.0.is_none()
    }
}

impl<T> From<Box<T>> for Child<T> {
    fn from(node: Box<T>) -> Self {
        Child(Some(node))
    }
}

impl<T> From<Option<Box<T>>> for Child<T> {
    fn from(node: Option<Box<T>>) -> Self {
        Child(node)
    }
}

// Statements of the straight-line language
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stm {
    Compound(Child<Stm>, Child<Stm>),
    Assign(String, Child<Exp>),
    Print(Child<ExpList>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Exp {
    Id(String),
    Num(i64),
    Op(Child<Exp>, BinOp, Child<Exp>),
    Eseq(Child<Stm>, Child<Exp>), // Runs the statement, then yields the expression
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpList {
    Pair(Child<Exp>, Child<ExpList>),
    Last(Child<Exp>),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinOp {
    Plus,
    Minus,
    Times,
    Div,
}

impl BinOp {
    /// Binding strength under standard arithmetic rules. Higher binds tighter.
    pub fn precedence(&self) -> u32 {
        use BinOp::*;
        match self {
            Times | Div => 2,
            Plus | Minus => 1,
        }
    }
}
