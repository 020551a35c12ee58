//! Graphviz rendering of an AST.
//!
//! The tree is first copied into a per-call `Dag` whose node indices serve as
//! the DOT identifiers. Nodes are added in pre-order, so identifiers grow
//! monotonically along the walk and are never shared between two calls.


use std::fmt::Display;

use daggy::petgraph::visit::{EdgeRef, IntoEdges};
use daggy::{Dag, NodeIndex};

use crate::ast::{Child, Exp, ExpList, Stm};
use crate::errors::OutputError;

const GRAPH_NAME: &str = "AST";

/// Structural role of a child link, used as the edge label.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeRole {
    Stm1,
    Stm2,
    Left,
    Right,
    Stm,
    Exp,
    Head,
    Tail,
    Last,
    // The parent has a single child, so the edge needs no label
    Only,
}

impl EdgeRole {
    pub fn label(&self) -> Option<&'static str> {
        use EdgeRole::*;
        match self {
            Stm1 => Some("stm1"),
            Stm2 => Some("stm2"),
            Left => Some("left"),
            Right => Some("right"),
            Stm => Some("stm"),
            Exp => Some("exp"),
            Head => Some("head"),
            Tail => Some("tail"),
            Last => Some("last"),
            Only => None,
        }
    }
}

type Parent = Option<(NodeIndex, EdgeRole)>;

#[derive(Debug)]
pub struct AstGraph {
    dag: Dag<String, EdgeRole>,
}

impl AstGraph {
    pub fn from_program(prog: Option<&Stm>) -> Self {
        let mut graph = AstGraph { dag: Dag::new() };
        if let Some(stm) = prog {
            graph.stm(stm, None);
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built AST graph"
        );
        graph
    }

    pub fn node_count(&self) -> usize {
        self.dag.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.dag.edge_count()
    }

    pub fn to_dot(&self) -> String {
        self.to_string()
    }

    // Holes get neither a node nor an edge
    fn add(&mut self, label: String, parent: Parent) -> NodeIndex {
        match parent {
            None => self.dag.add_node(label),
            Some((parent, role)) => self.dag.add_child(parent, role, label).1,
        }
    }

    fn child_stm(&mut self, stm: &Child<Stm>, parent: NodeIndex, role: EdgeRole) {
        if let Some(stm) = stm.get() {
            self.stm(stm, Some((parent, role)));
        }
    }

    fn child_exp(&mut self, exp: &Child<Exp>, parent: NodeIndex, role: EdgeRole) {
        if let Some(exp) = exp.get() {
            self.exp(exp, Some((parent, role)));
        }
    }

    fn child_exp_list(&mut self, list: &Child<ExpList>, parent: NodeIndex, role: EdgeRole) {
        if let Some(list) = list.get() {
            self.exp_list(list, Some((parent, role)));
        }
    }

    fn stm(&mut self, stm: &Stm, parent: Parent) {
        match stm {
            Stm::Compound(stm1, stm2) => {
                let id = self.add("Compound".to_string(), parent);
                self.child_stm(stm1, id, EdgeRole::Stm1);
                self.child_stm(stm2, id, EdgeRole::Stm2);
            }
            Stm::Assign(name, exp) => {
                let id = self.add(format!("Assign: {}", name), parent);
                self.child_exp(exp, id, EdgeRole::Only);
            }
            Stm::Print(exps) => {
                let id = self.add("Print".to_string(), parent);
                self.child_exp_list(exps, id, EdgeRole::Only);
            }
        }
    }

    fn exp(&mut self, exp: &Exp, parent: Parent) {
        match exp {
            Exp::Id(name) => {
                self.add(format!("Id: {}", name), parent);
            }
            Exp::Num(n) => {
                self.add(format!("Num: {}", n), parent);
            }
            Exp::Op(left, op, right) => {
                let id = self.add(format!("Op: {}", op), parent);
                self.child_exp(left, id, EdgeRole::Left);
                self.child_exp(right, id, EdgeRole::Right);
            }
            Exp::Eseq(stm, exp) => {
                let id = self.add("Eseq".to_string(), parent);
                self.child_stm(stm, id, EdgeRole::Stm);
                self.child_exp(exp, id, EdgeRole::Exp);
            }
        }
    }

    fn exp_list(&mut self, list: &ExpList, parent: Parent) {
        match list {
            ExpList::Pair(head, tail) => {
                let id = self.add("Pair".to_string(), parent);
                self.child_exp(head, id, EdgeRole::Head);
                self.child_exp_list(tail, id, EdgeRole::Tail);
            }
            ExpList::Last(last) => {
                let id = self.add("Last".to_string(), parent);
                self.child_exp(last, id, EdgeRole::Last);
            }
        }
    }
}

impl Display for AstGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "digraph {} {{", GRAPH_NAME)?;
        for node in self.dag.graph().node_indices() {
            writeln!(
                f,
                "  n{} [label=\"{}\"];",
                node.index(),
                escape(&self.dag[node])
            )?;

            // petgraph lists outgoing edges newest first
            let mut edges: Vec<_> = self.dag.edges(node).collect();
            edges.sort_by_key(|edge| edge.id());
            for edge in edges {
                match edge.weight().label() {
                    Some(label) => writeln!(
                        f,
                        "  n{} -> n{} [label=\"{}\"];",
                        node.index(),
                        edge.target().index(),
                        label
                    )?,
                    None => writeln!(f, "  n{} -> n{};", node.index(), edge.target().index())?,
                }
            }
        }
        writeln!(f, "}}")
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Serializes a program to DOT text. An absent program gives a graph with an
/// empty body.
pub fn serialize(prog: Option<&Stm>) -> String {
    AstGraph::from_program(prog).to_dot()
}

pub fn write_dot<W: std::io::Write>(prog: Option<&Stm>, mut out: W) -> Result<(), OutputError> {
    out.write_all(serialize(prog).as_bytes())?;
    out.flush()?;
    Ok(())
}
