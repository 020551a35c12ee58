use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;

use super::{print_expression, print_source, print_statement, write_source};
use crate::ast::build::*;
use crate::ast::{BinOp, Child, Exp, Stm};

use crate::ast::BinOp::*;

#[cfg(test)]
fn example_program() -> Box<Stm> {
    compound_stm(
        assign_stm("a", op_exp(num_exp(5), Plus, num_exp(3))),
        compound_stm(
            assign_stm(
                "b",
                eseq_exp(
                    print_stm(pair_exp_list(
                        id_exp("a"),
                        last_exp_list(op_exp(id_exp("a"), Minus, num_exp(1))),
                    )),
                    op_exp(num_exp(10), Times, id_exp("a")),
                ),
            ),
            print_stm(last_exp_list(id_exp("b"))),
        ),
    )
}

#[cfg(test)]
fn exp_text(exp: &Exp) -> String {
    let mut text = String::new();
    print_expression(exp, &mut text).unwrap();
    text
}

#[cfg(test)]
fn source_text(prog: Option<&Stm>) -> String {
    let mut text = String::new();
    print_source(prog, &mut text).unwrap();
    text
}

#[test]
fn test_lower_precedence_left_operand() {
    let exp = op_exp(op_exp(num_exp(1), Plus, num_exp(2)), Times, num_exp(3));
    assert_eq!(exp_text(&exp), "(1 + 2) * 3");
}

#[test]
fn test_right_nested_same_precedence() {
    let exp = op_exp(num_exp(1), Minus, op_exp(num_exp(2), Minus, num_exp(3)));
    assert_eq!(exp_text(&exp), "1 - (2 - 3)");

    let exp = op_exp(num_exp(8), Div, op_exp(num_exp(4), Times, num_exp(2)));
    assert_eq!(exp_text(&exp), "8 / (4 * 2)");
}

#[test]
fn test_no_redundant_parentheses() {
    let tests = vec![
        (op_exp(num_exp(1), Plus, num_exp(2)), "1 + 2"),
        (
            op_exp(op_exp(num_exp(1), Minus, num_exp(2)), Minus, num_exp(3)),
            "1 - 2 - 3",
        ),
        (
            op_exp(num_exp(1), Plus, op_exp(num_exp(2), Times, num_exp(3))),
            "1 + 2 * 3",
        ),
        (
            op_exp(op_exp(num_exp(1), Times, num_exp(2)), Plus, num_exp(3)),
            "1 * 2 + 3",
        ),
        (
            op_exp(op_exp(id_exp("x"), Div, id_exp("y")), Times, id_exp("z")),
            "x / y * z",
        ),
        (
            op_exp(
                op_exp(num_exp(1), Plus, num_exp(2)),
                Times,
                op_exp(num_exp(3), Minus, num_exp(4)),
            ),
            "(1 + 2) * (3 - 4)",
        ),
        (num_exp(-7), "-7"),
    ];

    for (exp, expected) in tests {
        assert_eq!(exp_text(&exp), expected);
    }
}

#[test]
fn test_example_program() {
    let prog = example_program();
    assert_eq!(
        source_text(Some(&*prog)),
        "{\n  a := 5 + 3;\n  {\n    b := eseq { print(a, a - 1) ; 10 * a };\n    print(b)\n  }\n}\n"
    );
}

#[test]
fn test_statement_has_no_trailing_newline() {
    let stm = print_stm(pair_exp_list(
        num_exp(1),
        pair_exp_list(id_exp("x"), last_exp_list(op_exp(num_exp(2), Times, num_exp(3)))),
    ));
    let mut text = String::new();
    print_statement(&stm, &mut text).unwrap();
    assert_eq!(text, "print(1, x, 2 * 3)");
    assert_eq!(stm.to_string(), text);
}

#[test]
fn test_eseq_effect_starts_at_indent_zero() {
    let exp = eseq_exp(
        compound_stm(assign_stm("x", num_exp(1)), print_stm(last_exp_list(id_exp("x")))),
        id_exp("x"),
    );
    assert_eq!(exp_text(&exp), "eseq { {\n  x := 1;\n  print(x)\n} ; x }");
}

#[test]
fn test_eseq_operand_needs_no_parentheses() {
    let exp = op_exp(
        eseq_exp(assign_stm("x", num_exp(1)), op_exp(id_exp("x"), Plus, num_exp(1))),
        Times,
        num_exp(2),
    );
    assert_eq!(exp_text(&exp), "eseq { x := 1 ; x + 1 } * 2");
}

#[test]
fn test_holes_print_placeholders() {
    let prog = compound_stm(
        Child::hole(),
        compound_stm(
            assign_stm("x", op_exp(Child::hole(), Plus, num_exp(1))),
            print_stm(pair_exp_list(eseq_exp(Child::hole(), Child::hole()), Child::hole())),
        ),
    );
    assert_eq!(
        source_text(Some(&*prog)),
        "{\n  <null-stmt>;\n  {\n    x := <null-exp> + 1;\n    print(eseq { <null-stmt> ; <null-exp> }, <null-list>)\n  }\n}\n"
    );

    assert_eq!(print_stm(Child::hole()).to_string(), "print(<null-list>)");
    assert_eq!(assign_stm("y", Child::hole()).to_string(), "y := <null-exp>");
    assert_eq!(last_exp_list(Child::hole()).to_string(), "<null-exp>");
}

#[test]
fn test_empty_program() {
    assert_eq!(source_text(None), "<empty>\n");
}

#[test]
fn test_printing_is_deterministic() {
    let prog = example_program();
    assert_eq!(source_text(Some(&*prog)), source_text(Some(&*prog)));
    assert_eq!(source_text(Some(&*prog)), source_text(Some(&*example_program())));
}

#[test]
fn test_write_source_to_bytes() {
    let prog = assign_stm("a", num_exp(1));
    let mut bytes = Vec::new();
    write_source(Some(&*prog), &mut bytes).unwrap();
    assert_eq!(String::from_utf8(bytes).unwrap(), "a := 1\n");
}

// Precedence-climbing parser over the printed text, left-associative
#[cfg(test)]
struct Reparser {
    tokens: Vec<String>,
    pos: usize,
}

#[cfg(test)]
impl Reparser {
    fn new(text: &str) -> Self {
        let token = Regex::new(r"\d+|[A-Za-z_]\w*|[-+*/()]").unwrap();
        Reparser {
            tokens: token
                .find_iter(text)
                .map(|m| m.as_str().to_string())
                .collect(),
            pos: 0,
        }
    }

    fn next(&mut self) -> String {
        let token = self.tokens[self.pos].clone();
        self.pos += 1;
        token
    }

    fn peek_op(&self) -> Option<BinOp> {
        match self.tokens.get(self.pos).map(|t| t.as_str()) {
            Some("+") => Some(Plus),
            Some("-") => Some(Minus),
            Some("*") => Some(Times),
            Some("/") => Some(Div),
            _ => None,
        }
    }

    fn exp(&mut self, min_prec: u32) -> Box<Exp> {
        let mut left = self.atom();
        while let Some(op) = self.peek_op() {
            if op.precedence() < min_prec {
                break;
            }
            self.pos += 1;
            let right = self.exp(op.precedence() + 1);
            left = op_exp(left, op, right);
        }
        left
    }

    fn atom(&mut self) -> Box<Exp> {
        let token = self.next();
        if token == "(" {
            let exp = self.exp(1);
            assert_eq!(self.next(), ")");
            exp
        } else if let Ok(n) = token.parse::<i64>() {
            num_exp(n)
        } else {
            id_exp(token)
        }
    }
}

#[cfg(test)]
fn random_op_tree(rng: &mut StdRng, depth: u32) -> Box<Exp> {
    if depth == 0 || rng.gen_bool(0.25) {
        return if rng.gen_bool(0.5) {
            num_exp(rng.gen_range(0..100))
        } else {
            id_exp(["a", "b", "c"][rng.gen_range(0..3)])
        };
    }
    let op = [Plus, Minus, Times, Div][rng.gen_range(0..4)];
    op_exp(
        random_op_tree(rng, depth - 1),
        op,
        random_op_tree(rng, depth - 1),
    )
}

#[test]
fn test_reparse_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let exp = random_op_tree(&mut rng, 5);
        let text = exp_text(&exp);
        let mut parser = Reparser::new(&text);
        let reparsed = parser.exp(1);
        assert_eq!(parser.pos, parser.tokens.len(), "trailing tokens in {}", text);
        assert_eq!(reparsed, exp, "{} did not reparse to the same tree", text);
    }
}
