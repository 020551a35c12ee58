use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use slp::build::*;
use slp::{BinOp, Stm};

// a := 5 + 3; b := (print(a, a - 1), 10 * a); print(b)
fn prog() -> Box<Stm> {
    compound_stm(
        assign_stm("a", op_exp(num_exp(5), BinOp::Plus, num_exp(3))),
        compound_stm(
            assign_stm(
                "b",
                eseq_exp(
                    print_stm(pair_exp_list(
                        id_exp("a"),
                        last_exp_list(op_exp(id_exp("a"), BinOp::Minus, num_exp(1))),
                    )),
                    op_exp(num_exp(10), BinOp::Times, id_exp("a")),
                ),
            ),
            print_stm(last_exp_list(id_exp("b"))),
        ),
    )
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let dot_path = std::env::args().nth(1).unwrap_or_else(|| "ast.dot".to_string());

    let p = prog();
    slp::write_source(Some(&*p), std::io::stdout().lock())?;
    println!("{}", slp::max_args(&p));

    let file = File::create(&dot_path).with_context(|| format!("Could not create {}", dot_path))?;
    slp::write_dot(Some(&*p), BufWriter::new(file))
        .with_context(|| format!("Could not write the AST graph to {}", dot_path))?;
    tracing::info!(path = %dot_path, "wrote AST graph");

    Ok(())
}
