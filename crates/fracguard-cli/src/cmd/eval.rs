use anyhow::Context;
use clap::Args;

use fracguard_cli::expr::{parse_op, parse_operand, Expr};

#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Left operand: N or N/D, suffix `!` to protect just this operand
    #[arg(allow_hyphen_values = true)]
    pub lhs: String,

    /// One of + - * / < <= > >= == !=
    #[arg(allow_hyphen_values = true)]
    pub op: String,

    /// Right operand
    #[arg(allow_hyphen_values = true)]
    pub rhs: String,

    /// Protect both operands against integer overflow
    #[arg(long, default_value_t = false)]
    pub protect: bool,
}

pub fn run(args: EvalArgs) -> anyhow::Result<()> {
    let lhs = parse_operand(&args.lhs, args.protect).with_context(|| format!("lhs {:?}", args.lhs))?;
    let op = parse_op(&args.op)?;
    let rhs = parse_operand(&args.rhs, args.protect).with_context(|| format!("rhs {:?}", args.rhs))?;

    let value = Expr::Binary(lhs, op, rhs)
        .eval()
        .with_context(|| format!("eval {} {} {}", args.lhs, args.op, args.rhs))?;

    println!("{value}");
    Ok(())
}
