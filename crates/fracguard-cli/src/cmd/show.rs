use anyhow::Context;
use clap::Args;

use fracguard_cli::expr::parse_operand;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Fraction text: N or N/D
    #[arg(allow_hyphen_values = true)]
    pub fraction: String,

    /// Normalize with overflow protection on
    #[arg(long, default_value_t = false)]
    pub protect: bool,

    /// Print the floating-point coercion instead of the fraction
    #[arg(long, default_value_t = false)]
    pub float: bool,
}

pub fn run(args: ShowArgs) -> anyhow::Result<()> {
    let f = parse_operand(&args.fraction, args.protect)
        .with_context(|| format!("parse {:?}", args.fraction))?;

    eprintln!("numerator   = {}", f.numerator());
    eprintln!("denominator = {}", f.denominator());
    eprintln!("protected   = {}", f.is_protected());

    if args.float {
        let x = f.to_f64().context("float coercion")?;
        println!("{x}");
    } else {
        println!("{f}");
    }
    Ok(())
}
