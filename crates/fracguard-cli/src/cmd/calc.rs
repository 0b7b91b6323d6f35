use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use clap::Args;

use fracguard_cli::session::{run_session, InvalidPolicy, SessionOpts};

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Read expressions from this file instead of stdin
    #[arg(long)]
    pub r#in: Option<String>,

    /// Protect every operand against integer overflow
    #[arg(long, default_value_t = false)]
    pub protect: bool,

    /// Handling of lines that do not parse
    #[arg(long, value_enum, default_value_t = InvalidPolicy::Report)]
    pub invalid: InvalidPolicy,
}

pub fn run(args: CalcArgs) -> anyhow::Result<()> {
    let opts = SessionOpts {
        protect: args.protect,
        invalid: args.invalid,
    };

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let rep = match &args.r#in {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("open input {path}"))?;
            run_session(BufReader::new(f), &mut out, &mut err, opts)?
        }
        None => run_session(io::stdin().lock(), &mut out, &mut err, opts)?,
    };

    drop(err);
    eprintln!(
        "calc ok: lines={} evaluated={} skipped={} errors={}",
        rep.lines, rep.evaluated, rep.skipped, rep.errors
    );
    Ok(())
}
