// crates/fracguard-cli/src/session.rs

use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use clap::ValueEnum;
use fracguard_core::FracError;

use crate::expr::parse_expr;

/// What a session does with a line the parser rejects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum InvalidPolicy {
    /// Skip it silently and wait for the next line.
    Retry,
    /// Print the rejection to the error stream and continue.
    #[default]
    Report,
    /// Stop the session with an error.
    Abort,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SessionOpts {
    pub protect: bool,
    pub invalid: InvalidPolicy,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub lines: usize,
    pub evaluated: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Evaluate one expression per line, writing results to `out`.
///
/// Blank lines and `#` comments are ignored. Parser rejections follow
/// `opts.invalid`; arithmetic failures (overflow, division by zero) are
/// always reported and only stop the session under `Abort`.
pub fn run_session<R, W, E>(input: R, out: &mut W, err: &mut E, opts: SessionOpts) -> anyhow::Result<SessionReport>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut rep = SessionReport::default();

    for (idx, line) in input.lines().enumerate() {
        let line = line.context("read input line")?;
        let lineno = idx + 1;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        rep.lines += 1;

        let expr = match parse_expr(text, opts.protect) {
            Ok(expr) => expr,
            Err(FracError::Parse(msg)) => match opts.invalid {
                InvalidPolicy::Retry => {
                    rep.skipped += 1;
                    continue;
                }
                InvalidPolicy::Report => {
                    rep.skipped += 1;
                    writeln!(err, "line {lineno}: rejected: {msg}")?;
                    continue;
                }
                InvalidPolicy::Abort => bail!("line {lineno}: rejected: {msg}"),
            },
            Err(e) => {
                fail(err, &mut rep, lineno, e, opts.invalid)?;
                continue;
            }
        };

        match expr.eval() {
            Ok(value) => {
                writeln!(out, "{value}")?;
                rep.evaluated += 1;
            }
            Err(e) => fail(err, &mut rep, lineno, e, opts.invalid)?,
        }
    }

    out.flush()?;
    Ok(rep)
}

fn fail<E: Write>(err: &mut E, rep: &mut SessionReport, lineno: usize, e: FracError, policy: InvalidPolicy) -> anyhow::Result<()> {
    if policy == InvalidPolicy::Abort {
        return Err(e).with_context(|| format!("line {lineno}"));
    }
    rep.errors += 1;
    writeln!(err, "line {lineno}: error: {e}")?;
    Ok(())
}
