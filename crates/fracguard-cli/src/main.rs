// crates/fracguard-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "fracguard-cli")]
#[command(about = "Exact i32 fractions with opt-in overflow protection", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply one binary operator to two fractions
    Eval(cmd::eval::EvalArgs),

    /// Parse and normalize a fraction (or print its float value)
    Show(cmd::show::ShowArgs),

    /// Evaluate one expression per line from stdin or a file
    Calc(cmd::calc::CalcArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Eval(args) => cmd::eval::run(args),
        Commands::Show(args) => cmd::show::run(args),
        Commands::Calc(args) => cmd::calc::run(args),
    }
}
