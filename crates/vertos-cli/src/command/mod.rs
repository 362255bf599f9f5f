use clap::{Parser, Subcommand};

use self::{generate::GenerateArg, plot_data::PlotDataArg, summarize::SummarizeArg};

mod generate;
mod plot_data;
mod summarize;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Summarize dataset columns per diagnostic class
    Summarize(#[clap(flatten)] SummarizeArg),
    /// Emit plot-ready series as JSON
    PlotData(#[clap(flatten)] PlotDataArg),
    /// Generate a synthetic dataset for demos and tests
    Generate(#[clap(flatten)] GenerateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Summarize(arg) => summarize::run(&arg)?,
        Mode::PlotData(arg) => plot_data::run(&arg)?,
        Mode::Generate(arg) => generate::run(&arg)?,
    }
    Ok(())
}
