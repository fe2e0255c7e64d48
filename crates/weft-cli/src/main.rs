//! weft - render directional line patterns
//!
//! Usage:
//!   weft render <pattern.pat> [-o out.svg|out.png|out.json]   Render a pattern
//!   weft rows <pattern.pat>                                   List accepted rows
//!   weft benchmark <pattern.pat>                              Time pattern rendering

use clap::{Parser, Subcommand};

mod cli;

use cli::{BenchmarkArgs, RenderArgs, RowsArgs};

#[derive(Parser)]
#[command(name = "weft", version, about = "Render directional line patterns to SVG, PNG or JSON")]
struct Args {
    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a pattern file
    Render(RenderArgs),
    /// List the rows a pattern file yields after parsing
    Rows(RowsArgs),
    /// Benchmark pattern rendering
    Benchmark(BenchmarkArgs),
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    let result = match args.command {
        Command::Render(args) => cli::cmd_render(&args),
        Command::Rows(args) => cli::cmd_rows(&args),
        Command::Benchmark(args) => cli::cmd_benchmark(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
