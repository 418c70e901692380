mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{compile, edit, init, tree, CompileArgs, EditArgs, InitArgs, TreeArgs};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// bemforge - BEM component styling from the command line
#[derive(Parser, Debug)]
#[command(name = "bemforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Style document to use instead of the configured one
    #[arg(long, global = true)]
    document: Option<PathBuf>,

    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a config and a starter style document
    Init(InitArgs),

    /// Generate HTML and CSS from the style document
    Compile(CompileArgs),

    /// Apply a JSON list of mutations to the style document
    Edit(EditArgs),

    /// Show the element tree with selection indices and class names
    Tree(TreeArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let document = cli.document.as_deref();

    match cli.command {
        Command::Init(args) => init(args, &cwd, document),
        Command::Compile(args) => compile(args, &cwd, document),
        Command::Edit(args) => edit(args, &cwd, document),
        Command::Tree(args) => tree(args, &cwd, document),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
