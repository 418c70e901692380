use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::{bail, Result};
use bemforge_editor::{Document, FileStore, Mutation};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Default block name of the starter document
    #[arg(short, long)]
    pub block_name: Option<String>,

    /// Force overwrite existing config and document
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path, document: Option<&Path>) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);
    let config = Config::load(cwd)?;
    let document_path = config.get_document_path(cwd, document);

    // Check if anything already exists
    if (config_path.exists() || document_path.exists()) && !args.force {
        println!(
            "{} {} or {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white(),
            document_path.display().to_string().bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing bemforge project...".bright_blue().bold());

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    // Write starter document
    let mut doc = Document::main();
    if let Some(name) = args.block_name {
        doc.apply(Mutation::SetBlockName { name });
    }
    let mut store = FileStore::new(&document_path);
    let outcome = doc.save(&mut store);
    if !outcome.success {
        bail!(outcome.message);
    }
    println!("  {} Created {}", "✓".green(), document_path.display());

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: bemforge tree");
    println!("  2. Apply edits with: bemforge edit mutations.json");
    println!("  3. Run: bemforge compile, then check {}/", config.out_dir);

    Ok(())
}
