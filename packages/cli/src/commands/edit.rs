use super::open_document;
use anyhow::{bail, Context, Result};
use bemforge_editor::Mutation;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// JSON file holding an array of mutations
    pub mutations: PathBuf,

    /// Apply and report, but do not save
    #[arg(long)]
    pub dry_run: bool,
}

pub fn edit(args: EditArgs, cwd: &Path, document: Option<&Path>) -> Result<()> {
    let (_, mut store, mut doc) = open_document(cwd, document)?;

    let mutations_path = cwd.join(&args.mutations);
    let content = fs::read_to_string(&mutations_path)
        .with_context(|| format!("Cannot read {}", mutations_path.display()))?;
    let mutations: Vec<Mutation> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid mutations in {}", mutations_path.display()))?;

    println!(
        "{} {} mutations",
        "✏️  Applying".bright_blue().bold(),
        mutations.len()
    );

    for mutation in mutations {
        let name = mutation.name();
        let result = doc.apply(mutation);
        match result.created {
            Some(id) => println!("  {} {} (created #{})", "✓".green(), name, id),
            None => println!("  {} {}", "✓".green(), name),
        }
    }

    if args.dry_run {
        println!();
        println!("{}", "Dry run, nothing saved".dimmed());
        return Ok(());
    }

    let outcome = doc.save(&mut store);
    if !outcome.success {
        bail!(outcome.message);
    }

    println!();
    println!("{} {}", "✅".green(), outcome.message);

    Ok(())
}
