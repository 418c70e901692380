use super::open_document;
use anyhow::{Context, Result};
use bemforge_compiler_css::compile_to_css;
use bemforge_compiler_html::compile_to_html_with;
use clap::{Args, ValueEnum};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Html,
    Css,
    All,
}

impl Target {
    fn includes_html(self) -> bool {
        matches!(self, Target::Html | Target::All)
    }

    fn includes_css(self) -> bool {
        matches!(self, Target::Css | Target::All)
    }
}

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Target format
    #[arg(short, long, value_enum, default_value = "all")]
    pub target: Target,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}

pub fn compile(args: CompileArgs, cwd: &Path, document: Option<&Path>) -> Result<()> {
    let (config, store, doc) = open_document(cwd, document)?;

    let mut outputs: Vec<(&str, String)> = Vec::new();
    if args.target.includes_html() {
        let html = compile_to_html_with(doc.forest(), doc.block_name(), &config.html_options());
        outputs.push(("html", html));
    }
    if args.target.includes_css() {
        outputs.push(("css", compile_to_css(doc.forest(), doc.block_name())));
    }

    if args.stdout {
        for (_, code) in &outputs {
            println!("{}", code);
        }
        return Ok(());
    }

    println!(
        "{} {}",
        "🔨 Compiling".bright_blue().bold(),
        store.path().display()
    );

    let out_dir = match &args.out_dir {
        Some(dir) => cwd.join(dir),
        None => config.get_out_dir(cwd),
    };
    fs::create_dir_all(&out_dir).with_context(|| format!("Cannot create {}", out_dir.display()))?;

    for (extension, code) in &outputs {
        let output_path = out_dir.join(format!("{}.{}", output_stem(doc.block_name()), extension));
        fs::write(&output_path, code).with_context(|| format!("Cannot write {}", output_path.display()))?;
        debug!(path = %output_path.display(), bytes = code.len(), "Wrote output");
        println!("  {} {}", "✓".green(), output_path.display());
    }

    println!();
    println!("{} Compiled {} files successfully", "✅".green(), outputs.len());

    Ok(())
}

/// File name for generated code, derived from the block name.
fn output_stem(block_name: &str) -> String {
    let stem: String = block_name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect();
    if stem.is_empty() {
        "component".to_string()
    } else {
        stem
    }
}
