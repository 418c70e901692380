use super::open_document;
use anyhow::Result;
use bemforge_editor::{visible_elements, Document, VisibleElement};
use bemforge_model::{resolve_class_name, ElementIndex, TreeStats};
use clap::Args;
use colored::Colorize;
use std::path::Path;

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Also print each element's generated class attribute
    #[arg(short, long)]
    pub classes: bool,
}

pub fn tree(args: TreeArgs, cwd: &Path, document: Option<&Path>) -> Result<()> {
    let (_, store, doc) = open_document(cwd, document)?;

    println!(
        "{} {} (block {})",
        "🌲".green(),
        store.path().display(),
        doc.block_name().bright_white()
    );

    for line in render_rows(&doc, args.classes) {
        println!("{}", line);
    }

    let stats = TreeStats::collect(doc.forest());
    println!();
    println!(
        "{}",
        format!(
            "{} elements, depth {}, {} collapsed",
            stats.nodes, stats.max_depth, stats.collapsed
        )
        .dimmed()
    );

    Ok(())
}

/// One uncolored line per visible element.
fn render_rows(doc: &Document, classes: bool) -> Vec<String> {
    let index = doc.forest().index();
    visible_elements(doc.forest())
        .into_iter()
        .map(|row| render_row(&row, doc.block_name(), &index, classes))
        .collect()
}

fn render_row(row: &VisibleElement<'_>, block: &str, index: &ElementIndex<'_>, classes: bool) -> String {
    let element = row.element;
    let marker = match (element.has_children(), element.expanded) {
        (false, _) => " ",
        (true, true) => "▾",
        (true, false) => "▸",
    };
    let mut line = format!(
        "{:>3} {}{} {} #{}",
        row.index,
        "  ".repeat(row.depth),
        marker,
        element.text,
        element.id
    );
    if classes {
        line.push_str(&format!("  .{}", resolve_class_name(element, block, Some(index))));
    }
    line
}
