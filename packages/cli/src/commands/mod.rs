pub mod compile;
pub mod edit;
pub mod init;
pub mod tree;

pub use compile::{compile, CompileArgs};
pub use edit::{edit, EditArgs};
pub use init::{init, InitArgs};
pub use tree::{tree, TreeArgs};

use crate::config::Config;
use anyhow::{Context, Result};
use bemforge_editor::{Document, FileStore};
use std::path::Path;

/// Config plus the document it points at.
pub(crate) fn open_document(cwd: &Path, document: Option<&Path>) -> Result<(Config, FileStore, Document)> {
    let config = Config::load(cwd)?;
    let store = FileStore::new(config.get_document_path(cwd, document));
    let doc = Document::load(&store).with_context(|| {
        format!(
            "Cannot open {} (run `bemforge init` to create it)",
            store.path().display()
        )
    })?;
    Ok((config, store, doc))
}
