use anyhow::Context;
use bemforge_compiler_html::CompileOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "bemforge.config.json";

/// bemforge configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Style document edited by the CLI
    #[serde(default = "default_document_path")]
    pub document_path: String,

    /// Where `compile` writes generated files
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Indentation per level in generated HTML
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Tag for elements without one
    #[serde(default = "default_fallback_tag")]
    pub fallback_tag: String,
}

fn default_document_path() -> String {
    "bemforge.json".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_indent() -> String {
    "  ".to_string()
}

fn default_fallback_tag() -> String {
    "div".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid config in {}", config_path.display()))?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Style document path, with a command line override taking precedence
    pub fn get_document_path(&self, cwd: &Path, document: Option<&Path>) -> PathBuf {
        match document {
            Some(path) => cwd.join(path),
            None => cwd.join(&self.document_path),
        }
    }

    /// Get absolute path to output directory
    pub fn get_out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }

    pub fn html_options(&self) -> CompileOptions {
        CompileOptions {
            indent: self.indent.clone(),
            fallback_tag: self.fallback_tag.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document_path: default_document_path(),
            out_dir: default_out_dir(),
            indent: default_indent(),
            fallback_tag: default_fallback_tag(),
        }
    }
}
