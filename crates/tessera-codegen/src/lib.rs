//! Artifact generation for the Tessera token pipeline.
//!
//! Three sibling generators share the flattener and resolvers:
//! - [`css`]: `:root` custom properties plus a dark-mode override
//!   block, and utility classes for composite text styles.
//! - [`theme`]: the nested theme-config JSON for the styling preset.
//! - [`snapshot`]: per-mode design-tool exports with every reference
//!   resolved to a concrete value.
//!
//! [`generate`] runs all three over explicitly provided documents and
//! returns the artifact list; callers own all file I/O.

pub mod css;
pub mod snapshot;
pub mod theme;

use tessera_core::errors::{ExportError, TokenError};
use tessera_core::model::{Mode, TokenDocument};

/// Relative output path of the variable stylesheet.
pub const TOKENS_CSS_PATH: &str = "css/tokens.css";
/// Relative output path of the utility-class stylesheet.
pub const UTILITIES_CSS_PATH: &str = "css/utilities.css";
/// Relative output path of the theme-config document.
pub const THEME_CONFIG_PATH: &str = "theme/default.json";

/// A generated artifact: relative path and full content.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Relative output path of one mode's design-tool export.
pub fn snapshot_path(mode: Mode) -> String {
    format!("export/mode-tokens-{}.json", mode.key())
}

/// Run every generator over the two parsed documents.
///
/// The same inputs always produce byte-identical artifacts; outputs are
/// regenerated wholesale on every run.
pub fn generate(
    base: &TokenDocument,
    semantic: &TokenDocument,
) -> Result<Vec<GeneratedFile>, TokenError> {
    let mut files = Vec::new();

    let stylesheets = css::generate(base, semantic);
    files.push(GeneratedFile {
        path: TOKENS_CSS_PATH.to_string(),
        content: stylesheets.tokens_css,
    });
    if let Some(utilities) = stylesheets.utilities_css {
        files.push(GeneratedFile {
            path: UTILITIES_CSS_PATH.to_string(),
            content: utilities,
        });
    }

    let theme = theme::generate(base, semantic)?;
    files.push(GeneratedFile {
        path: THEME_CONFIG_PATH.to_string(),
        content: to_pretty_json(&theme)?,
    });

    for mode in Mode::ALL {
        let tree = snapshot::generate(semantic, base, mode)?;
        files.push(GeneratedFile {
            path: snapshot_path(mode),
            content: to_pretty_json(&tree)?,
        });
    }

    Ok(files)
}

fn to_pretty_json(value: &serde_json::Value) -> Result<String, ExportError> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}
