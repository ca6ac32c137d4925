//! Batch entry point: read the two token documents, run every
//! generator, write the artifacts. A missing input file or invalid JSON
//! aborts before any generation; outputs are regenerated wholesale on
//! every run.

use clap::{Parser, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use tessera_core::errors::{ExportError, TokenError};
use tessera_core::model::TokenDocument;
use tessera_core::parse_document;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "tessera", version, about = "Generate design-token artifacts", long_about = None)]
struct Cli {
    /// Path to the base token document
    #[arg(long, value_name = "FILE", default_value = "tokens.json")]
    tokens: PathBuf,

    /// Path to the semantic token document
    #[arg(
        long = "semantic-tokens",
        value_name = "FILE",
        default_value = "semantic-tokens.json"
    )]
    semantic_tokens: PathBuf,

    /// Directory to write generated artifacts into
    #[arg(long, value_name = "DIR", default_value = "generated")]
    out_dir: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(
            cli.log_level
                .to_string()
                .parse()
                .unwrap_or_else(|_| tracing::Level::INFO.into()),
        )
        .from_env_lossy();
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(err) = run(&cli) {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), TokenError> {
    let base = read_document(&cli.tokens)?;
    let semantic = read_document(&cli.semantic_tokens)?;
    info!(
        families = base.families.len() + semantic.families.len(),
        "parsed token documents"
    );

    let files = tessera_codegen::generate(&base, &semantic)?;
    for file in &files {
        let path = cli.out_dir.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ExportError::Io)?;
        }
        fs::write(&path, &file.content).map_err(ExportError::Io)?;
        info!(path = %path.display(), bytes = file.content.len(), "wrote artifact");
    }
    info!(count = files.len(), "token pipeline finished");
    Ok(())
}

fn read_document(path: &Path) -> Result<TokenDocument, TokenError> {
    let text = fs::read_to_string(path).map_err(ExportError::Io)?;
    let json: serde_json::Value = serde_json::from_str(&text).map_err(ExportError::Json)?;
    Ok(parse_document(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_inputs(dir: &Path) -> (PathBuf, PathBuf) {
        let tokens = dir.join("tokens.json");
        let semantic = dir.join("semantic-tokens.json");
        fs::write(
            &tokens,
            serde_json::json!({
                "colors": {
                    "$type": "color",
                    "blue": { "5": { "$type": "color", "$value": "#1e40af" } }
                }
            })
            .to_string(),
        )
        .unwrap();
        fs::write(
            &semantic,
            serde_json::json!({
                "colors": {
                    "$type": "color",
                    "accent": { "$type": "color", "$value": "{colors.blue.5}" }
                }
            })
            .to_string(),
        )
        .unwrap();
        (tokens, semantic)
    }

    #[test]
    fn test_run_writes_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let (tokens, semantic_tokens) = write_inputs(dir.path());
        let out_dir = dir.path().join("generated");

        let cli = Cli {
            tokens,
            semantic_tokens,
            out_dir: out_dir.clone(),
            log_level: LogLevel::Info,
        };
        run(&cli).unwrap();

        let css = fs::read_to_string(out_dir.join("css/tokens.css")).unwrap();
        assert!(css.contains("--colors-accent: var(--colors-blue-5);"));
        assert!(out_dir.join("theme/default.json").exists());
        assert!(out_dir.join("export/mode-tokens-light.json").exists());
        assert!(out_dir.join("export/mode-tokens-dark.json").exists());
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            tokens: dir.path().join("nope.json"),
            semantic_tokens: dir.path().join("also-nope.json"),
            out_dir: dir.path().join("generated"),
            log_level: LogLevel::Info,
        };
        let result = run(&cli);
        assert!(matches!(
            result,
            Err(TokenError::Export(ExportError::Io(_)))
        ));
        assert!(!dir.path().join("generated").exists());
    }

    #[test]
    fn test_invalid_json_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let tokens = dir.path().join("tokens.json");
        fs::write(&tokens, "{not json").unwrap();
        let cli = Cli {
            tokens: tokens.clone(),
            semantic_tokens: tokens,
            out_dir: dir.path().join("generated"),
            log_level: LogLevel::Info,
        };
        assert!(matches!(
            run(&cli),
            Err(TokenError::Export(ExportError::Json(_)))
        ));
    }
}
