//! The command-line interface
use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use miette::{LabeledSpan, MietteDiagnostic, NamedSource};

use crate::{config::Config, error::Error, lint::FileReport, profile::ProfileKind};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a `.trojanlint.toml` config file with default values
    Init,

    /// Generate shell completion scripts
    Completions {
        /// The flavor of shell for which to generate the completion script
        #[arg(short, long)]
        shell: Shell,

        /// The output directory for the file, prints to `stdout` if omitted
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        out: Option<PathBuf>,
    },
}

#[derive(Parser, Debug, Clone)]
#[command(version = VERSION, about, long_about = None)]
#[non_exhaustive]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// One or more paths to files and folders to analyze
    #[arg(name = "PATH", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Path to a file or folder to exclude (can be used more than once)
    ///
    /// To exclude paths based on a pattern, use a `.tlignore` file (same syntax as `.gitignore`).
    #[arg(short, long, value_hint = clap::ValueHint::AnyPath)]
    pub exclude: Vec<PathBuf>,

    /// The analysis profile selecting the per-token-type policies
    #[arg(long, value_enum)]
    pub profile: Option<ProfileKind>,

    /// Write output to a file instead of stderr
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub out: Option<PathBuf>,

    /// Output diagnostics in JSON format
    ///
    /// Can be set with `--json` (means true), `--json=true` or `--json=false`.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub json: Option<bool>,

    /// Compact output
    ///
    /// If combined with `--json`, the output is minified.
    ///
    /// Can be set with `--compact` (means true), `--compact=true` or `--compact=false`.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub compact: Option<bool>,

    /// Sort the results by file path
    ///
    /// Can be set with `--sort` (means true), `--sort=true` or `--sort=false`.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub sort: Option<bool>,
}

/// Read the configuration from config file, environment variables and CLI arguments
pub fn read_config(args: Args) -> Result<Config> {
    let mut config: Config = Config::figment().extract().map_err(Error::from)?;
    // paths
    config.trojanlint.paths.extend(args.paths);
    config.trojanlint.exclude.extend(args.exclude);
    // analysis
    if let Some(profile) = args.profile {
        config.trojanlint.profile = profile;
    }
    // output
    if let Some(out) = args.out {
        config.output.out = Some(out);
    }
    if let Some(json) = args.json {
        config.output.json = json;
    }
    if let Some(compact) = args.compact {
        config.output.compact = compact;
    }
    if let Some(sort) = args.sort {
        config.output.sort = sort;
    }
    Ok(config)
}

/// Write the default configuration to a `.trojanlint.toml` file in the current directory.
///
/// If a file already exists with the same name, it gets renamed to `.trojanlint.bck.toml` before writing the default
/// config.
pub fn write_default_config() -> Result<PathBuf> {
    let config = Config::default();
    let path = PathBuf::from(".trojanlint.toml");
    if path.exists() {
        fs::rename(&path, ".trojanlint.bck.toml")?;
        println!("Existing `.trojanlint.toml` file was renamed to `.trojanlint.bck.toml`");
    }
    fs::write(&path, toml::to_string(&config)?)?;
    Ok(dunce::canonicalize(&path)?)
}

/// Print the report for a given file, either as pretty or compact text output
///
/// The root path is the current working directory used to compute relative paths if possible. If the file path is
/// not a child of the root path, then the full canonical path of the file is used instead.
/// The writer can be anything that implement [`io::Write`].
pub fn print_report(
    f: &mut impl io::Write,
    root_path: impl AsRef<Path>,
    report: FileReport,
    compact: bool,
) -> std::result::Result<(), io::Error> {
    if compact {
        return report.print_compact(f, root_path);
    }
    let source_name = match report.path.strip_prefix(root_path.as_ref()) {
        Ok(relative_path) => relative_path.to_string_lossy().into_owned(),
        Err(_) => report.path.to_string_lossy().into_owned(),
    };
    let contents = report.contents.unwrap_or_default();
    let source = Arc::new(NamedSource::new(source_name, contents.clone()));
    for part in report.parts {
        let start = byte_offset(&contents, part.start().index);
        let end = byte_offset(&contents, part.end().index);
        let labels: Vec<_> = part
            .nits()
            .iter()
            .map(|nit| LabeledSpan::new(Some(nit.to_string()), start, end.saturating_sub(start)))
            .collect();
        let msg = format!("{} at {}", part.name(), part.start());
        let diagnostic: miette::Report = MietteDiagnostic::new(msg).with_labels(labels).into();
        write!(f, "{:?}", diagnostic.with_source_code(Arc::clone(&source)))?;
    }
    Ok(())
}

/// Convert a codepoint index into a byte offset into the source
fn byte_offset(source: &str, char_index: usize) -> usize {
    source
        .char_indices()
        .nth(char_index)
        .map_or(source.len(), |(offset, _)| offset)
}
