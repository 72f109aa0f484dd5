mod config;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use properties::Properties;
use tracing::{debug, info};

use crate::config::{Config, LogConfig};

/// Inspect and edit `.properties` files
#[derive(Debug, Parser)]
#[command(name = "properties", version)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Properties file consulted when a key is missing
    #[arg(long, global = true)]
    defaults: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the effective value of a key
    Get {
        file: PathBuf,
        key: String,
        /// Value printed when the key is missing everywhere
        #[arg(long = "or")]
        fallback: Option<String>,
    },
    /// Print every key reachable from the file and its defaults
    Keys { file: PathBuf },
    /// Print the flattened entries, optionally only those under a prefix
    List {
        file: PathBuf,
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Set a key in the file, creating the file if needed
    Set {
        file: PathBuf,
        key: String,
        value: String,
    },
    /// Remove a key from the file
    Remove { file: PathBuf, key: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(defaults) = cli.defaults {
        config.defaults = Some(defaults);
    }
    if let Some(level) = cli.log_level {
        config.log.level = level;
    }

    init_logging(&config.log);

    let stdout = io::stdout();
    run(cli.command, &config, &mut stdout.lock())
}

fn init_logging(log: &LogConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level)),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

/// Execute one command, printing results to `out`
fn run(command: Command, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let defaults = match &config.defaults {
        Some(path) => {
            let defaults = properties::load_from_path(path)
                .with_context(|| format!("Failed to load defaults '{}'", path.display()))?;
            debug!(path = %path.display(), entries = defaults.len(), "using defaults");
            Some(Arc::new(defaults))
        }
        None => None,
    };

    match command {
        Command::Get { file, key, fallback } => {
            let props = open(&file, defaults, false)?;
            let value = match fallback {
                Some(fallback) => props.get_or_default(&key, &fallback),
                None => props
                    .get(&key)
                    .with_context(|| format!("Key '{}' not found in '{}'", key, file.display()))?,
            };
            writeln!(out, "{}", value)?;
        }
        Command::Keys { file } => {
            let props = open(&file, defaults, false)?;
            let mut keys: Vec<String> = props.keys().into_iter().collect();
            keys.sort();
            for key in keys {
                writeln!(out, "{}", key)?;
            }
        }
        Command::List { file, prefix } => {
            let props = open(&file, defaults, false)?;
            let flattened = match prefix {
                Some(prefix) => props.filter_has_prefix(&prefix),
                None => props.filter(|_| true),
            };
            flattened.write_to(&mut *out)?;
        }
        Command::Set { file, key, value } => {
            let props = open(&file, defaults, true)?;
            props.put(key.as_str(), value);
            save(&props, &file)?;
            info!(file = %file.display(), key = %key, "set property");
        }
        Command::Remove { file, key } => {
            let props = open(&file, defaults, false)?;
            if props.remove(&key).is_none() {
                info!(file = %file.display(), key = %key, "key not present locally");
            }
            save(&props, &file)?;
        }
    }

    Ok(())
}

/// Load `path` on top of `defaults`; a missing file is an empty store when `allow_missing`
fn open(
    path: &Path,
    defaults: Option<Arc<Properties>>,
    allow_missing: bool,
) -> anyhow::Result<Properties> {
    let props = match defaults {
        Some(defaults) => Properties::with_defaults(defaults),
        None => Properties::new(),
    };

    match props.load_from(path) {
        Ok(()) => Ok(props),
        Err(e) if allow_missing && e.io_kind() == Some(io::ErrorKind::NotFound) => {
            debug!(path = %path.display(), "starting from an empty file");
            Ok(props)
        }
        Err(e) => Err(e).with_context(|| format!("Failed to load '{}'", path.display())),
    }
}

fn save(props: &Properties, path: &Path) -> anyhow::Result<()> {
    props
        .save_to(path)
        .with_context(|| format!("Failed to save '{}'", path.display()))
}
