use add_numbers::config::DEFAULT_FILTER;
use add_numbers::{Adder, Config};
use anyhow::{Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "add-numbers", about = "Says hello, and adds two integers on request")]
struct Cli {
    /// Path to config file, read only by `add` (missing file means defaults)
    #[arg(short, long, global = true, default_value = "add-numbers.toml")]
    config: PathBuf,

    /// Stray words are accepted and ignored
    #[arg(hide = true, value_name = "ARGS")]
    _args: Vec<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Print "Sum is: <NUM1 + NUM2>"
    #[command(allow_negative_numbers = true)]
    Add { num1: i32, num2: i32 },
}

/// Loads the config and installs the stderr subscriber. A bad config or
/// filter is reported as a warning and replaced by the defaults.
fn init_tracing(config_path: &Path) {
    let (config, config_error) = match Config::load_or_default(config_path) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let (filter, filter_error) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => match EnvFilter::try_new(&config.logging.filter) {
            Ok(filter) => (filter, None),
            Err(e) => (EnvFilter::new(DEFAULT_FILTER), Some(e)),
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = config_error {
        warn!(error = %e, path = %config_path.display(), "ignoring config, using defaults");
    }
    if let Some(e) = filter_error {
        warn!(error = %e, filter = %config.logging.filter, "invalid log filter, using default");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            println!("Hello World");
            Ok(())
        }
        Some(Command::Add { num1, num2 }) => {
            dotenvy::dotenv().ok();
            init_tracing(&cli.config);

            let adder: Adder = Adder::default();
            match adder.add_num(num1, num2) {
                Some(line) => {
                    println!("{line}");
                    Ok(())
                }
                None => bail!("sum unavailable"),
            }
        }
    }
}
