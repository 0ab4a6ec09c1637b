use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use remote_config::config::loader::{load_config, load_from_env};
use remote_config::config::validation::validate_config;
use remote_config::config::ConfigError;
use remote_config::observability::logging::{init_logging, DEFAULT_FILTER};
use remote_config::{ClientConfig, ConfigEntry, ConfigStore};

#[derive(Parser)]
#[command(name = "config-cli")]
#[command(about = "Inspect values served by the remote config service", long_about = None)]
struct Cli {
    /// TOML client configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Service prefix; overrides the file and CONFIG_SERVICE_PREFIX.
    #[arg(short, long)]
    prefix: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one key and print its typed views
    Get {
        name: String,

        /// Also report whether this element is in the list view
        #[arg(long)]
        contains: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate the effective configuration
    Check {
        /// Print the effective configuration as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct EntryReport<'a> {
    name: &'a str,
    loaded: bool,
    error: Option<String>,
    value: &'a str,
    integer: i64,
    boolean: bool,
    array: Vec<&'a str>,
    random: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    contains: Option<bool>,
}

impl<'a> EntryReport<'a> {
    fn new(name: &'a str, entry: &'a ConfigEntry, candidate: Option<&str>) -> Self {
        Self {
            name,
            loaded: entry.is_loaded(),
            error: entry.error().map(ToString::to_string),
            value: entry.as_str(),
            integer: entry.as_i64(),
            boolean: entry.as_bool(),
            array: entry.as_array(),
            random: entry.pick_random(),
            contains: candidate.map(|c| entry.contains(c)),
        }
    }

    fn print_plain(&self) {
        println!("name:     {}", self.name);
        println!("loaded:   {}", self.loaded);
        if let Some(error) = &self.error {
            println!("error:    {}", error);
        }
        println!("value:    {:?}", self.value);
        println!("integer:  {}", self.integer);
        println!("boolean:  {}", self.boolean);
        println!("array:    {:?}", self.array);
        println!("random:   {:?}", self.random);
        if let Some(contains) = self.contains {
            println!("contains: {}", contains);
        }
    }
}

fn effective_config(cli: &Cli) -> Result<ClientConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => load_from_env()?,
    };
    if let Some(prefix) = &cli.prefix {
        config.service_prefix = Some(prefix.clone());
        validate_config(&config).map_err(ConfigError::Validation)?;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(DEFAULT_FILTER)?;

    let config = effective_config(&cli)?;

    match &cli.command {
        Commands::Check { json: true } => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::Check { json: false } => {
            match &config.service_prefix {
                Some(prefix) => println!("service_prefix: {}", prefix),
                None => println!("service_prefix: <unset>"),
            }
            println!("freshness:      {}s", config.freshness_secs);
            println!("strict_status:  {}", config.strict_status);
            println!("configuration OK");
        }
        Commands::Get {
            name,
            contains,
            json,
        } => {
            let store = ConfigStore::from_config(&config)?;
            let entry = store.get(name).await;
            let report = EntryReport::new(name, &entry, contains.as_deref());

            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report.print_plain();
            }

            if let Some(error) = entry.error() {
                return Err(format!("failed to load '{}': {}", name, error).into());
            }
        }
    }

    Ok(())
}
