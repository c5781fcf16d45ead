//! radixref - Reinterpret attribute values between numeral encodings
//!
//! This tool drives the radix data reference the way a host process would:
//! it sets the configuration string, gathers the input reference, evaluates
//! the supplied value, and prints the timestamped, quality-flagged result.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, ValueEnum};
use radixref_core::{
    AttributeResolver, DataReference, Evaluation, HostAttribute, RadixConverter,
    ResolvedAttribute, Timestamp, ValueType,
};
use std::fs;
use std::io::BufRead;
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

/// Reinterpret attribute values between hexadecimal, decimal, and binary encodings
#[derive(Parser, Debug)]
#[command(name = "radixref")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    config: ConfigSource,

    /// Raw input value to convert (omit to evaluate without an input value)
    #[arg(long)]
    value: Option<String>,

    /// Read input values from stdin, one per line
    #[arg(long, conflicts_with = "value")]
    stdin: bool,

    /// Time context for the result timestamp (RFC 3339)
    #[arg(short, long)]
    time: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct ConfigSource {
    /// Configuration string: `<reference>[;<selector>]`
    #[arg(short, long)]
    config: Option<String>,

    /// Read the configuration string from a file
    #[arg(long)]
    config_file: Option<PathBuf>,
}

/// Output format for evaluation results
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Tab-separated value, status, and timestamp
    Text,
    /// One JSON object per result
    Json,
}

/// Resolves every reference; the value is supplied on the command line,
/// so there is no data model to miss in.
struct PermissiveResolver;

impl AttributeResolver for PermissiveResolver {
    fn resolve(&self, reference: &str) -> Option<ResolvedAttribute> {
        Some(ResolvedAttribute {
            name: reference.to_string(),
            deleted: false,
        })
    }
}

/// Stand-in for the host attribute: always modifiable, logs coercion
struct CliAttribute {
    value_type: ValueType,
}

impl HostAttribute for CliAttribute {
    fn notify_config_changed(&mut self) {
        debug!("configuration change recorded");
    }

    fn is_dirty(&self) -> bool {
        true
    }

    fn value_type(&self) -> ValueType {
        self.value_type
    }

    fn set_value_type(&mut self, value_type: ValueType) {
        debug!("attribute value type widened to {:?}", value_type);
        self.value_type = value_type;
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .init();

    let config = load_config(&cli.config)?;
    let time_context = cli.time.as_deref().map(parse_time).transpose()?;

    let mut attribute = CliAttribute {
        value_type: ValueType::Integer,
    };
    let mut converter = RadixConverter::new();
    converter.set_config_string(&config, Some(&mut attribute));

    // Gather inputs the way a host would before evaluating.
    match converter.get_inputs(&PermissiveResolver)? {
        Some(inputs) => info!("resolved input attribute '{}'", inputs[0].name),
        None => info!("configuration names no input attribute"),
    }

    if cli.stdin {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("Failed to read from stdin")?;
            let result = converter.evaluate(time_context, Some(&line));
            print_result(&result, cli.format)?;
        }
    } else {
        let result = converter.evaluate(time_context, cli.value.as_deref());
        print_result(&result, cli.format)?;
    }

    Ok(())
}

/// Load the configuration string from the selected source
fn load_config(source: &ConfigSource) -> Result<String> {
    if let Some(config) = &source.config {
        Ok(config.clone())
    } else if let Some(path) = &source.config_file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Ok(text.trim().to_string())
    } else {
        bail!("Either --config or --config-file must be specified")
    }
}

/// Parse an RFC 3339 time context argument
fn parse_time(raw: &str) -> Result<Timestamp> {
    let instant = DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("Invalid RFC 3339 time: '{raw}'"))?;
    Ok(Timestamp::from(instant.with_timezone(&Utc)))
}

/// Print a single evaluation result in the selected format
fn print_result(result: &Evaluation, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}\t{}\t{}", result.value, result.status, result.timestamp);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(result)?);
        }
    }
    Ok(())
}
