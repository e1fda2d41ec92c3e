//! # leb128 - LEB128 data inspector
//!
//! Decodes and encodes unsigned and zig-zag signed LEB128 values the way a
//! hex editor's data inspector does, one value at a time.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use leb128_inspect::utils::HexBytes;
use leb128_inspect::{registered_converters, Converter, ConverterKind, DisplayOption};
use log::debug;

#[derive(Parser, Debug)]
#[command(name = "leb128")]
#[command(about = "Decode and encode LEB128 integers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Converter to use (unsigned, signed)
    #[arg(long, global = true, env = "LEB128_CODEC", default_value = "unsigned")]
    codec: ConverterKind,

    /// Integer display format (dec, hex, HEX)
    #[arg(long, global = true, env = "LEB128_FORMAT", default_value = "dec")]
    format: DisplayOption,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the registered converters
    List,

    /// Decode one value from hex bytes, e.g. `80 80 01`
    Decode {
        /// Bytes as hex, separated by spaces or commas, `0x` optional
        #[arg(required = true)]
        bytes: Vec<String>,
    },

    /// Encode one integer literal
    Encode {
        /// Decimal or hexadecimal text, depending on --format
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
}

/// Parses `["80 80", "0x01"]`, `["808001"]` and similar into raw bytes.
fn parse_hex_bytes(args: &[String]) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    for token in args
        .iter()
        .flat_map(|arg| arg.split(|c: char| c.is_whitespace() || c == ','))
        .filter(|t| !t.is_empty())
    {
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        if digits.is_empty() {
            bail!("malformed hex byte string {:?}", token);
        }
        let decoded = hex::decode(digits)
            .with_context(|| format!("malformed hex byte string {:?}", token))?;
        bytes.extend(decoded);
    }
    Ok(bytes)
}

fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Commands::List => {
            let lines: Vec<String> = registered_converters()
                .into_iter()
                .map(|kind| {
                    let conv = kind.create();
                    let meta = conv.metadata();
                    format!(
                        "{:<9} {:<16} max_size={} width={:?} byte_orders={:?}",
                        kind.to_string(),
                        meta.name,
                        meta.maximum_size,
                        meta.width,
                        meta.supported_byte_orders
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }

        Commands::Decode { bytes } => {
            let bytes = parse_hex_bytes(bytes)?;
            let conv = cli.codec.create();
            let decoded = conv
                .decode(&bytes, cli.format)
                .with_context(|| format!("{} cannot decode {}", conv.name(), HexBytes(&bytes)))?;
            if decoded.consumed < bytes.len() {
                debug!("ignoring {} trailing bytes", bytes.len() - decoded.consumed);
            }
            Ok(format!("{} ({} bytes)", decoded.text, decoded.consumed))
        }

        Commands::Encode { text } => {
            let conv = cli.codec.create();
            let encoded = conv
                .encode(text, cli.format)
                .with_context(|| format!("{} cannot encode {:?} as {}", conv.name(), text, cli.format))?;
            Ok(HexBytes(&encoded).to_string())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    debug!("{:?}", cli);

    println!("{}", run(&cli)?);
    Ok(())
}
