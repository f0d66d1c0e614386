//! # Shop Estimator CLI
//!
//! Runs one estimate from the terminal and prints the labeled results.
//!
//! ```text
//! calc_cli run --part-type aluminum_sign --width 48 --height 24 -o aluminum_gauge=.040
//! calc_cli run --input estimate.json --json
//! echo '{"part_type":"bullet"}' | calc_cli run --input -
//! calc_cli parts
//! calc_cli --registry shop.toml registry
//! ```
//!
//! Set `RUST_LOG=calc_core=debug` to see layout details on stderr.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use calc_core::calculations::input::keys;
use calc_core::calculations::OptionValue;
use calc_core::materials::{AcmSheetSize, HdpeSheetSize, MagnetThickness};
use calc_core::{calculate, CalcError, CalculationInput, MaterialRegistry, PartGroup, PartType};

#[derive(Parser)]
#[command(name = "calc_cli")]
#[command(about = "Sign shop material and weight estimator")]
#[command(version)]
struct Cli {
    /// TOML file overriding the standard shop constants
    #[arg(long, global = true)]
    registry: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate one part
    Run {
        /// JSON input record ("-" reads stdin)
        #[arg(short, long, conflicts_with = "part_type")]
        input: Option<PathBuf>,

        /// Part type code (e.g. aluminum_sign, digital_print, bullet)
        #[arg(short, long)]
        part_type: Option<String>,

        /// Item width in inches
        #[arg(short = 'W', long)]
        width: Option<String>,

        /// Item height in inches
        #[arg(short = 'H', long)]
        height: Option<String>,

        /// Part option as key=value (repeatable)
        #[arg(short, long = "option", value_parser = parse_option)]
        options: Vec<(String, String)>,

        /// Print the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List part groups and part types
    Parts,

    /// Print the effective material registry as JSON
    Registry,
}

fn parse_option(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn load_registry(path: Option<&Path>) -> Result<MaterialRegistry, CalcError> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading registry overrides");
            MaterialRegistry::from_toml_file(path)
        }
        None => Ok(MaterialRegistry::standard().clone()),
    }
}

fn read_input(path: &Path) -> Result<CalculationInput, String> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {}", e))?;
        buf
    } else {
        fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path.display(), e))?
    };
    serde_json::from_str(&text).map_err(|e| CalcError::from(e).to_string())
}

fn print_error(error: &CalcError, json: bool) {
    eprintln!("{}", error.user_message());
    if json {
        match serde_json::to_string_pretty(error) {
            Ok(body) => println!("{}", body),
            Err(e) => eprintln!("failed to serialize error: {}", e),
        }
    }
}

fn run(input: CalculationInput, registry: &MaterialRegistry, json: bool) -> ExitCode {
    match calculate(&input, registry) {
        Ok(result) if json => match serde_json::to_string_pretty(&result) {
            Ok(body) => {
                println!("{}", body);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("failed to serialize result: {}", e);
                ExitCode::FAILURE
            }
        },
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  {}", input.part_type);
            println!("═══════════════════════════════════════");
            if result.is_empty() {
                println!("  (nothing to calculate for this part type)");
            }
            let width = result.display_rows().iter().map(|(l, _)| l.len()).max().unwrap_or(0);
            for (label, value) in result.display_rows() {
                println!("  {:<width$}  {}", label, value, width = width);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            print_error(&error, json);
            ExitCode::FAILURE
        }
    }
}

/// Selectable stock for a part type as (option key, code, description).
fn stock_choices(part: PartType) -> Vec<(&'static str, &'static str, &'static str)> {
    match part {
        PartType::AcmSign => AcmSheetSize::ALL
            .iter()
            .map(|s| (keys::ACM_SHEET_SIZE, s.code(), s.display_name()))
            .collect(),
        PartType::HdpeSign => HdpeSheetSize::ALL
            .iter()
            .map(|s| (keys::HDPE_SHEET_SIZE, s.code(), s.display_name()))
            .collect(),
        PartType::Magnet => MagnetThickness::ALL
            .iter()
            .map(|t| (keys::MAGNET_THICKNESS, t.code(), t.display_name()))
            .collect(),
        _ => Vec::new(),
    }
}

fn list_parts() {
    for group in PartGroup::ALL {
        println!("{} ({})", group.display_name(), group.code());
        for part in group.members() {
            let mut notes = String::new();
            if !part.requires_dimensions() {
                notes.push_str("  [no size]");
            }
            if part.is_detail() {
                notes.push_str("  [detail]");
            }
            println!("  {:<16} {}{}", part.code(), part.display_name(), notes);
            for (key, code, description) in stock_choices(*part) {
                println!("      {}={:<8} {}", key, code, description);
            }
        }
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let registry = match load_registry(cli.registry.as_deref()) {
        Ok(registry) => registry,
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Run {
            input,
            part_type,
            width,
            height,
            options,
            json,
        } => {
            let input = match input {
                Some(path) => match read_input(&path) {
                    Ok(input) => input,
                    Err(message) => {
                        eprintln!("{}", message);
                        return ExitCode::FAILURE;
                    }
                },
                None => {
                    let Some(part_type) = part_type else {
                        eprintln!("either --input or --part-type is required");
                        return ExitCode::FAILURE;
                    };
                    let mut input = CalculationInput::new(part_type);
                    input.width = width;
                    input.height = height;
                    for (key, value) in options {
                        input.options.insert(key, OptionValue::Text(value));
                    }
                    input
                }
            };
            run(input, &registry, json)
        }
        Commands::Parts => {
            list_parts();
            ExitCode::SUCCESS
        }
        Commands::Registry => match serde_json::to_string_pretty(&registry) {
            Ok(body) => {
                println!("{}", body);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("failed to serialize registry: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_option() {
        assert_eq!(
            parse_option("roll_width=30").unwrap(),
            ("roll_width".to_string(), "30".to_string())
        );
        assert_eq!(
            parse_option(" include_bleed = false ").unwrap(),
            ("include_bleed".to_string(), "false".to_string())
        );
        assert!(parse_option("roll_width").is_err());
        assert!(parse_option("=30").is_err());
    }

    #[test]
    fn test_cli_parses_run() {
        let cli = Cli::try_parse_from([
            "calc_cli", "run", "-p", "magnet", "-W", "12", "-H", "18", "-o", "roll_width=30",
        ])
        .unwrap();
        match cli.command {
            Commands::Run {
                part_type, options, ..
            } => {
                assert_eq!(part_type.as_deref(), Some("magnet"));
                assert_eq!(options, vec![("roll_width".to_string(), "30".to_string())]);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_stock_choices() {
        let hdpe = stock_choices(PartType::HdpeSign);
        assert_eq!(hdpe.len(), 4);
        assert_eq!(hdpe[1], ("hdpe_sheet_size", ".110_96", ".110in x 48in x 96in"));

        let magnet = stock_choices(PartType::Magnet);
        assert_eq!(magnet[1], ("magnet_thickness", "0.060", "60 mil"));

        assert_eq!(stock_choices(PartType::AcmSign)[1].2, "3mm x 120in x 60in");
        assert!(stock_choices(PartType::Banner).is_empty());
    }
}
