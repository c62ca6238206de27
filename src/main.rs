//! Command line front end for card color extraction

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use card_colors::{
    extract_grid, extract_manual, write_database, CodePolicy, ExtractionError, GridConfig,
    PickerConfig,
};

/// Extract representative colors from a photographed color card
#[derive(Debug, Parser)]
#[command(name = "card_colors", version)]
struct Cli {
    /// Path to the card photograph
    image: PathBuf,

    /// Output JSON file
    #[arg(short, long, default_value = "extracted_colors.json")]
    output: PathBuf,

    /// Acquisition mode
    #[arg(short, long, value_enum, default_value_t = Mode::Manual)]
    mode: Mode,

    /// Swatch rows on the card (grid mode)
    #[arg(long)]
    rows: Option<u32>,

    /// Swatch columns on the card (grid mode)
    #[arg(long)]
    cols: Option<u32>,

    /// Base for sequential color codes
    #[arg(long, default_value_t = 100)]
    start_code: i64,

    /// Comma-separated explicit color codes, in sample order
    #[arg(long)]
    codes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Sample a regular grid automatically
    Grid,
    /// Click each swatch by hand
    Manual,
}

fn code_policy(cli: &Cli) -> CodePolicy {
    match &cli.codes {
        Some(list) => {
            let codes = list.split(',').map(|c| c.trim().to_string()).collect();
            CodePolicy::explicit(codes, cli.start_code)
        }
        None => CodePolicy::sequential(cli.start_code),
    }
}

fn run(cli: &Cli) -> card_colors::Result<()> {
    let policy = code_policy(cli);

    let db = match cli.mode {
        Mode::Grid => {
            let defaults = GridConfig::default();
            let grid = GridConfig {
                rows: cli.rows.unwrap_or(defaults.rows),
                cols: cli.cols.unwrap_or(defaults.cols),
            };
            extract_grid(&cli.image, &grid, &policy)?
        }
        Mode::Manual => {
            info!("Click each swatch to pick its color");
            info!("Keys: S = save and quit, Q = cancel, R = start over");
            extract_manual(&cli.image, &PickerConfig::default(), &policy)?
        }
    };

    write_database(db.records(), &cli.output)?;
    info!(
        "Done. Edit the name fields in {} to give the colors real names",
        cli.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(ExtractionError::PickerCancelled) => {
            warn!("{}", ExtractionError::PickerCancelled.user_message());
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{}", err.user_message());
            debug!("{:?}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_split_and_trimmed() {
        let cli = Cli::parse_from(["card_colors", "card.png", "--codes", " A1 , B2 ,C3"]);
        let policy = code_policy(&cli);
        assert_eq!(
            policy.codes,
            Some(vec!["A1".to_string(), "B2".to_string(), "C3".to_string()])
        );
        assert_eq!(policy.start_code, Some(100));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["card_colors", "card.png"]);
        assert_eq!(cli.mode, Mode::Manual);
        assert_eq!(cli.output, PathBuf::from("extracted_colors.json"));
        assert_eq!(cli.start_code, 100);
        assert!(cli.rows.is_none());

        let policy = code_policy(&cli);
        assert_eq!(policy, CodePolicy::sequential(100));
    }

    #[test]
    fn test_grid_mode_flags() {
        let cli = Cli::parse_from([
            "card_colors",
            "card.png",
            "--mode",
            "grid",
            "--rows",
            "6",
            "--cols",
            "12",
        ]);
        assert_eq!(cli.mode, Mode::Grid);
        assert_eq!(cli.rows, Some(6));
        assert_eq!(cli.cols, Some(12));
    }
}
