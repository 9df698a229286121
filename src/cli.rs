use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::compress::Level;
use crate::error::{Error, Result};
use crate::pipeline::PipelineConfig;

/// Validates a gzip level (0-9)
fn validate_level(s: &str) -> Result<Level, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    Level::new(value).map_err(|e| e.to_string())
}

fn parse_number(name: &str, value: &str) -> Result<i64> {
    value
        .parse()
        .map_err(|_| Error::Argument(format!("{name} '{value}' is not a valid number")))
}

#[derive(Parser)]
#[command(name = "sss")]
#[command(about = "Split a file into Shamir Secret Shares stored as compressed artifacts")]
pub struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split <filename> into <size> shares, any <threshold> of which recover it
    ///
    /// Shares are written next to the input as <filename>.<i>.gz, replacing
    /// any existing files with those names.
    Distribute(DistributeArgs),
}

#[derive(Args, Debug)]
pub struct DistributeArgs {
    /// <filename> <threshold> <size>
    #[arg(value_name = "ARGS", allow_negative_numbers = true)]
    pub args: Vec<String>,

    /// Secret bytes dealt per independent split
    #[arg(short, long, default_value_t = 256, allow_negative_numbers = true)]
    pub chunk: i64,

    /// Maximum number of shares written at once [default: available CPUs]
    #[arg(short, long, env = "SSS_JOBS")]
    pub jobs: Option<NonZeroUsize>,

    /// Gzip compression level (0-9)
    #[arg(long, env = "SSS_LEVEL", default_value = "6", value_parser = validate_level)]
    pub level: Level,
}

impl DistributeArgs {
    /// Splits the positionals into filename, threshold and size
    ///
    /// Returns `Ok(None)` when there are not exactly three of them.
    ///
    /// # Errors
    /// Returns [`Error::Argument`] if threshold or size is not a number
    pub fn positionals(&self) -> Result<Option<(PathBuf, i64, i64)>> {
        let [filename, threshold, size] = self.args.as_slice() else {
            return Ok(None);
        };
        let threshold = parse_number("threshold", threshold)?;
        let size = parse_number("size", size)?;
        Ok(Some((PathBuf::from(filename), threshold, size)))
    }

    #[must_use]
    pub fn pipeline_config(&self) -> PipelineConfig {
        let defaults = PipelineConfig::default();
        PipelineConfig::new(self.jobs.unwrap_or(defaults.capacity()), self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distribute_args(argv: &[&str]) -> DistributeArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Distribute(args) => args,
        }
    }

    #[test]
    fn test_three_positionals() {
        let args = distribute_args(&["sss", "distribute", "secret.txt", "3", "5", "--chunk", "4"]);
        let (filename, threshold, size) = args.positionals().unwrap().unwrap();

        assert_eq!(filename, PathBuf::from("secret.txt"));
        assert_eq!((threshold, size), (3, 5));
        assert_eq!(args.chunk, 4);
    }

    #[test]
    fn test_wrong_positional_count() {
        let args = distribute_args(&["sss", "distribute", "secret.txt", "3"]);
        assert!(args.positionals().unwrap().is_none());

        let args = distribute_args(&["sss", "distribute", "a", "1", "2", "3"]);
        assert!(args.positionals().unwrap().is_none());

        let args = distribute_args(&["sss", "distribute"]);
        assert!(args.positionals().unwrap().is_none());
    }

    #[test]
    fn test_non_numeric_threshold() {
        let args = distribute_args(&["sss", "distribute", "secret.txt", "three", "5"]);
        let err = args.positionals().unwrap_err();
        assert!(matches!(err, Error::Argument(_)));
        assert!(err.to_string().contains("threshold 'three'"));
    }

    #[test]
    fn test_non_numeric_size() {
        let args = distribute_args(&["sss", "distribute", "secret.txt", "3", "5x"]);
        assert!(args.positionals().unwrap_err().to_string().contains("size '5x'"));
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let args = distribute_args(&["sss", "distribute", "secret.txt", "-1", "5", "--chunk", "-4"]);
        let (_, threshold, _) = args.positionals().unwrap().unwrap();
        assert_eq!(threshold, -1);
        assert_eq!(args.chunk, -4);
    }

    #[test]
    fn test_jobs_and_level() {
        let args = distribute_args(&["sss", "distribute", "f", "2", "3", "-j", "2", "--level", "9"]);
        let config = args.pipeline_config();
        assert_eq!(config.capacity().get(), 2);
        assert_eq!(*config.level(), 9);

        assert!(Cli::try_parse_from(["sss", "distribute", "--level", "10"]).is_err());
        assert!(Cli::try_parse_from(["sss", "distribute", "--jobs", "0"]).is_err());
    }
}
