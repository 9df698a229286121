use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use sss_dist::cli::{Cli, Commands};
use sss_dist::commands::{DistributeOptions, distribute};
use sss_dist::domain::SplitConfig;
use sss_dist::error::Error;

/// Logs go to stderr so stdout carries only the artifact paths
fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Distribute(args) => {
            let Some((filename, threshold, size)) = args.positionals()? else {
                let mut command = Cli::command();
                if let Some(distribute) = command.find_subcommand_mut("distribute") {
                    distribute.print_help()?;
                }
                return Ok(());
            };

            // Validate split parameters before touching the file
            let split = SplitConfig::from_args(threshold, size, args.chunk).map_err(Error::from)?;

            let options = DistributeOptions {
                filename,
                split,
                pipeline: args.pipeline_config(),
            };
            let report = distribute(&options).await?;

            for path in &report.written {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}
