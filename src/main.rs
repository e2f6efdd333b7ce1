use anyhow::Result;
use clap::{Parser, Subcommand};
use portfolio::cli::FormArgs;
use portfolio_contact::SubmitOutcome;

/// portfolio - contact form
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Validate and deliver portfolio contact form messages", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the form fields and print the error shown for each one
    Validate {
        #[command(flatten)]
        form: FormArgs,
    },
    /// Validate the form and send it with the configured transport
    Submit {
        #[command(flatten)]
        form: FormArgs,
    },
    /// Print the configured contact channels
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = portfolio::config::Config::load(cli.config.clone())?;

    portfolio::observability::init_observability(
        "portfolio",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let success = match cli.command {
        Commands::Validate { form } => portfolio::cli::validate(form)?,
        Commands::Submit { form } => {
            config.validate()?;
            portfolio::cli::submit(&config, form).await? == SubmitOutcome::Sent
        }
        Commands::Info => {
            portfolio::cli::info(&config);
            true
        }
    };

    if !success {
        std::process::exit(1);
    }

    Ok(())
}
