use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod logging;
mod render;

#[derive(Parser)]
#[command(name = "moodlens")]
#[command(about = "moodlens - detect the emotion in a piece of text", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single piece of text and exit
    Detect {
        /// Text to analyze
        text: String,
        /// Print the detection report as JSON
        #[arg(long)]
        json: bool,
        /// Hide the score table
        #[arg(long)]
        no_table: bool,
        /// Hide the score chart
        #[arg(long)]
        no_chart: bool,
    },
    /// Start an interactive session (default)
    Repl,
    /// Inspect or create the configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location
    Path,
    /// Print the effective configuration
    Show,
    /// Write default config and secret templates if missing
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Detect {
            text,
            json,
            no_table,
            no_chart,
        } => {
            let args = commands::detect::DetectArgs {
                text,
                json,
                no_table,
                no_chart,
            };
            commands::detect::run(args).await?
        }
        Commands::Repl => commands::repl::run().await?,
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::path()?,
            ConfigAction::Show => commands::config::show().await?,
            ConfigAction::Init => commands::config::init()?,
        },
    }

    Ok(())
}
