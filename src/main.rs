use anyhow::Result;
use clap::{Parser, Subcommand};

/// pantryplan - pantry inventory and meal planning
#[derive(Parser)]
#[command(name = "pantryplan")]
#[command(about = "Track what is in the pantry and plan meals around it", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Run migrations and insert demo pantry items and recipes
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = pantryplan::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    pantryplan::observability::init_observability(
        "pantryplan",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => pantryplan::server::serve(config, host, port).await,
        Commands::Migrate => pantryplan::migrate::migrate(&config).await,
        Commands::Reset => pantryplan::migrate::reset(&config).await,
        Commands::Seed => pantryplan::migrate::seed(&config).await,
    }
}
