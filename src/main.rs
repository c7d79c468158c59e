use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use movenest::{
    ContractDuration, ContractTerms, MoveNestConfig, QuoteEngine, QuoteRequest, ServiceType,
    logging, summary, web,
};

#[derive(Parser, Debug)]
#[command(
    name = "movenest",
    version,
    about = "Trip estimation and quote engine for MoveNest transport bookings"
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate distance, travel time and price for a trip
    Quote(QuoteArgs),
    /// Serve the quote API over HTTP
    Serve {
        /// Port to listen on, overrides the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(clap::Args, Debug)]
struct QuoteArgs {
    /// Service label: kids, staff, luggage (elderly) or carhire (events)
    #[arg(long)]
    service: String,

    #[arg(long)]
    pickup: String,

    #[arg(long)]
    dropoff: String,

    /// Price as a monthly contract trip
    #[arg(long)]
    monthly: bool,

    /// School or company taking the contract
    #[arg(long, requires = "monthly")]
    organization: Option<String>,

    /// Contract length in months (3, 6 or 12)
    #[arg(long, default_value_t = 6, requires = "monthly")]
    duration: u32,

    #[arg(long, requires = "monthly")]
    trips_per_week: Option<u32>,

    /// Print the quote as JSON
    #[arg(long, conflicts_with = "whatsapp")]
    json: bool,

    /// Print the WhatsApp message and click-to-chat link
    #[arg(long)]
    whatsapp: bool,
}

impl QuoteArgs {
    fn to_request(&self) -> Result<QuoteRequest> {
        let request = QuoteRequest::new(
            self.pickup.as_str(),
            self.dropoff.as_str(),
            ServiceType::parse(&self.service),
        );
        if !self.monthly {
            return Ok(request);
        }

        Ok(request.with_contract(ContractTerms {
            organization_name: self.organization.clone().unwrap_or_default(),
            duration: ContractDuration::try_from(self.duration)?,
            trips_per_week: self.trips_per_week.unwrap_or(0),
        }))
    }
}

fn run_quote(args: &QuoteArgs, config: &MoveNestConfig) -> Result<()> {
    let engine = QuoteEngine::new(config.pricing);
    let quote = engine.build_quote(&args.to_request()?)?;
    let unit = config.display.distance_unit;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else if args.whatsapp {
        let message = summary::whatsapp_message(&quote, &config.business, unit);
        println!("{message}\n");
        println!(
            "{}",
            summary::whatsapp_link(&config.business.whatsapp_number, &message)
        );
    } else {
        print!(
            "{}",
            summary::text_summary(&quote, &config.business.currency_symbol, unit)
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = MoveNestConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    logging::init(&config.logging, cli.verbose)?;

    let config_source = cli
        .config
        .clone()
        .or_else(MoveNestConfig::get_config_path)
        .filter(|path| path.exists());
    match config_source {
        Some(path) => tracing::debug!("Using config from: {}", path.display()),
        None => tracing::debug!("No config file found, using defaults"),
    }

    match cli.command {
        Command::Quote(args) => run_quote(&args, &config),
        Command::Serve { port } => {
            let mut config = config;
            if let Some(port) = port {
                config.server.port = port;
            }
            web::run(config).await
        }
    }
}
