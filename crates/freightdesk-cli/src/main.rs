//! Freightdesk CLI - Brokerage desk operations from the terminal
//!
//! Thin client over the Freightdesk HTTP API.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Password;

use api::{FreightdeskClient, SearchRequest};
use config::Config;

#[derive(Parser)]
#[command(name = "freightdesk")]
#[command(
    about = "Freightdesk CLI - carrier verification, load search and booking",
    long_about = None
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store API key (and optionally the server URL)
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
        /// Server base URL
        #[arg(long)]
        url: Option<String>,
    },

    /// Show current configuration
    Config,

    /// Check the server is up
    Health,

    /// Show desk statistics
    Stats,

    /// Verify a carrier's eligibility
    Verify {
        /// MC number (e.g., MC123456)
        mc_number: String,
        /// Consult the FMCSA registry
        #[arg(short, long)]
        external: bool,
    },

    /// Search available loads
    Search {
        #[arg(short, long)]
        equipment: Option<String>,
        #[arg(short, long)]
        origin: Option<String>,
        #[arg(short, long)]
        destination: Option<String>,
        #[arg(long)]
        min_rate: Option<f64>,
        #[arg(long)]
        max_rate: Option<f64>,
        #[arg(long)]
        max_miles: Option<f64>,
        #[arg(short, long)]
        commodity: Option<String>,
    },

    /// Show one load with broker terms
    Load {
        load_id: String,
    },

    /// Submit a counter-offer
    Negotiate {
        load_id: String,
        mc_number: String,
        offer: f64,
        /// Negotiation round (1-based)
        #[arg(short, long, default_value = "1")]
        round: u32,
    },

    /// Book a load at the agreed rate
    Book {
        load_id: String,
        mc_number: String,
        rate: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Login { key, url } => cmd_login(key, url).await,
        Commands::Config => cmd_config(),
        Commands::Health => cmd_health().await,
        Commands::Stats => cmd_stats().await,
        Commands::Verify { mc_number, external } => cmd_verify(&mc_number, external).await,
        Commands::Search {
            equipment,
            origin,
            destination,
            min_rate,
            max_rate,
            max_miles,
            commodity,
        } => {
            let request = SearchRequest {
                equipment_type: equipment,
                origin_preference: origin,
                destination_preference: destination,
                min_rate,
                max_rate,
                max_miles,
                commodity_type: commodity,
            };
            cmd_search(&request).await
        }
        Commands::Load { load_id } => cmd_load(&load_id).await,
        Commands::Negotiate {
            load_id,
            mc_number,
            offer,
            round,
        } => cmd_negotiate(&load_id, &mc_number, offer, round).await,
        Commands::Book {
            load_id,
            mc_number,
            rate,
        } => cmd_book(&load_id, &mc_number, rate).await,
    }
}

fn client() -> Result<FreightdeskClient> {
    let config = Config::load()?;
    Ok(FreightdeskClient::new(&config.base_url, config.api_key.as_deref()))
}

fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_login(key: Option<String>, url: Option<String>) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(url) = url {
        config.set_base_url(url);
    }

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    // Test connection
    let client = FreightdeskClient::new(&config.base_url, Some(&api_key));
    print!("Testing connection... ");

    match client.health().await {
        Ok(_) => println!("{}", "OK".green()),
        Err(e) => {
            println!("{}", "Failed".red());
            bail!("Could not connect to Freightdesk API: {}", e);
        }
    }

    config.set_api_key(api_key);
    config.save()?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  API Key: {}",
        if config.api_key.is_some() {
            "Set".green()
        } else {
            "Not set".red()
        }
    );

    Ok(())
}

async fn cmd_health() -> Result<()> {
    let health = client()?.health().await?;
    println!("{} {} (v{})", "✓".green(), health.status.green(), health.version);
    Ok(())
}

async fn cmd_stats() -> Result<()> {
    let stats = client()?.stats().await?;

    println!("{}", "Carriers:".bold());
    println!(
        "  Total: {}  Verified: {}",
        stats.total_carriers,
        stats.verified_carriers.to_string().green()
    );
    println!("{}", "Loads:".bold());
    println!(
        "  Total: {}  Available: {}  Negotiated: {}  Booked: {}",
        stats.total_loads,
        stats.available_loads.to_string().green(),
        stats.negotiated_loads.to_string().yellow(),
        stats.booked_loads.to_string().cyan()
    );
    println!("{}", "Activity:".bold());
    println!(
        "  Negotiations: {}  Bookings: {}  Calls: {}",
        stats.total_negotiations, stats.total_bookings, stats.total_calls_analyzed
    );

    Ok(())
}

async fn cmd_verify(mc_number: &str, external: bool) -> Result<()> {
    let result = client()?.verify_carrier(mc_number, external).await?;
    let carrier = result.carrier_info;

    let badge = if result.verified {
        "VERIFIED".green().bold()
    } else {
        "NOT VERIFIED".red().bold()
    };
    println!("{} {} {}", badge, carrier.mc_number.cyan(), carrier.company_name.bold());
    println!("  Status: {}", carrier.status);
    if let Some(insurance) = carrier.insurance_valid {
        println!("  Insurance valid: {}", insurance);
    }
    if let Some(rating) = &carrier.safety_rating {
        println!("  Safety rating: {}", rating);
    }
    println!("  Source: {}", result.data_source.dimmed());

    Ok(())
}

async fn cmd_search(request: &SearchRequest) -> Result<()> {
    let result = client()?.search_loads(request).await?;

    if result.loads.is_empty() {
        println!("No available loads match.");
        return Ok(());
    }

    println!("{} loads:", result.total_count.to_string().green());
    for load in result.loads {
        println!(
            "  {} {} → {} {} {} {}mi {}",
            load.load_id.cyan().bold(),
            load.origin,
            load.destination,
            money(load.loadboard_rate).green(),
            load.equipment_type.dimmed(),
            load.miles,
            load.pickup_datetime.dimmed()
        );
    }

    Ok(())
}

async fn cmd_load(load_id: &str) -> Result<()> {
    let details = client()?.load_details(load_id).await?;
    let load = &details.load;

    println!("{} [{}]", load.load_id.cyan().bold(), load.status);
    println!("  {} → {}", load.origin, load.destination);
    println!("  Pickup:   {}", load.pickup_datetime);
    println!("  Delivery: {}", details.delivery_datetime);
    println!("  {} | {} | {} lbs", load.equipment_type, load.commodity_type, details.weight);
    println!("  {} mi (+{} deadhead)", load.miles, details.deadhead_miles);
    println!("  Rate: {}", money(load.loadboard_rate).green());
    if details.tarp_required {
        println!("  {}", "Tarp required".yellow());
    }
    println!("  Notes: {}", details.special_requirements.dimmed());
    if let (Some(carrier), Some(rate)) = (&details.booked_by, details.final_rate) {
        println!("  Booked by {} at {}", carrier.cyan(), money(rate));
    }

    Ok(())
}

async fn cmd_negotiate(load_id: &str, mc_number: &str, offer: f64, round: u32) -> Result<()> {
    let result = client()?.negotiate(load_id, mc_number, offer, round).await?;

    let verdict = if result.accepted {
        "ACCEPTED".green().bold()
    } else {
        "NOT ACCEPTED".yellow().bold()
    };
    println!("{} {} at {}", verdict, load_id.cyan(), money(result.final_rate));
    println!("  {}", result.message);
    if result.can_negotiate_again {
        println!(
            "  Next: freightdesk negotiate {} {} <offer> --round {}",
            load_id,
            mc_number,
            round.saturating_add(1)
        );
    }
    println!("  {}", result.negotiation_id.to_string().dimmed());

    Ok(())
}

async fn cmd_book(load_id: &str, mc_number: &str, rate: f64) -> Result<()> {
    let result = client()?.book_load(load_id, mc_number, rate).await?;

    println!("{} {}", "✓".green(), result.message);
    println!("  Booking: {}", result.booking_id.to_string().cyan());

    Ok(())
}
