//! PlantNet CLI - database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! plantnet-cli migrate
//!
//! # Approve a pending seller upgrade (promote role, clear pending status)
//! plantnet-cli admin promote -e gardener@example.com
//!
//! # Promote straight to admin
//! plantnet-cli admin promote -e boss@example.com -r admin
//!
//! # Seed demo inventory
//! plantnet-cli seed
//! ```
//!
//! The admin `promote` command is the approval half of the two-phase
//! seller-upgrade flow: customers request the upgrade through the API, an
//! operator approves it here.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "plantnet-cli")]
#[command(author, version, about = "PlantNet CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage users
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Seed the database with demo plants
    Seed,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Promote a user's role and clear any pending upgrade request
    Promote {
        /// User email address
        #[arg(short, long)]
        email: String,

        /// Target role (`seller`, `admin`)
        #[arg(short, long, default_value = "seller")]
        role: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Migrate => commands::migrate::run().await,
        Commands::Admin {
            action: AdminAction::Promote { email, role },
        } => commands::admin::promote(&email, &role).await,
        Commands::Seed => commands::seed::run().await,
    };

    if let Err(e) = result {
        tracing::error!("command failed: {e}");
        std::process::exit(1);
    }
}
