//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};

/// Salon website backend: public catalog API and admin panel
#[derive(Parser, Debug)]
#[command(name = "salon-backend")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Create the admin account and demo catalog
    Seed(SeedArgs),

    /// Manage admin accounts
    Admin(AdminArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to (defaults to SERVER_HOST)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on (defaults to SERVER_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Admin username to create when absent
    #[arg(long, default_value = DEFAULT_ADMIN_USERNAME, env = "ADMIN_USERNAME")]
    pub admin_username: String,

    /// Admin password for a newly created admin
    #[arg(long, default_value = DEFAULT_ADMIN_PASSWORD, env = "ADMIN_PASSWORD")]
    pub admin_password: String,

    /// Only create the admin account
    #[arg(long)]
    pub skip_catalog: bool,
}

/// Arguments for the admin command
#[derive(Parser, Debug)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub action: AdminAction,
}

/// Admin account actions
#[derive(Subcommand, Debug)]
pub enum AdminAction {
    /// Create an admin account
    Create {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Check whether credentials authenticate
    Verify {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
}
