//! Internal admin CLI for submission lifecycle and log retention.
//!
//! The public endpoints only ever create rows; everything that moves a
//! submission through its lifecycle happens here (or in the admin UI this
//! stands in for).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use site_core::domains::audit::SystemLog;
use site_core::domains::submissions::{ContactStatus, ContactSubmission, FormSubmission};
use site_core::domains::submissions::NewsletterSubscription;
use site_core::Config;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "admin_cli")]
#[command(about = "Internal admin tool for the site's submission store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List contact submissions with a given status
    Contacts {
        #[arg(long, default_value = "new")]
        status: String,
    },

    /// Mark a contact submission contacted, stamping the contact time
    MarkContacted {
        id: Uuid,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Move a contact submission to another status
    SetStatus { id: Uuid, status: String },

    /// Deactivate a newsletter subscription
    Unsubscribe { email: String },

    /// List unprocessed form-relay submissions
    Forms,

    /// Mark a form-relay submission processed
    MarkProcessed { id: Uuid },

    /// Show the most recent system log entries
    Logs {
        #[arg(long, default_value_t = 50)]
        limit: i64,
    },

    /// Delete system log entries older than the retention window
    PurgeLogs {
        #[arg(long, default_value_t = 30)]
        days: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    run(cli.command, &pool).await
}

async fn run(command: Commands, pool: &PgPool) -> Result<()> {
    match command {
        Commands::Contacts { status } => {
            let status: ContactStatus = status.parse()?;
            let submissions = ContactSubmission::find_by_status(status, pool).await?;
            for s in &submissions {
                println!(
                    "{}  {}  {} <{}>  {}  {}",
                    s.id,
                    s.submitted_at.format("%Y-%m-%d %H:%M"),
                    s.full_name,
                    s.email,
                    s.organization,
                    s.event_type
                );
            }
            println!("{} submission(s)", submissions.len());
        }
        Commands::MarkContacted { id, notes } => {
            let submission =
                ContactSubmission::mark_contacted(id, notes.as_deref(), pool).await?;
            println!("{} -> {}", submission.id, submission.status);
        }
        Commands::SetStatus { id, status } => {
            let status: ContactStatus = status.parse()?;
            let submission = ContactSubmission::update_status(id, status, pool).await?;
            println!("{} -> {}", submission.id, submission.status);
        }
        Commands::Unsubscribe { email } => {
            match NewsletterSubscription::deactivate(&email, pool).await? {
                Some(subscription) => println!("Deactivated {}", subscription.email),
                None => println!("No subscription for {}", email),
            }
        }
        Commands::Forms => {
            let submissions = FormSubmission::find_unprocessed(pool).await?;
            for s in &submissions {
                println!(
                    "{}  {}  {}  {}",
                    s.id,
                    s.submitted_at.format("%Y-%m-%d %H:%M"),
                    s.source,
                    s.form_data
                );
            }
            println!("{} unprocessed submission(s)", submissions.len());
        }
        Commands::MarkProcessed { id } => {
            let submission = FormSubmission::mark_processed(id, pool).await?;
            println!("{} processed", submission.id);
        }
        Commands::Logs { limit } => {
            for entry in SystemLog::recent(limit, pool).await? {
                println!(
                    "{}  [{}]  {}  {}",
                    entry.created_at.format("%Y-%m-%d %H:%M:%S"),
                    entry.log_level,
                    entry.source,
                    entry.message
                );
            }
        }
        Commands::PurgeLogs { days } => {
            let removed = SystemLog::purge_older_than(days, pool).await?;
            println!("Removed {} log entries older than {} days", removed, days);
        }
    }

    Ok(())
}
