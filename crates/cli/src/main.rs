//! Sales Tracker CLI - sales records, commissions and reports.
//!
//! # Usage
//!
//! ```bash
//! # Create the data file with the demo accounts
//! st-cli seed --password 'initial-pass'
//!
//! # Record a sale for attendant 1
//! st-cli sale add -a 1 --client-name "Carla Dias" --client-phone "(11) 91234-5678" \
//!     --value 320.00 --date 2024-06-03 --payment pix
//!
//! # Full report for January 2024, as JSON
//! st-cli report admin --year 2024 --month 1 --json
//!
//! # An attendant's own sales and commission
//! st-cli report attendant 1 --search carla
//! ```
//!
//! # Commands
//!
//! - `seed` - Write the demo accounts
//! - `report admin|attendant` - Print reports
//! - `sale add|delete` - Record or remove sales
//! - `attendant create|delete|commission|list` - Manage attendants
//! - `login` - Check a credential

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use secrecy::SecretString;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sales_tracker_core::{FilterSpec, PaymentMethod, SaleDraft, SaleId, UserId};

mod auth;
mod commands;
mod config;
mod error;
mod file_store;

use commands::report::FilterArgs;
use config::CliConfig;
use error::CliError;
use file_store::FileStore;

#[derive(Parser)]
#[command(name = "st-cli")]
#[command(author, version, about = "Sales tracker CLI tools")]
struct Cli {
    /// Data file (overrides `SALES_DATA_PATH`)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the demo accounts to a new data file
    Seed {
        /// Initial password for every demo account
        #[arg(short, long)]
        password: String,

        /// Overwrite an existing data file
        #[arg(long)]
        force: bool,
    },
    /// Print reports
    Report {
        #[command(subcommand)]
        view: ReportView,
    },
    /// Record or remove sales
    Sale {
        #[command(subcommand)]
        action: SaleAction,
    },
    /// Manage attendant accounts
    Attendant {
        #[command(subcommand)]
        action: AttendantAction,
    },
    /// Check an email and password
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
}

#[derive(Subcommand)]
enum ReportView {
    /// Every attendant's sales, monthly totals and commissions
    Admin {
        #[command(flatten)]
        filters: FilterArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// One attendant's own sales and commission
    Attendant {
        /// Attendant id
        id: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum SaleAction {
    /// Record a sale
    Add {
        /// Id of the attendant who made the sale
        #[arg(short, long)]
        attendant: String,

        #[arg(long)]
        client_name: String,

        #[arg(long, default_value = "")]
        client_phone: String,

        /// Amount in reais
        #[arg(long)]
        value: Decimal,

        /// Sale date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// `boleto`, `pix` or `cartao`
        #[arg(long)]
        payment: PaymentMethod,
    },
    /// Delete a sale
    Delete {
        /// Sale id
        id: String,
    },
}

#[derive(Subcommand)]
enum AttendantAction {
    /// Create an attendant account
    Create {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,

        /// Commission percentage (0-100)
        #[arg(short, long, default_value = "0")]
        commission: Decimal,
    },
    /// Delete an attendant account (their sales are kept)
    Delete {
        /// Attendant id
        id: String,
    },
    /// Set an attendant's commission percentage
    Commission {
        /// Attendant id
        id: String,

        /// Commission percentage (0-100)
        pct: Decimal,
    },
    /// List attendant accounts
    List,
}

#[tokio::main]
async fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env();
    init_tracing(config.as_ref().is_ok_and(|c| c.json_logs));

    let cli = Cli::parse();

    let result = match config {
        Ok(config) => run(cli, config).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sales_tracker_cli=info,sales_tracker_core=info".into());

    // Logs go to stderr so report output on stdout stays clean
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli, config: CliConfig) -> Result<(), CliError> {
    let store = FileStore::new(cli.data.unwrap_or(config.data_path));
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Seed { password, force } => {
            commands::seed::run(&store, &SecretString::from(password), force, &mut out).await?;
        }
        Commands::Report { view } => match view {
            ReportView::Admin { filters, json } => {
                commands::report::admin(&store, &FilterSpec::from(filters), json, &mut out).await?;
            }
            ReportView::Attendant { id, filters, json } => {
                let spec = FilterSpec::from(filters);
                commands::report::attendant(&store, &UserId::from(id), &spec, json, &mut out)
                    .await?;
            }
        },
        Commands::Sale { action } => match action {
            SaleAction::Add {
                attendant,
                client_name,
                client_phone,
                value,
                date,
                payment,
            } => {
                let draft = SaleDraft {
                    client_name,
                    client_phone,
                    value,
                    date,
                    payment_method: payment,
                };
                commands::sale::add(&store, &UserId::from(attendant), draft, &mut out).await?;
            }
            SaleAction::Delete { id } => {
                commands::sale::delete(&store, &SaleId::from(id), &mut out).await?;
            }
        },
        Commands::Attendant { action } => match action {
            AttendantAction::Create {
                name,
                email,
                password,
                commission,
            } => {
                let password = SecretString::from(password);
                commands::attendant::create(&store, &name, &email, &password, commission, &mut out)
                    .await?;
            }
            AttendantAction::Delete { id } => {
                commands::attendant::delete(&store, &UserId::from(id), &mut out).await?;
            }
            AttendantAction::Commission { id, pct } => {
                commands::attendant::set_commission(&store, &UserId::from(id), pct, &mut out)
                    .await?;
            }
            AttendantAction::List => commands::attendant::list(&store, &mut out).await?,
        },
        Commands::Login { email, password } => {
            commands::login::run(&store, &email, &SecretString::from(password), &mut out).await?;
        }
    }
    Ok(())
}
