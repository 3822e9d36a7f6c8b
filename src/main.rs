use std::path::PathBuf;

use anyhow::Context;
use chapa::{
    ChapaConfig, ChapaGateway, Currency,
    gateway::{
        payment::{PaymentRequest, new_tx_ref},
        transfer::{BankTransfer, BulkTransferRequest},
    },
};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Command line access to the Chapa API
///
/// Reads CHAPA_SECRET_KEY, CHAPA_BASE_URL and CHAPA_TIMEOUT from the environment or a .env file.
#[derive(Debug, Parser)]
#[command(name = "chapa", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Initialize a hosted checkout
    Initialize {
        #[arg(long)]
        amount: Decimal,
        #[arg(long, default_value = "ETB")]
        currency: String,
        /// Generated when omitted
        #[arg(long)]
        tx_ref: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        callback_url: Option<String>,
        #[arg(long)]
        return_url: Option<String>,
    },
    /// Verify a payment by its transaction reference
    Verify { tx_ref: String },
    /// Transfer to a single bank account
    Transfer {
        #[arg(long)]
        account_name: String,
        #[arg(long)]
        account_number: String,
        #[arg(long)]
        amount: Decimal,
        #[arg(long, default_value = "ETB")]
        currency: String,
        #[arg(long)]
        reference: String,
        #[arg(long)]
        bank_code: String,
    },
    /// Submit a bulk transfer described by a json file
    BulkTransfer { file: PathBuf },
    /// List transactions
    Transactions,
    /// List supported banks
    Banks,
}

fn print(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    match dotenvy::dotenv() {
        Ok(p) => tracing::info!(path = %p.display(), "Loaded environment variables from .env file"),
        Err(e) => tracing::debug!("No environment variables loaded from .env: {e}"),
    };

    let cli = Cli::parse();
    let config = ChapaConfig::from_env()?;
    let gate = ChapaGateway::from_config(&config)?;

    match cli.command {
        Command::Initialize {
            amount,
            currency,
            tx_ref,
            email,
            first_name,
            last_name,
            phone,
            callback_url,
            return_url,
        } => {
            let tx_ref = tx_ref.unwrap_or_else(|| new_tx_ref("cli"));
            let request = PaymentRequest {
                email,
                first_name,
                last_name,
                phone,
                callback_url,
                return_url,
                ..PaymentRequest::new(tx_ref, amount, Currency::from(currency.as_str()))
            };
            print(&gate.payment_request(&request).await?)
        }
        Command::Verify { tx_ref } => print(&gate.verify(&tx_ref).await?),
        Command::Transfer {
            account_name,
            account_number,
            amount,
            currency,
            reference,
            bank_code,
        } => {
            let request = BankTransfer {
                account_name,
                account_number,
                amount,
                currency: Currency::from(currency.as_str()),
                reference,
                bank_code,
            };
            print(&gate.transfer_to_bank(&request).await?)
        }
        Command::BulkTransfer { file } => {
            let raw = tokio::fs::read(&file)
                .await
                .with_context(|| format!("failed to read {}", file.display()))?;
            let request: BulkTransferRequest = serde_json::from_slice(&raw)
                .with_context(|| format!("{} is not a bulk transfer request", file.display()))?;
            print(&gate.bulk_transfer(&request).await?)
        }
        Command::Transactions => print(&gate.transactions().await?),
        Command::Banks => print(&gate.banks().await?),
    }
}
