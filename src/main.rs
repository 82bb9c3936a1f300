use std::process::ExitCode;
use clap::{Parser, Subcommand};
use mofh_client::{Envelope, MofhClient, Settings};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(version, about = "Run one MyOwnFreeHost reseller API call and print its JSON result")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List a user's domains
    Domains { username: String },
    /// Check whether a domain is available
    Available { domain: String },
    /// Create a hosting account
    Create {
        username: String,
        password: String,
        email: String,
        domain: String,
        plan: String,
    },
    /// Change an account's password
    ResetPassword { username: String, password: String },
    /// Suspend an account
    Suspend { username: String, reason: String },
    /// Reactivate a suspended account
    Unsuspend { username: String },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let cfg = Settings::new()?;
    let client = MofhClient::from_settings(&cfg)?;

    match cli.command {
        Command::Domains { username } => print(client.list_domains(&username).await),
        Command::Available { domain } => print(client.check_availability(&domain).await),
        Command::Create { username, password, email, domain, plan } => print(
            client.create_account(&username, &password, &email, &domain, &plan).await,
        ),
        Command::ResetPassword { username, password } => {
            print(client.reset_password(&username, &password).await)
        }
        Command::Suspend { username, reason } => print(client.suspend_account(&username, &reason).await),
        Command::Unsuspend { username } => print(client.unsuspend_account(&username).await),
    }
}

fn print<M: Serialize>(envelope: Envelope<M>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    println!("{}", envelope.to_json()?);

    Ok(if envelope.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
