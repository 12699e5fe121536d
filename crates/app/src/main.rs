//! ReWear marketplace client - Main Entry Point
//!
//! Every invocation constructs the session from the stored credential
//! (validating it against the backend when one exists), runs one
//! command, and prints a plain-text result. Failures of session
//! operations are reported through the process exit code.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rewear_application::{AuthSession, RequestSwap, ViewItem};
use rewear_domain::{ClothingItem, ProfileChanges, RegisterRequest, Role, SwapRequestDraft};
use rewear_infrastructure::{
    Endpoints, FileCredentialStore, HttpIdentityGateway, HttpMarketGateway,
};

#[derive(Parser)]
#[command(name = "rewear", version, about = "ReWear clothing-swap marketplace client")]
struct Cli {
    /// Backend base URL; falls back to $REWEAR_API_URL, then the
    /// default local backend.
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in and store the issued credential.
    Login {
        /// Account email.
        email: String,
        /// Account password.
        password: String,
        /// Sign in as "user" or "admin".
        #[arg(long, default_value = "user")]
        role: String,
    },
    /// Create an account and sign in.
    Register {
        /// Account email.
        email: String,
        /// Account password.
        password: String,
        /// Display name.
        name: String,
        /// Optional gender.
        #[arg(long)]
        gender: Option<String>,
        /// Optional age.
        #[arg(long)]
        age: Option<u32>,
    },
    /// Show the current identity, if any.
    Whoami,
    /// Discard the stored credential.
    Logout,
    /// Update profile fields of the signed-in account.
    Profile {
        /// New display name.
        #[arg(long)]
        name: Option<String>,
        /// New gender.
        #[arg(long)]
        gender: Option<String>,
        /// New age.
        #[arg(long)]
        age: Option<u32>,
        /// New avatar URL.
        #[arg(long)]
        avatar: Option<String>,
    },
    /// Show a single item listing.
    Item {
        /// Item identifier.
        id: String,
    },
    /// Request a swap or points redemption for an item.
    Swap {
        /// Item identifier.
        item_id: String,
        /// Message to the item's owner.
        #[arg(short, long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let endpoints = match &cli.api_url {
        Some(base) => Endpoints::new(base)?,
        None => Endpoints::from_env()?,
    };
    let store = FileCredentialStore::new()?;
    tracing::debug!(path = %store.path().display(), "using credential store");
    let identity_gateway = HttpIdentityGateway::new(endpoints.clone())?;
    let market_gateway = HttpMarketGateway::new(endpoints)?;

    let session = AuthSession::start(identity_gateway, store).await;

    match cli.command {
        Command::Login {
            email,
            password,
            role,
        } => {
            let role: Role = role.parse()?;
            let outcome = session.login(&email, &password, role).await;
            if !outcome.succeeded() {
                return Err(outcome
                    .message()
                    .unwrap_or("login failed")
                    .to_string()
                    .into());
            }
            if let Some(identity) = session.identity().await {
                println!("Signed in as {} <{}>", identity.name, identity.email);
            }
        }

        Command::Register {
            email,
            password,
            name,
            gender,
            age,
        } => {
            let outcome = session
                .register(RegisterRequest {
                    email,
                    password,
                    name,
                    gender,
                    age,
                })
                .await;
            if !outcome.succeeded() {
                return Err(outcome
                    .message()
                    .unwrap_or("registration failed")
                    .to_string()
                    .into());
            }
            if let Some(identity) = session.identity().await {
                println!("Welcome, {} <{}>", identity.name, identity.email);
            }
        }

        Command::Whoami => match session.identity().await {
            Some(identity) => {
                println!("{} <{}> [{}]", identity.name, identity.email, identity.role.as_str());
                if let Some(points) = identity.points {
                    println!("points: {points}");
                }
            }
            None => println!("not signed in"),
        },

        Command::Logout => {
            session.logout().await;
            println!("signed out");
        }

        Command::Profile {
            name,
            gender,
            age,
            avatar,
        } => {
            let changes = ProfileChanges {
                name,
                gender,
                age,
                avatar,
            };
            if changes.is_empty() {
                return Err("nothing to update".into());
            }
            let outcome = session.update_profile(changes).await;
            if !outcome.succeeded() {
                return Err(outcome
                    .message()
                    .unwrap_or("profile update failed")
                    .to_string()
                    .into());
            }
            println!("profile updated");
        }

        Command::Item { id } => {
            let item = ViewItem::new(market_gateway).execute(&id).await?;
            print_item(&item);
        }

        Command::Swap { item_id, message } => {
            let credential = session.credential().await;
            if credential.is_none() {
                println!("note: not signed in, the backend may decline the request");
            }
            let outcome = RequestSwap::new(market_gateway)
                .execute(credential, SwapRequestDraft::points(item_id, message))
                .await;
            if !outcome.sent() {
                return Err(outcome
                    .message()
                    .unwrap_or("swap request failed")
                    .to_string()
                    .into());
            }
            println!("swap request sent");
        }
    }

    Ok(())
}

fn print_item(item: &ClothingItem) {
    println!("{} ({} points)", item.title, item.point_value);
    println!(
        "{} / {} / size {} / {:?}",
        item.category, item.kind, item.size, item.condition
    );
    if !item.description.is_empty() {
        println!("{}", item.description);
    }
    if !item.tags.is_empty() {
        println!("tags: {}", item.tags.join(", "));
    }
    println!("listed by {}", item.uploader_name);
    if let Some(breakdown) = &item.points_breakdown {
        println!("points breakdown:");
        println!("  base category value: {}", breakdown.base_category_value);
        println!("  quality score:       {}", breakdown.item_quality_score);
        println!("  demand weight:       {}", breakdown.demand_weight);
        println!("  condition bonus:     {}", breakdown.condition_bonus);
        println!("  trust boost:         {}", breakdown.trust_boost);
        println!("  first upload bonus:  {}", breakdown.first_upload_bonus);
        println!("  campaign bonus:      {}", breakdown.campaign_bonus);
        println!("  penalties:           {}", breakdown.penalties);
        println!("  total awarded:       {}", item.awarded_points());
    }
}
