//! Evadash CLI
//!
//! Command-line front end to the dashboard's authentication flow:
//! - Sign in and show the resulting auth state
//! - Load the user profile for an existing token
//! - Print the route table
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use evadash::{generate_default_config, logging, AuthModule, AuthState, Config, Page};

#[derive(Parser)]
#[command(name = "evadash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sign in to the Eva seller dashboard from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard locations, then environment)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Identity service base address, overrides the config
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and print the auth state
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        /// Print the access token instead of redacting it
        #[arg(long)]
        show_token: bool,
    },

    /// Load the user profile for an access token you already hold
    UserInfo {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        token: String,
    },

    /// List the dashboard routes
    Routes,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    logging::init(&config.logging);

    match cli.command {
        Commands::Login {
            email,
            password,
            show_token,
        } => {
            let auth = AuthModule::from_config(&config)?;
            let result = auth.login(&email, &password).await;
            print_state(&auth.store().snapshot(), show_token)?;
            result?;
        }

        Commands::UserInfo { email, token } => {
            let auth = AuthModule::from_config(&config)?;
            auth.store().set_access_token(token);
            auth.fetch_user_info(&email).await?;

            match auth.store().user() {
                Some(user) => println!("{}", serde_json::to_string_pretty(&user)?),
                None => println!("No user information returned"),
            }
        }

        Commands::Routes => {
            for page in Page::ALL {
                println!("{}", page);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    tracing::info!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn print_state(state: &AuthState, show_token: bool) -> anyhow::Result<()> {
    let mut state = state.clone();
    if !show_token {
        if let Some(token) = state.access_token.as_mut() {
            *token = redact(token);
        }
    }
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

fn redact(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    format!("{}…", visible)
}
