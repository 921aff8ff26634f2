use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use opsdesk_core::config::{self, Config};
use opsdesk_core::identity;
use opsdesk_core::logout::{self, Navigator};
use opsdesk_core::policy;
use opsdesk_core::session::file_store::FileStorage;
use opsdesk_core::session::{LoginPayload, SessionStore};

#[derive(Parser)]
#[command(
    name = "opsdesk",
    about = "opsdesk - admin console session tooling",
    version = opsdesk_core::VERSION,
)]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a login payload as the current session
    Login {
        /// Path to the JSON payload returned by the login provider
        payload: PathBuf,
    },
    /// Show config and session status
    Status,
    /// Show the resolved admin identity
    Whoami,
    /// Clear the session and redirect to the login route
    Logout,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("opsdesk=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let cfg = match cli.config.as_deref() {
        Some(path) => config::load_config(Some(path)),
        None => config::load_config_from_env(),
    };

    match cli.command {
        Commands::Login { payload } => cmd_login(&cfg, &payload),
        Commands::Status => cmd_status(&cfg, cli.config.as_deref()),
        Commands::Whoami => cmd_whoami(&cfg),
        Commands::Logout => cmd_logout(&cfg),
    }
}

// ====== Commands ======

fn open_store(cfg: &Config) -> SessionStore {
    SessionStore::new(Box::new(FileStorage::new(&cfg.data_dir())))
}

fn cmd_login(cfg: &Config, payload_path: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(payload_path)?;
    let payload: LoginPayload = serde_json::from_str(&raw)?;

    let store = open_store(cfg);
    let record = store.store(payload)?;

    let who = identity::resolve(&store, &cfg.auth.default_identity);
    println!("Signed in as {} <{}>", who.name, who.email);
    if !policy::is_active(Some(&record)) {
        println!("Session stored but not active yet (no role/status assigned).");
    }
    Ok(())
}

fn cmd_status(cfg: &Config, config_path: Option<&Path>) -> Result<()> {
    let config_file = config_path
        .map(|p| p.to_path_buf())
        .unwrap_or_else(config::get_config_path);
    let data_dir = cfg.data_dir();

    println!("opsdesk Status\n");
    println!(
        "Config: {} {}",
        config_file.display(),
        if config_file.exists() { "✓" } else { "✗" }
    );
    println!(
        "Data dir: {} {}",
        data_dir.display(),
        if data_dir.exists() { "✓" } else { "✗" }
    );

    let store = open_store(cfg);
    match store.get() {
        None => println!("Session: none"),
        Some(record) => {
            let state = if policy::is_active(Some(&record)) {
                "active"
            } else {
                "stored, not active"
            };
            println!("Session: {} ({})", record.user.username, state);
            if let Some(stored_at) = &record.stored_at {
                println!("Stored at: {}", stored_at);
            }
        }
    }

    Ok(())
}

fn cmd_whoami(cfg: &Config) -> Result<()> {
    let store = open_store(cfg);
    let who = identity::resolve(&store, &cfg.auth.default_identity);

    println!("{} <{}>", who.name, who.email);
    println!("Username: {}", who.username);
    println!("Id: {}", who.id);
    println!(
        "Active: {}",
        if policy::get_active(&store).is_some() {
            "✓"
        } else {
            "✗"
        }
    );

    Ok(())
}

fn cmd_logout(cfg: &Config) -> Result<()> {
    let store = open_store(cfg);
    logout::force_logout(&store, &TerminalNavigator, &cfg.auth.login_path);
    println!("Logged out.");
    Ok(())
}

/// Navigator that reports the redirect target on stdout; the console UI
/// owns real navigation.
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, path: &str) {
        println!("→ {}", path);
    }
}
