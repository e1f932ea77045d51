//! gridwatch CLI
//!
//! Command-line front end for the energy and alarm monitoring server.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gridwatch::api::Registration;
use gridwatch::console::SessionState;
use gridwatch::{build_console, load_config, render, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "gridwatch")]
#[command(about = "Energy and alarm monitoring console")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server base URL (overrides config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Session token file (overrides config file)
    #[arg(long)]
    token_file: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and keep the session token
    Login { username: String, password: String },
    /// Create an account
    Register {
        username: String,
        password: String,
        email: String,
        #[arg(long, default_value = "")]
        full_name: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
    /// Forget the session token
    Logout,
    /// Check the stored session against the server
    Whoami,
    /// Dashboard, alarms and devices in one view
    Overview,
    /// Dashboard counters
    Dashboard,
    /// Alarm list
    Alarms {
        /// Only unhandled alarms
        #[arg(long)]
        pending: bool,
    },
    /// Mark an alarm as handled
    Handle { alarm_id: u64 },
    /// Device list
    Devices,
    /// Energy monitoring data
    Energy,
    /// Energy trend between two dates
    Trend { start: String, end: String },
    /// Realtime dashboard data
    Realtime,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, base_url={:?}, token_file={:?}, command={:?}",
        args.config,
        args.base_url,
        args.token_file,
        args.command
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(base_url) = args.base_url {
        config.server.base_url = base_url;
    }
    if let Some(token_file) = args.token_file {
        config.session.token_file = token_file;
    }

    let console = build_console(&config)?;

    let output = match args.command {
        Command::Login { username, password } => {
            console.login(&username, &password).await?;
            let overview = console.overview().await;
            format!("Welcome, {}\n\n{}", username, render::overview(&overview))
        }
        Command::Register {
            username,
            password,
            email,
            full_name,
            phone,
        } => {
            let registration = Registration {
                username,
                password,
                email,
                full_name,
                phone,
            };
            console.register(&registration).await?;
            "Registration successful, please log in\n".to_string()
        }
        Command::Logout => {
            console.logout().await?;
            "Logged out\n".to_string()
        }
        Command::Whoami => render::session(&console.restore_session().await?),
        Command::Overview => match console.restore_session().await? {
            SessionState::SignedOut => render::session(&SessionState::SignedOut),
            state => {
                let overview = console.overview().await;
                format!(
                    "{}\n{}",
                    render::session(&state),
                    render::overview(&overview)
                )
            }
        },
        Command::Dashboard => render::summary(&console.load_dashboard().await),
        Command::Alarms { pending: false } => render::alarms(&console.load_alarms().await),
        Command::Alarms { pending: true } => render::alarms(&console.load_pending_alarms().await),
        Command::Handle { alarm_id } => {
            console.handle_alarm(alarm_id).await?;
            format!(
                "Alarm {} handled\n\n{}",
                alarm_id,
                render::alarms(&console.load_alarms().await)
            )
        }
        Command::Devices => render::devices(&console.load_devices().await),
        Command::Energy => render::payload(&console.energy_data().await?),
        Command::Trend { start, end } => {
            render::payload(&console.energy_trend(&start, &end).await?)
        }
        Command::Realtime => render::payload(&console.realtime_data().await?),
    };

    print!("{}", output);
    Ok(())
}
