use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod render;
mod terminal;

use appointment_cell::models::BookingForm;
use auth_cell::models::AuthForm;
use auth_cell::session::{FileStore, SessionManager};
use booking_widget_cell::{AuthControl, BookingOutcome, BookingWidget, Dialogs, HistoryOutcome};
use shared_config::AppConfig;

use commands::{Command, HELP};
use terminal::{read_line, read_with_default, TerminalDialogs};

#[derive(Parser)]
#[command(name = "clinic-booking")]
#[command(about = "Book clinic appointments from the terminal", long_about = None)]
struct Cli {
    /// API base URL (overrides CLINIC_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Where the login is remembered (overrides CLINIC_SESSION_FILE)
    #[arg(long)]
    session_file: Option<PathBuf>,

    /// Initial date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Logs go to stderr so they do not interleave with the prompt
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }
    if let Some(path) = cli.session_file {
        config.session_file = path;
    }

    info!("Using API at {} (session file {:?})", config.api_root(), config.session_file);

    let session = SessionManager::new(Arc::new(FileStore::new(&config.session_file)));
    let mut widget = BookingWidget::new(&config, session, TerminalDialogs);
    if let Some(date) = &cli.date {
        widget = widget.with_date(date);
    }

    widget.initialize().await;
    render::page(&widget.snapshot());
    println!("Type `help` for commands.");

    while let Some(line) = read_line("> ")? {
        match Command::parse(&line) {
            Command::Date(date) => {
                widget.change_date(&date).await;
            }
            Command::Slots => {
                widget.load_slots().await;
            }
            Command::Select(id) => {
                if !widget.select_slot(id) {
                    println!("Slot {} is not available.", id);
                }
            }
            Command::Book => book(&widget).await?,
            Command::Auth => {
                match widget.open_auth_modal().await {
                    AuthControl::Opened => auth_modal(&widget).await?,
                    AuthControl::LoggedOut => println!("Logged out."),
                    AuthControl::Cancelled => {}
                }
            }
            Command::History => {
                match widget.open_history().await {
                    HistoryOutcome::LoginRequired => auth_modal(&widget).await?,
                    HistoryOutcome::Loaded | HistoryOutcome::Failed => {
                        render::history(&widget.snapshot().history.list);
                        widget.close_history();
                    }
                }
            }
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::Quit => break,
            Command::Empty => continue,
            Command::Unknown(input) => {
                println!("Unknown command: {} (try `help`)", input);
                continue;
            }
        }

        render::page(&widget.snapshot());
    }

    info!("Bye");
    Ok(())
}

async fn book<D: Dialogs>(widget: &BookingWidget<D>) -> Result<()> {
    // Gate first so a logged-out user is not asked for details
    if !widget.session().is_logged_in() {
        if widget.submit_booking(&BookingForm::default()).await == BookingOutcome::LoginRequired {
            auth_modal(widget).await?;
        }
        return Ok(());
    }

    let state = widget.snapshot();
    let Some(name) = read_with_default("Patient name", &state.patient_name)? else { return Ok(()) };
    let Some(age) = read_with_default("Age", "")? else { return Ok(()) };
    let Some(gender) = read_with_default("Gender", "Male")? else { return Ok(()) };
    let Some(phone) = read_with_default("Phone", "")? else { return Ok(()) };
    let Some(doctor) = read_with_default("Doctor", "")? else { return Ok(()) };

    widget.set_patient_name(&name);

    let form = BookingForm {
        name,
        age,
        gender,
        phone,
        doctor,
        date: state.date,
    };

    widget.submit_booking(&form).await;
    Ok(())
}

async fn auth_modal<D: Dialogs>(widget: &BookingWidget<D>) -> Result<()> {
    loop {
        let state = widget.snapshot();
        let modal = state.auth_modal;
        if !modal.open {
            return Ok(());
        }
        render::auth_modal(&modal);

        let Some(username) = read_line(&format!("{}: ", modal.username_placeholder()))? else {
            widget.close_auth_modal();
            return Ok(());
        };

        match username.trim() {
            ":toggle" => {
                widget.toggle_auth_mode();
                continue;
            }
            ":cancel" => {
                widget.close_auth_modal();
                return Ok(());
            }
            _ => {}
        }

        let password = read_line("Password: ")?.unwrap_or_default();
        let form = if modal.shows_register_fields() {
            let email = read_line("Email: ")?.unwrap_or_default();
            let phone = read_line("Phone: ")?.unwrap_or_default();
            AuthForm::register(username.trim(), &password, email.trim(), phone.trim())
        } else {
            AuthForm::login(username.trim(), &password)
        };

        widget.submit_auth(&form).await;
    }
}
