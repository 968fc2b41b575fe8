//! Command-line front end for the Connect Hub signup flow.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::SignupConfig;
use domain::{FormEvent, PasswordInput, Role, SignupForm};
use signup_flow_lib::{
    build_screen, AccountSummary, HistoryNavigator, InMemoryAccounts, Message, NoticeKind,
    Reporter, SubmitOutcome,
};

#[derive(Parser)]
#[command(name = "connect-hub")]
#[command(about = "Burkina Connect Hub signup flow")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the roles a member can pick
    Roles,
    /// Show the password checklist and strength meter
    Check {
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm: Option<String>,
    },
    /// Fill the signup form and submit it to the in-memory auth backend
    Signup {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        confirm: String,
        /// One of: information_seeker, merchant, employer, showbiz
        #[arg(long)]
        role: Option<Role>,
        /// Print the password fields in clear text (the JSON report never
        /// carries them)
        #[arg(long, conflicts_with = "json")]
        show_password: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Destination after a successful signup
        #[arg(long, env = "SIGNUP_HOME_PATH")]
        home: Option<String>,
    },
}

/// Reporter that prints notices like toasts.
struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, kind: NoticeKind, message: Message) {
        let marker = if kind.is_destructive() { "✗" } else { "✓" };
        println!("{} {}: {}", marker, message.title, message.description);
    }
}

#[derive(Serialize)]
struct SignupReport {
    outcome: SubmitOutcome,
    location: Option<String>,
    account: Option<AccountSummary>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();
    let config = SignupConfig::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Roles => {
            for role in Role::ALL {
                println!("{:<20} {}", role.as_str(), role.label());
            }
        }
        Commands::Check { password, confirm } => {
            let form = SignupForm::new().apply_all(
                std::iter::once(FormEvent::PasswordChanged(password))
                    .chain(confirm.map(FormEvent::ConfirmPasswordChanged)),
            );
            print_checklist(&form);
        }
        Commands::Signup {
            name,
            email,
            password,
            confirm,
            role,
            show_password,
            json,
            home,
        } => {
            let config = SignupConfig {
                home_path: home.unwrap_or(config.home_path),
                ..config
            };
            let accounts = Arc::new(InMemoryAccounts::new());
            let navigator = Arc::new(HistoryNavigator::new());
            let reporter: Arc<dyn Reporter> = if json {
                Arc::new(signup_flow_lib::TracingReporter)
            } else {
                Arc::new(ConsoleReporter)
            };
            let screen = build_screen(&config, accounts.clone(), navigator.clone(), reporter);

            let mut events = vec![
                FormEvent::FullNameChanged(name),
                FormEvent::EmailChanged(email.clone()),
                FormEvent::PasswordChanged(password),
                FormEvent::ConfirmPasswordChanged(confirm),
            ];
            events.extend(role.map(FormEvent::RoleSelected));
            if show_password {
                events.push(FormEvent::PasswordVisibilityToggled);
            }
            let mut form = SignupForm::new();
            for event in events {
                form = screen.dispatch(event);
            }

            if !json {
                print_form(&form);
            }

            info!("Submitting signup form");
            let outcome = screen.submit().await;
            let report = SignupReport {
                outcome,
                location: navigator.current(),
                account: accounts.find(&email).await,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("outcome: {:?}", report.outcome);
                if let Some(location) = &report.location {
                    println!("location: {}", location);
                }
            }

            if !outcome.is_success() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn print_form(form: &SignupForm) {
    let shown = |value: &str| match form.input_kind() {
        PasswordInput::Text => value.to_string(),
        PasswordInput::Masked => "•".repeat(value.chars().count()),
    };
    println!("name:     {}", form.full_name);
    println!("email:    {}", form.email);
    println!(
        "role:     {}",
        form.role.map(|r| r.label()).unwrap_or("(none)")
    );
    println!("password: {}", shown(&form.password));
    println!("confirm:  {}", shown(&form.confirm_password));
    print_checklist(form);
}

fn print_checklist(form: &SignupForm) {
    if form.show_checklist() {
        let meter: String = form
            .strength_meter()
            .segments()
            .iter()
            .map(|lit| if *lit { '█' } else { '░' })
            .collect();
        println!("strength: {} ({}/4)", meter, form.strength_meter().score);
        for criterion in form.checklist() {
            let mark = if criterion.met { "[x]" } else { "[ ]" };
            println!("  {} {}", mark, criterion.description);
        }
    }
    if form.confirmation_mismatch() {
        println!("  Les mots de passe ne correspondent pas");
    }
}
