use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use booking_core::{
    logos::{fallback_for, FallbackStyle},
    BookingFlow, FlowSettings, LogoutPolicy, MatchCatalog, SessionSnapshot,
};
use clap::{Parser, Subcommand};
use shared::{
    domain::{AreaNumber, Zone},
    protocol::{BookingIntent, SeatChoice},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the match catalog as JSON.
    Catalog {
        #[arg(long)]
        file: Option<PathBuf>,
        /// Also list the placeholder artwork used for each team.
        #[arg(long)]
        logo_fallbacks: bool,
    },
    /// Book match one in the Red zone, area 104, printing every screen.
    Walkthrough {
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Apply a JSON array of intents and print the final session.
    Replay {
        #[arg(long)]
        script: PathBuf,
        #[arg(long)]
        catalog: Option<PathBuf>,
        #[arg(long)]
        clear_tickets_on_logout: bool,
    },
}

fn load_catalog(path: Option<&PathBuf>) -> Result<MatchCatalog> {
    match path {
        Some(path) => MatchCatalog::load(path)
            .with_context(|| format!("failed to load catalog '{}'", path.display())),
        None => Ok(MatchCatalog::mock()),
    }
}

fn walkthrough_intents(catalog: &MatchCatalog) -> Result<Vec<BookingIntent>> {
    let Some(first) = catalog.iter().next() else {
        bail!("catalog has no matches to book");
    };
    Ok(vec![
        BookingIntent::SubmitCredentials,
        BookingIntent::SelectMatch { match_id: first.id },
        BookingIntent::ChooseSeat(SeatChoice::Zone(Some(Zone::Red))),
        BookingIntent::ChooseSeat(SeatChoice::AreaNumber(AreaNumber::new(104))),
        BookingIntent::Proceed,
        BookingIntent::Confirm,
        BookingIntent::Pay,
        BookingIntent::GoToTickets,
    ])
}

/// Applies `intents` in order and stops at the first rejection.
fn replay(flow: &mut BookingFlow, intents: Vec<BookingIntent>) -> Result<SessionSnapshot> {
    info!(steps = intents.len(), "replaying intent script");
    for (index, intent) in intents.into_iter().enumerate() {
        let step = index + 1;
        let kind = intent.kind();
        if let Err(err) = flow.apply(intent) {
            warn!(step, intent = %kind, error = %err, "intent script stopped");
            return Err(err).with_context(|| format!("step {step} ({kind}) was rejected"));
        }
    }
    let snapshot = flow.snapshot();
    info!(screen = %snapshot.screen, tickets = snapshot.tickets.len(), "intent script finished");
    Ok(snapshot)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Catalog {
            file,
            logo_fallbacks,
        } => {
            let catalog = load_catalog(file.as_ref())?;
            println!("{}", serde_json::to_string_pretty(catalog.as_slice())?);
            if logo_fallbacks {
                for fixture in catalog.iter() {
                    for team in [fixture.home(), fixture.away()] {
                        let placeholder = fallback_for(FallbackStyle::TeamName, team.name, team.icon);
                        println!("{}\t{}", team.name, placeholder.url());
                    }
                }
            }
        }
        Command::Walkthrough { catalog } => {
            let mut flow = BookingFlow::new(load_catalog(catalog.as_ref())?);
            println!("{}", flow.screen_kind().title());
            for intent in walkthrough_intents(flow.catalog())? {
                let kind = intent.kind();
                let screen = flow.apply(intent)?;
                println!("{kind} -> {}", screen.title());
            }
            for ticket in flow.tickets() {
                println!(
                    "ticket {}: {} | {} | {}",
                    ticket.id,
                    ticket.match_info.title(),
                    ticket.match_info.kickoff_label(),
                    booking_core::seat_label(&ticket.seat_info)
                );
            }
        }
        Command::Replay {
            script,
            catalog,
            clear_tickets_on_logout,
        } => {
            let raw = fs::read_to_string(&script)
                .with_context(|| format!("failed to read script '{}'", script.display()))?;
            let intents: Vec<BookingIntent> = serde_json::from_str(&raw)
                .with_context(|| format!("invalid intent script '{}'", script.display()))?;
            let logout_policy = if clear_tickets_on_logout {
                LogoutPolicy::ClearTickets
            } else {
                LogoutPolicy::PreserveTickets
            };
            let mut flow = BookingFlow::with_settings(
                load_catalog(catalog.as_ref())?,
                FlowSettings { logout_policy },
            );
            let snapshot = replay(&mut flow, intents)?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/replay_tests.rs"]
mod tests;
