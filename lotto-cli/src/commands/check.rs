use crate::config::CliConfig;
use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Table};
use lotto_core::{DateRange, Draw, DrawVariant, LottoConfig, LottoError, NumberSet, Ticket};
use lotto_engine::{CheckRequest, VerificationOutcome};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Args)]
pub struct CheckArgs {
    /// Owner of the tickets to check
    #[arg(short, long)]
    user: Uuid,

    /// Tickets JSON file (defaults to <data-dir>/tickets.json)
    #[arg(long)]
    tickets: Option<PathBuf>,

    #[command(flatten)]
    window: WindowArgs,

    /// Only tickets whose group contains this text (case-insensitive)
    #[arg(short, long)]
    group: Option<String>,

    /// Print JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
pub struct CompareArgs {
    /// Six numbers, e.g. "5,14,23,29,37,41"
    numbers: String,

    #[command(flatten)]
    window: WindowArgs,

    /// Print JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
pub struct WindowArgs {
    /// Draws JSON file (defaults to <data-dir>/draws.json)
    #[arg(long)]
    draws: Option<PathBuf>,

    /// First draw date (YYYY-MM-DD); defaults to the configured window before --to
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last draw date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Only draws of this variant (lotto, lotto-plus)
    #[arg(long)]
    variant: Option<DrawVariant>,
}

impl WindowArgs {
    fn range(&self, config: &LottoConfig) -> lotto_core::Result<DateRange> {
        resolve_range(self.from, self.to, Local::now().date_naive(), config)
    }
}

pub fn resolve_range(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    today: NaiveDate,
    config: &LottoConfig,
) -> lotto_core::Result<DateRange> {
    let to = to.unwrap_or(today);
    match from {
        Some(from) => DateRange::new(from, to, config),
        None => DateRange::ending_at(to, config),
    }
}

async fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let items: Vec<T> = serde_json::from_str(&content)
        .map_err(LottoError::from)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::debug!("Loaded {} records from {}", items.len(), path.display());
    Ok(items)
}

pub fn parse_numbers(input: &str) -> lotto_core::Result<NumberSet> {
    Ok(input.parse::<NumberSet>()?)
}

/// Log selections that came back empty so a blank report is not mistaken for "no wins".
fn warn_if_empty(outcome: &VerificationOutcome, range: DateRange) {
    if outcome.tickets.is_empty() {
        tracing::warn!("No tickets selected; check --user and --group");
    }
    if outcome.draws.is_empty() {
        tracing::warn!(
            "No draws between {} and {}",
            range.start(),
            range.end()
        );
    }
}

pub async fn load_tickets(path: &Path) -> anyhow::Result<Vec<Ticket>> {
    load_json(path).await
}

pub async fn load_draws(path: &Path) -> anyhow::Result<Vec<Draw>> {
    load_json(path).await
}

pub async fn handle_check(args: CheckArgs, config: &CliConfig) -> anyhow::Result<()> {
    let range = args.window.range(&config.engine)?;

    let tickets_path = args.tickets.unwrap_or_else(|| config.tickets_path());
    let draws_path = args.window.draws.clone().unwrap_or_else(|| config.draws_path());

    let tickets = load_tickets(&tickets_path).await?;
    let draws = load_draws(&draws_path).await?;

    let mut request = CheckRequest::new(args.user, range);
    if let Some(group) = args.group {
        request = request.with_group(group);
    }
    if let Some(variant) = args.window.variant {
        request = request.with_variant(variant);
    }

    let outcome = request.run(&tickets, &draws);
    warn_if_empty(&outcome, range);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome, range);
    }

    Ok(())
}

pub async fn handle_compare(args: CompareArgs, config: &CliConfig) -> anyhow::Result<()> {
    let numbers = parse_numbers(&args.numbers)?;
    let range = args.window.range(&config.engine)?;
    let draws_path = args.window.draws.clone().unwrap_or_else(|| config.draws_path());
    let draws = load_draws(&draws_path).await?;

    let ticket = Ticket::new(Uuid::nil(), numbers, None);
    let mut request = CheckRequest::new(ticket.user_id, range);
    if let Some(variant) = args.window.variant {
        request = request.with_variant(variant);
    }

    let outcome = request.run(&[ticket], &draws);
    warn_if_empty(&outcome, range);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome, range);
    }

    Ok(())
}

fn format_amount(minor: u64) -> String {
    format!("{}.{:02}", minor / 100, minor % 100)
}

fn print_outcome(outcome: &VerificationOutcome, range: DateRange) {
    println!(
        "Draws from {} to {} ({} days)",
        range.start(),
        range.end(),
        range.days()
    );
    println!();

    if outcome.tickets.is_empty() {
        println!("No tickets to check.");
    } else {
        println!("Tickets considered:");
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Ticket", "Group", "Numbers"]);

        for ticket in &outcome.tickets {
            table.add_row(vec![
                ticket.id.to_string()[..8].to_string(), // truncated for display
                ticket.group.clone().unwrap_or_else(|| "-".to_string()),
                ticket.numbers.to_string(),
            ]);
        }
        println!("{}", table);
    }
    println!();

    if outcome.draws.is_empty() {
        println!("No draws in this window.");
    }

    for draw in &outcome.draws {
        println!("{} {}: {}", draw.date, draw.variant, draw.numbers);

        if draw.winners.is_empty() {
            println!("  No winning tickets");
            continue;
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Ticket", "Matched", "Hits", "Prize"]);

        for winner in &draw.winners {
            let prize = draw.prizes.get(winner.tier);
            table.add_row(vec![
                winner.ticket_id.to_string()[..8].to_string(),
                winner
                    .numbers
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
                winner.tier.hits().to_string(),
                prize
                    .amount
                    .map(format_amount)
                    .unwrap_or_else(|| "-".to_string()),
            ]);
        }
        println!("{}", table);
    }

    println!();
    println!(
        "{} winning matches, checked in {:.3} ms",
        outcome.winner_count(),
        outcome.elapsed.as_secs_f64() * 1000.0
    );
}
