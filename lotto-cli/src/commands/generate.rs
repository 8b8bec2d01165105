use clap::Args;
use comfy_table::{presets::UTF8_FULL, Table};
use lotto_core::NumberSet;
use lotto_engine::{covered_numbers, CoverageSetGenerator, NumberGenerator, RandomSetGenerator};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

#[derive(Args)]
pub struct GenerateArgs {
    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
pub struct SingleOutput {
    pub numbers: NumberSet,
}

#[derive(Debug, Serialize)]
pub struct SystemOutput {
    pub tickets: Vec<NumberSet>,
}

/// Seeded ChaCha when a seed is given, otherwise the thread-local RNG.
pub fn make_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => {
            tracing::debug!("Using seeded RNG ({})", seed);
            Box::new(ChaCha8Rng::seed_from_u64(seed))
        }
        None => Box::new(rand::thread_rng()),
    }
}

pub fn generate_single(seed: Option<u64>) -> SingleOutput {
    let mut rng = make_rng(seed);
    SingleOutput {
        numbers: RandomSetGenerator.generate_with(&mut rng),
    }
}

pub fn generate_system(seed: Option<u64>) -> SystemOutput {
    let mut rng = make_rng(seed);
    SystemOutput {
        tickets: CoverageSetGenerator.generate_with(&mut rng).to_vec(),
    }
}

pub fn handle_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let output = generate_single(args.seed);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Your numbers: {}", output.numbers);
    }

    Ok(())
}

pub fn handle_system(args: GenerateArgs) -> anyhow::Result<()> {
    let output = generate_system(args.seed);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Numbers"]);

    for (i, set) in output.tickets.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), set.to_string()]);
    }

    println!("{}", table);
    println!(
        "Covers {} of 49 numbers",
        covered_numbers(&output.tickets).len()
    );

    Ok(())
}
