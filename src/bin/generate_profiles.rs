//! Dump the seeded synthetic ARGO profiles as JSON
//!
//! Usage: cargo run --bin generate-profiles -- [OPTIONS]

use clap::Parser;
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};
use std::fs;
use std::path::PathBuf;

use argo_dashboard_service::catalog::profiles::seed_profiles;

#[derive(Parser, Debug)]
#[command(name = "generate-profiles")]
#[command(about = "Generate the seeded synthetic ARGO profile set as JSON", long_about = None)]
struct Args {
    /// Fixed RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Output path; prints to stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let profiles = match args.seed {
        Some(seed) => seed_profiles(&mut StdRng::seed_from_u64(seed)),
        None => seed_profiles(&mut thread_rng()),
    };

    let json = serde_json::to_string_pretty(&profiles)?;
    match args.output {
        Some(path) => {
            fs::write(&path, json)?;
            eprintln!("Wrote {} profiles to {}", profiles.len(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
