// SPDX-License-Identifier: MIT

//! ballot - election ledger CLI
//!
//! Thin shell over `ballot-core`: each invocation loads both record files,
//! runs one operation, and rewrites the files if state changed.

use anyhow::Result;
use ballot_core::{Ledger, StoreLimits, NUM_CANDIDATES};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ballot", version, about = "Single-node election record store")]
struct Cli {
    /// Data directory holding voters.bin and votes.bin
    #[arg(long, global = true, default_value = ".")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new voter
    Register {
        /// Unique voter ID
        id: i32,
        /// Voter name
        name: String,
    },
    /// Cast a vote
    Vote {
        /// Registered voter ID
        voter_id: i32,
        /// Candidate number (1-3)
        candidate: i32,
    },
    /// Show per-candidate results
    Tally {
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// List registered voters
    Voters,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut ledger = Ledger::open(&cli.data_dir, StoreLimits::default())?;
    for warning in ledger.warnings() {
        eprintln!("Warning: {}", warning);
    }

    match cli.command {
        Commands::Register { id, name } => {
            ledger.store_mut().register_voter(id, &name)?;
            ledger.save()?;
            println!("Voter registered successfully.");
        }

        Commands::Vote {
            voter_id,
            candidate,
        } => {
            ledger.store_mut().cast_vote(voter_id, candidate)?;
            ledger.save()?;
            println!("Vote cast successfully.");
        }

        Commands::Tally { json } => {
            let tally = ledger.store().tally();
            if json {
                println!("{}", serde_json::to_string_pretty(&tally)?);
            } else {
                println!("Voting Results:");
                for candidate in 1..=NUM_CANDIDATES {
                    println!("Candidate {}: {} votes", candidate, tally.count_for(candidate));
                }
                println!("Total votes: {}", tally.total);
            }
        }

        Commands::Voters => {
            let voters = ledger.store().voters();
            if voters.is_empty() {
                println!("No voters registered");
            } else {
                for voter in voters {
                    println!("{:<8} {}", voter.id, voter.name);
                }
            }
        }
    }

    Ok(())
}
