//! Tower placement binary
//!
//! Reads an instance, places towers with the chosen solver, checks
//! coverage, and writes the solution with its penalty.
//!
//! Usage: towers <INPUT|-> [OUTPUT|-] --solver <naive|group> [--json] [-v]

use clap::Parser;
use towers::cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    towers::log(args.level());
    args.run()
}
