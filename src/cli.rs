use crate::Penalty;
use crate::geometry::Point;
use crate::placement::Instance;
use crate::placement::Solver;
use anyhow::Context;
use clap::Parser;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Write;

/// Solve a tower placement instance.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Instance file to read, or - for stdin.
    pub input: String,
    /// Solution file to write, or - for stdout.
    #[arg(default_value = "-")]
    pub output: String,
    /// Placement strategy.
    #[arg(long, value_enum)]
    pub solver: Solver,
    /// Write a JSON report instead of the solution text format.
    #[arg(long)]
    pub json: bool,
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(serde::Serialize)]
struct Report<'a> {
    solver: String,
    penalty: Penalty,
    towers: &'a [Point],
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let instance = Instance::parse(
            self.reader()?
                .lines()
                .collect::<std::io::Result<Vec<_>>>()
                .with_context(|| format!("reading {}", self.input))?,
        )
        .with_context(|| format!("parsing {}", self.input))?;
        instance
            .validate()
            .with_context(|| format!("validating {}", self.input))?;
        log::info!("loaded {}", instance);
        let solution = self.solver.solve(&instance);
        solution
            .valid(&instance)
            .with_context(|| format!("{} solver produced an invalid solution", self.solver))?;
        let penalty = solution.penalty(&instance);
        log::info!("penalty {:.4}", penalty);
        let ref mut out = self.writer()?;
        if self.json {
            let report = Report {
                solver: self.solver.to_string(),
                penalty,
                towers: solution.towers(),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        } else {
            writeln!(out, "# Penalty: {}", penalty)?;
            solution.serialize(out)?;
        }
        out.flush()
            .with_context(|| format!("writing {}", self.output))
    }

    fn reader(&self) -> anyhow::Result<Box<dyn BufRead>> {
        match self.input.as_str() {
            "-" => Ok(Box::new(BufReader::new(std::io::stdin()))),
            path => Ok(Box::new(BufReader::new(
                std::fs::File::open(path).with_context(|| format!("opening {}", path))?,
            ))),
        }
    }

    fn writer(&self) -> anyhow::Result<Box<dyn Write>> {
        match self.output.as_str() {
            "-" => Ok(Box::new(std::io::stdout())),
            path => Ok(Box::new(std::io::BufWriter::new(
                std::fs::File::create(path).with_context(|| format!("creating {}", path))?,
            ))),
        }
    }
}
