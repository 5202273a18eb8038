//! Session command - drive one ledger from a line-oriented script
//!
//! Each line is one action:
//!
//! ```text
//! add income 2000 Salary
//! add expense 800 Rent and bills
//! remove expense 0 2
//! list | summary | chart | clear
//! ```
//!
//! Blank lines and `#` comments are skipped. A failing line is reported and
//! the session carries on with the ledger untouched by that line.

use super::{chart, list, summary};
use anyhow::Context;
use budgetbuddy::core::{Ledger, TransactionKind};
use clap::Args;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SessionCommand {
    /// Script file of ledger actions ("-" or omitted reads stdin)
    #[arg(default_value = "-")]
    script: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Add {
        kind: TransactionKind,
        amount: String,
        label: String,
    },
    Remove {
        kind: TransactionKind,
        indices: Vec<usize>,
    },
    List,
    Summary,
    Chart,
    Clear,
}

impl SessionCommand {
    pub fn exec(&self, symbol: &str) -> anyhow::Result<()> {
        let reader: Box<dyn BufRead> = if self.script.as_os_str() == "-" {
            Box::new(io::stdin().lock())
        } else {
            let file = File::open(&self.script)
                .with_context(|| format!("opening {}", self.script.display()))?;
            Box::new(BufReader::new(file))
        };

        let failures = run_script(reader, symbol)?;
        if failures > 0 {
            anyhow::bail!("{} session line(s) failed", failures);
        }
        Ok(())
    }
}

/// Run every line of `reader` against one fresh ledger, returning how many
/// lines failed. Only a read error other than bad UTF-8 aborts the run.
fn run_script<R: BufRead>(reader: R, symbol: &str) -> anyhow::Result<usize> {
    let mut ledger = Ledger::new();
    let mut failures = 0;
    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let result = match line {
            Ok(line) => parse_step(&line).and_then(|step| match step {
                Some(step) => run_step(&mut ledger, step, symbol),
                None => Ok(()),
            }),
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                Err(anyhow::Error::new(err).context("line is not valid UTF-8"))
            }
            Err(err) => return Err(err.into()),
        };
        if let Err(err) = result {
            failures += 1;
            log::warn!("Session line {} rejected: {:#}", line_no, err);
            eprintln!("line {}: {:#}", line_no, err);
        }
    }
    Ok(failures)
}

/// Split off the first whitespace-delimited word, returning it and the rest
fn next_word(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(pos) => Some((&s[..pos], &s[pos..])),
        None => Some((s, "")),
    }
}

fn parse_kind(rest: &str) -> anyhow::Result<(TransactionKind, &str)> {
    let (word, rest) = next_word(rest).context("missing entry kind (income or expense)")?;
    Ok((word.parse()?, rest))
}

fn parse_step(line: &str) -> anyhow::Result<Option<Step>> {
    let Some((command, rest)) = next_word(line) else {
        return Ok(None);
    };
    if command.starts_with('#') {
        return Ok(None);
    }

    let step = match command.to_lowercase().as_str() {
        "add" => {
            let (kind, rest) = parse_kind(rest)?;
            let (amount, label) = next_word(rest).context("missing amount")?;
            Step::Add {
                kind,
                amount: amount.to_string(),
                label: label.to_string(),
            }
        }
        "remove" => {
            let (kind, rest) = parse_kind(rest)?;
            let indices = rest
                .split_whitespace()
                .map(|idx| {
                    idx.parse::<usize>()
                        .with_context(|| format!("invalid position '{}'", idx))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            Step::Remove { kind, indices }
        }
        "list" => Step::List,
        "summary" => Step::Summary,
        "chart" => Step::Chart,
        "clear" => Step::Clear,
        other => anyhow::bail!("unknown action '{}'", other),
    };
    Ok(Some(step))
}

fn run_step(ledger: &mut Ledger, step: Step, symbol: &str) -> anyhow::Result<()> {
    match step {
        Step::Add {
            kind,
            amount,
            label,
        } => ledger.add(kind, &label, &amount)?,
        Step::Remove { kind, indices } => {
            let removed = ledger.remove_at(kind, indices);
            println!("Removed {} {} entries", removed, kind);
        }
        Step::List => list::print_tables(ledger, symbol),
        Step::Summary => summary::print_summary(ledger, symbol),
        Step::Chart => chart::print_charts(ledger, symbol),
        Step::Clear => ledger.clear(),
    }
    Ok(())
}
