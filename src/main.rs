use anyhow::Context;
use chrono::Utc;
use folioledger::engine::{analytics_summary, generate_return_per_asset, AllocationSlice, AnalyticsSummary};
use folioledger::ledger::load_snapshot_with_policy;
use folioledger::validate::ValidationPolicy;
use folioledger::Period;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    period: Period,
    summary: AnalyticsSummary,
    return_per_asset: Vec<AllocationSlice>,
}

struct Args {
    ledger_path: PathBuf,
    period: Period,
    policy: ValidationPolicy,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut ledger_path = None;
    let mut period = Period::All;
    let mut policy = ValidationPolicy::default();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--strict" => policy = ValidationPolicy::strict(),
            "--help" | "-h" => {
                anyhow::bail!("usage: folioledger <ledger.json> [7D|30D|90D|1Y|ALL] [--strict]")
            }
            other if ledger_path.is_none() => ledger_path = Some(PathBuf::from(other)),
            other => {
                period = other
                    .parse()
                    .with_context(|| format!("bad period argument {other:?}"))?;
            }
        }
    }

    let ledger_path =
        ledger_path.context("usage: folioledger <ledger.json> [7D|30D|90D|1Y|ALL] [--strict]")?;

    Ok(Args {
        ledger_path,
        period,
        policy,
    })
}

fn run() -> anyhow::Result<()> {
    let args = parse_args()?;

    let snapshot = load_snapshot_with_policy(&args.ledger_path, &args.policy)
        .with_context(|| format!("loading {}", args.ledger_path.display()))?;

    tracing::info!(
        transactions = snapshot.transactions.len(),
        assets = snapshot.assets.len(),
        period = %args.period,
        "computing analytics report"
    );

    let report = Report {
        period: args.period,
        summary: analytics_summary(
            &snapshot.transactions,
            &snapshot.assets,
            args.period,
            Utc::now(),
        ),
        return_per_asset: generate_return_per_asset(&snapshot.transactions, &snapshot.assets),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
