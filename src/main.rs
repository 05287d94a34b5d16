//! risk-brief: print synthetic travel-risk ratings for the country catalog,
//! or the full brief for one country.

use chrono::Utc;
use clap::Parser;
use std::io::Write;
use tracing::{info, warn};
use travel_risk_advisor::{
    brief::render_brief,
    catalog::CountryCatalog,
    config::AdvisorConfig,
    index::{parse_as_of, RiskIndex, SearchOption},
    logging::StructuredLogger,
    CountryRisk,
};

#[derive(Debug, Parser)]
#[command(name = "risk-brief", version, about = "Synthetic per-country travel risk briefs (demo data)")]
struct Args {
    /// Country name or part of one; omit to list every country
    query: Option<String>,

    /// Print records as JSON lines
    #[arg(long)]
    json: bool,

    /// Date anchor for "last updated" (YYYY-MM-DD); defaults to today (UTC)
    #[arg(long)]
    date: Option<String>,

    /// Maximum matches listed for an ambiguous query
    #[arg(long)]
    limit: Option<usize>,
}

fn print_summary(out: &mut impl Write, risk: &CountryRisk) -> std::io::Result<()> {
    writeln!(
        out,
        "{} {}: {} ({})",
        risk.flag_emoji.as_deref().unwrap_or(" "),
        risk.name,
        risk.overall,
        risk.overall.label()
    )
}

fn print_record(out: &mut impl Write, risk: &CountryRisk, json: bool) -> std::io::Result<()> {
    if json {
        StructuredLogger::emit_json(risk, out)
    } else {
        write!(out, "{}", render_brief(risk))
    }
}

fn print_matches(out: &mut impl Write, matches: &[&SearchOption], json: bool) -> std::io::Result<()> {
    for m in matches {
        if json {
            StructuredLogger::emit_json(m, out)?;
        } else {
            writeln!(out, "{} ({})", m.name, m.risk)?;
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    let config_path = std::env::var("TRAVEL_RISK_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = AdvisorConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    let today = match args.date.as_deref() {
        Some(s) => parse_as_of(s)?,
        None => Utc::now().date_naive(),
    };
    let catalog = CountryCatalog::from_config(config.catalog_path.as_deref())?;
    info!(countries = catalog.len(), %today, "catalog ready");

    let index = RiskIndex::build(&catalog, today);
    let limit = args.limit.unwrap_or(config.search.max_results);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let Some(query) = args.query else {
        for risk in index.records() {
            if args.json {
                StructuredLogger::emit_json(risk, &mut out)?;
            } else {
                print_summary(&mut out, risk)?;
            }
        }
        return Ok(());
    };

    let matches = index.search(&query, limit);
    let chosen = index
        .find_exact(&query)
        .or_else(|| if matches.len() == 1 { Some(matches[0]) } else { None })
        .and_then(|o| index.get(o.id));

    match chosen {
        Some(risk) => print_record(&mut out, risk, args.json)?,
        None if matches.is_empty() => {
            warn!(query = %query, "no country matches query");
            writeln!(out, "No matches.")?;
        }
        None => print_matches(&mut out, &matches, args.json)?,
    }

    Ok(())
}
