//! Household Social Security CLI
//!
//! Loads a household CSV, prints the member summary and the yearly benefit
//! projection (no COLA).

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use household_ss::household::{ages_by_year, load_household, loader::DEFAULT_HOUSEHOLD_PATH, summarize};
use household_ss::projection::{Cell, ProjectionConfig, ProjectionEngine, ZeroDisplay};
use household_ss::ScenarioRunner;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "household_ss", about = "Household Social Security benefit projection (no COLA)")]
struct Cli {
    /// Household CSV (Name,DOB,LifeAge,ClaimAgeYears,ClaimAgeMonths,PIA)
    #[arg(long, default_value = DEFAULT_HOUSEHOLD_PATH)]
    household: PathBuf,

    /// Projection start date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Years to project; defaults to the longest remaining life expectancy
    #[arg(long)]
    years: Option<u32>,

    /// Show zero amounts as 0 rather than blank
    #[arg(long)]
    zeros: bool,

    /// Print projection rows as JSON
    #[arg(long)]
    json: bool,

    /// Compare whole-year claim ages 62..=70 for the named person
    #[arg(long, value_name = "NAME")]
    compare_claim_ages: Option<String>,
}

fn format_cell(cell: &Cell) -> String {
    match cell {
        Cell::Year(y) => y.to_string(),
        Cell::Amount(a) => format!("{:.2}", a),
        Cell::Blank => String::new(),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let household = load_household(&cli.household)
        .with_context(|| format!("loading household from {}", cli.household.display()))?;

    let start = cli.start.unwrap_or_else(|| Local::now().date_naive());
    household.validate_as_of(start)?;

    let years = cli
        .years
        .unwrap_or_else(|| ProjectionConfig::horizon_from_life_expectancy(household.people(), start));
    let mut config = ProjectionConfig::new(start, years);
    if cli.zeros {
        config.zero_display = ZeroDisplay::Zero;
    }

    if let Some(name) = &cli.compare_claim_ages {
        let runner = ScenarioRunner::new(config);
        let outcomes = runner.compare_claim_ages(&household, name, &ScenarioRunner::whole_year_claim_ages())?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&outcomes)?);
            return Ok(());
        }
        println!("Claim-age comparison for {} ({} years from {}):", name, years, start);
        println!("{:>9} {:>12} {:>18}", "ClaimAge", "Monthly", "Lifetime Total");
        for o in &outcomes {
            println!(
                "{:>6}:{:02} {:>12.2} {:>18.2}",
                o.claim_years, o.claim_months, o.monthly_at_claim, o.lifetime_household_total
            );
        }
        return Ok(());
    }

    let zeros = config.zero_display;
    let result = ProjectionEngine::new(config).project_household(&household);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result.rows)?);
        return Ok(());
    }

    println!("Household Summary (as of {}):", start);
    println!(
        "{:<12} {:>10} {:>4} {:>5} {:>6} {:>10} {:>6} {:>6} {:>10}",
        "Name", "DOB", "Age", "Life", "Left", "EOL", "Claim", "FRA", "PIA"
    );
    for s in summarize(household.people(), start) {
        println!(
            "{:<12} {:>10} {:>4} {:>5} {:>6} {:>10} {:>3}:{:02} {:>6} {:>10.2}",
            s.name,
            s.dob,
            s.current_age,
            s.life_age,
            s.years_remaining,
            s.eol_date,
            s.claim_age_years,
            s.claim_age_months,
            s.fra.to_string(),
            s.pia_at_fra,
        );
    }

    println!("\nAges by year:");
    println!(
        "{:>6}{}",
        "Year",
        household.people().iter().map(|p| format!("{:>12}", p.name)).collect::<String>()
    );
    for (year, ages) in ages_by_year(household.people(), start, years) {
        let cells: String = ages
            .iter()
            .map(|age| format!("{:>12}", age.map(|a| a.to_string()).unwrap_or_default()))
            .collect();
        println!("{:>6}{}", year, cells);
    }

    println!("\nSocial Security - Annual Projection (no COLA), {} years:", years);
    let Some(first) = result.rows.first() else {
        println!("No projection rows (horizon is zero).");
        return Ok(());
    };

    let mut header: Vec<String> = first.columns(zeros).into_iter().map(|(name, _)| name).collect();
    header.extend(first.members.iter().map(|m| format!("{} Status", m.name)));
    println!("{}", header.iter().map(|h| format!("{:>20}", h)).collect::<String>());
    for row in &result.rows {
        let mut line: String = row
            .columns(zeros)
            .iter()
            .map(|(_, cell)| format!("{:>20}", format_cell(cell)))
            .collect();
        line.extend(row.members.iter().map(|m| format!("{:>20}", m.status.as_str())));
        println!("{}", line);
    }

    let summary = result.summary();
    println!("\nLifetime totals:");
    for (name, total) in &summary.member_totals {
        println!("  {:<12} ${:.2}", name, total);
    }
    println!("  {:<12} ${:.2}", "Household", summary.household_total);

    Ok(())
}
