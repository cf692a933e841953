//! dash-runner: headless dataset runner for paydash.
//!
//! Usage:
//!   dash-runner --business growth --range "Last 90 days"
//!   dash-runner --business scale --range "Last 7 days" --json
//!   dash-runner --disable smart-retries --db ledger.db

use anyhow::Result;
use chrono::Local;
use paydash_core::{
    generator::DashboardGenerator,
    store::{LedgerStore, MemoryStore, SqliteStore},
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let business = string_arg(&args, "--business", "growth");
    let range = string_arg(&args, "--range", "Last 90 days");
    let db = string_arg(&args, "--db", ":memory:");
    let as_json = args.iter().any(|a| a == "--json");
    let as_csv = args.iter().any(|a| a == "--csv");

    let store: Box<dyn LedgerStore> = if db == ":memory:" {
        Box::new(MemoryStore::new())
    } else {
        let sqlite = SqliteStore::open(&db)?;
        sqlite.migrate()?;
        Box::new(sqlite)
    };

    let today = Local::now().date_naive();
    let mut generator = DashboardGenerator::new(&business, &range, store, today)?;

    for toggle in flag_values(&args, "--enable") {
        if !generator.enable_optimization(&toggle)? {
            log::warn!("--enable: no such optimization '{toggle}'");
        }
    }
    for toggle in flag_values(&args, "--disable") {
        if !generator.disable_optimization(&toggle)? {
            log::warn!("--disable: no such optimization '{toggle}'");
        }
    }

    let data = generator.generate_all_data();
    let impact = generator.generate_optimization_data();
    let timeline = generator.generate_optimization_timeline();

    if as_json {
        let out = serde_json::json!({
            "dataset": data,
            "optimizationImpact": impact,
            "optimizationTimeline": timeline,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if as_csv {
        print!("{}", main_chart_csv(&data.chart_data));
        return Ok(());
    }

    let multipliers = generator.range().multipliers();
    println!("paydash — dash-runner");
    println!("  business: {}", generator.profile().label());
    println!("  range:    {}", generator.range().label());
    println!(
        "  scale:    {:.3}x volume / {:.3}x payments vs 90-day baseline",
        multipliers.volume, multipliers.payments
    );
    println!();
    println!("=== HEADLINE METRICS ===");
    println!("  success rate:   {:.2}%", data.metrics.success_rate);
    println!("  volume:         ${:.2}", data.metrics.volume);
    println!("  payments:       {:.0}", data.metrics.payments);
    println!("  auth rate:      {:.2}%", data.metrics.authorization_rate);
    println!("  fraud rate:     {:.2}%", data.metrics.fraud_rate);
    println!("  processing:     {:.2}%", data.metrics.processing_cost);
    println!("  dispute rate:   {:.2}%", data.metrics.dispute_rate);
    println!();
    println!("=== MAIN CHART ({} points) ===", data.chart_data.current.len());
    println!("  current:   {:?}", data.chart_data.current);
    println!("  baseline:  {:?}", data.chart_data.baseline);
    println!("  optimized: {:?}", data.chart_data.optimized);
    println!();
    println!(
        "=== OPTIMIZATIONS ({} of {} active) ===",
        impact.active_count, impact.total_count
    );
    println!("  added volume:   ${:.2}", impact.volume);
    println!("  added payments: {:.1}", impact.payments);
    println!("  added success:  +{:.2}pp", impact.success_rate);
    for entry in &timeline {
        println!(
            "  {} | {} | {}",
            entry.enabled_date, entry.title, entry.revenue
        );
    }

    Ok(())
}

fn main_chart_csv(chart: &paydash_core::dataset::ChartSeries) -> String {
    let mut csv = String::from("Point,Current,Baseline,Optimized\n");
    for (i, value) in chart.current.iter().enumerate() {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            i + 1,
            value,
            chart.baseline[i],
            chart.optimized[i]
        ));
    }
    csv
}

fn string_arg(args: &[String], flag: &str, default: &str) -> String {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
        .unwrap_or_else(|| default.to_string())
}

fn flag_values(args: &[String], flag: &str) -> Vec<String> {
    args.windows(2)
        .filter(|w| w[0] == flag)
        .map(|w| w[1].clone())
        .collect()
}
