//! Presentation layer for a committed estimate: terminal rendering,
//! derived display values, and JSON export.
//!
//! Everything here is recomputed freely from the result and the input; none
//! of it feeds back into the engine.

use crate::engine::cost;
use crate::error::Result;
use crate::model::{Addon, Complexity, EstimateResult, ProjectInput, ProjectType};
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

/// Market comparison band around the estimated total.
pub const MARKET_BAND_LOW_FACTOR: f64 = 0.85;
pub const MARKET_BAND_HIGH_FACTOR: f64 = 1.3;

/// Teams larger than this get a staffing-cost bullet.
pub const LARGE_TEAM_DRIVER_THRESHOLD: u32 = 5;

/// Durations beyond this get a long-engagement bullet.
pub const LONG_DURATION_DRIVER_THRESHOLD: u32 = 24;

/// Comparison band computed from already-known totals. Ephemeral display
/// data, never part of the exported estimate.
pub fn market_band(total_cost: u64) -> (u64, u64) {
    (
        (total_cost as f64 * MARKET_BAND_LOW_FACTOR).round() as u64,
        (total_cost as f64 * MARKET_BAND_HIGH_FACTOR).round() as u64,
    )
}

/// Rule-based "what increased your cost" bullets.
pub fn cost_drivers(input: &ProjectInput) -> Vec<String> {
    let mut drivers = Vec::new();

    if input.project_type == Some(ProjectType::Ai) {
        drivers.push("AI/ML scope carries premium engineering rates".to_string());
    }
    if input.complexity == Some(Complexity::High) {
        drivers.push(format!(
            "High complexity multiplies the base rate by {}",
            cost::complexity_factor(Complexity::High)
        ));
    }
    if let Some(team_size) = input.team_size {
        if team_size > LARGE_TEAM_DRIVER_THRESHOLD {
            drivers.push(format!(
                "Team of {} adds {} in staffing",
                team_size,
                format_amount(u64::from(team_size) * cost::PER_HEAD_COST)
            ));
        }
    }
    if let Some(weeks) = input.duration_weeks {
        if weeks > LONG_DURATION_DRIVER_THRESHOLD {
            drivers.push(format!(
                "Engagement beyond {} weeks increases delivery risk",
                LONG_DURATION_DRIVER_THRESHOLD
            ));
        }
    }
    for addon in Addon::ALL {
        if input.addons.get(addon) {
            drivers.push(format!(
                "{} add-on (+{})",
                addon.label(),
                format_amount(cost::addon_cost(addon))
            ));
        }
    }

    drivers
}

/// Group digits with thousands separators for display.
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Print the full estimate report to stdout.
pub fn render(input: &ProjectInput, estimate: &EstimateResult, currency: &str) {
    println!("{}", "Estimate Complete".green().bold());
    println!();

    println!(
        "Total Cost:  {}{}",
        currency.bold(),
        format_amount(estimate.total_cost).bold().cyan()
    );
    println!("Confidence:  {}%", estimate.confidence);
    println!();

    println!("{}", "Cost Breakdown".bold());
    for (category, amount) in estimate.breakdown.entries() {
        println!(
            "  {:<20} {}{}",
            category,
            currency,
            format_amount(amount).cyan()
        );
    }
    println!();

    println!(
        "Timeline:    {} weeks",
        estimate.timeline_weeks.to_string().green()
    );
    println!("Risk Score:  {}", format_risk(estimate.risk_score));
    println!();

    println!("{}", "Recommended Team".bold());
    for role in &estimate.team {
        println!("  - {}", role);
    }
    println!();

    println!("{}", "Insights".bold());
    for insight in &estimate.insights {
        println!("  * {}", insight);
    }
    println!();

    let (band_low, band_high) = market_band(estimate.total_cost);
    println!(
        "Market comparison: {}{} - {}{}",
        currency,
        format_amount(band_low),
        currency,
        format_amount(band_high)
    );

    let drivers = cost_drivers(input);
    if !drivers.is_empty() {
        println!();
        println!("{}", "What increased your cost".bold());
        for driver in &drivers {
            println!("  * {}", driver);
        }
    }
}

fn format_risk(risk_score: u8) -> colored::ColoredString {
    let text = format!("{}/100", risk_score);
    match risk_score {
        0..=30 => text.green(),
        31..=60 => text.yellow(),
        _ => text.red(),
    }
}

#[derive(Serialize)]
struct ExportArtifact<'a> {
    generated_at: DateTime<Utc>,
    input: &'a ProjectInput,
    estimate: &'a EstimateResult,
}

/// Write the estimate (verbatim) plus the originating input to a
/// caller-supplied path as pretty-printed JSON.
pub fn export(input: &ProjectInput, estimate: &EstimateResult, path: &Path) -> Result<()> {
    let artifact = ExportArtifact {
        generated_at: Utc::now(),
        input,
        estimate,
    };
    let content = serde_json::to_string_pretty(&artifact)?;
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), "Exported estimate");
    Ok(())
}

/// Default filename for interactive exports.
pub fn default_export_filename() -> String {
    format!("predicto-estimate-{}.json", Utc::now().timestamp())
}
