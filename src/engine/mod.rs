//! The estimation engine: four independent pure models over a
//! [`ProjectInput`], assembled into one [`EstimateResult`] by [`generate`].
//!
//! Every function here is synchronous, deterministic, and total: inputs the
//! wizard has not gated yet fall back to documented defaults instead of
//! failing. No I/O, no randomness.

pub mod cost;
pub mod risk;
pub mod team;
pub mod timeline;

use crate::model::{Complexity, EstimateResult, ProjectInput, ProjectType};

/// Productivity multiplier used for the first insight line.
pub const PRODUCTIVITY_FACTOR: f64 = 1.4;

/// Risk scores above this flip the insight verdict to phased delivery.
pub const PHASED_DELIVERY_RISK_THRESHOLD: u8 = 60;

/// Market fluctuation band reported in the insights.
pub const FLUCTUATION_LOW_FACTOR: f64 = 0.9;
pub const FLUCTUATION_HIGH_FACTOR: f64 = 1.25;

// Defaults applied when an optional field is still unset. In the wizard
// these never fire because forward transitions are gated; the one-shot CLI
// validates its flags before calling in.
pub(crate) fn resolved_project_type(input: &ProjectInput) -> ProjectType {
    input.project_type.unwrap_or(ProjectType::Web)
}

pub(crate) fn resolved_complexity(input: &ProjectInput) -> Complexity {
    input.complexity.unwrap_or(Complexity::Medium)
}

pub(crate) fn resolved_team_size(input: &ProjectInput) -> u32 {
    input.team_size.filter(|n| *n > 0).unwrap_or(1)
}

pub(crate) fn resolved_duration_weeks(input: &ProjectInput) -> u32 {
    input.duration_weeks.filter(|n| *n > 0).unwrap_or(1)
}

/// Run all four models and assemble the committed estimate.
pub fn generate(input: &ProjectInput) -> EstimateResult {
    let (total_cost, breakdown) = cost::estimate_cost(input);
    let risk_score = risk::risk_score(input);
    let timeline_weeks = timeline::timeline_weeks(input);
    let team = team::team_structure(input);

    tracing::info!(total_cost, risk_score, timeline_weeks, "Generated estimate");

    EstimateResult {
        total_cost,
        breakdown,
        risk_score,
        timeline_weeks,
        team,
        confidence: 100 - risk_score,
        insights: build_insights(input, total_cost, risk_score),
    }
}

fn build_insights(input: &ProjectInput, total_cost: u64, risk_score: u8) -> Vec<String> {
    let team_size = resolved_team_size(input);
    let productivity = (f64::from(team_size) * PRODUCTIVITY_FACTOR).round() as u64;

    let verdict = if risk_score > PHASED_DELIVERY_RISK_THRESHOLD {
        "High risk detected: consider phased delivery"
    } else {
        "Risk level acceptable for standard delivery"
    };

    let low = (total_cost as f64 * FLUCTUATION_LOW_FACTOR).round() as u64;
    let high = (total_cost as f64 * FLUCTUATION_HIGH_FACTOR).round() as u64;

    vec![
        format!("Estimated team productivity: {} units/week", productivity),
        verdict.to_string(),
        format!("Market fluctuation range: {} - {}", low, high),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Addons, FEATURE_CATALOG};

    fn heavy_ai_input() -> ProjectInput {
        let mut input = ProjectInput {
            project_type: Some(ProjectType::Ai),
            complexity: Some(Complexity::High),
            team_size: Some(10),
            duration_weeks: Some(10),
            addons: Addons {
                cloud: true,
                security: true,
                analytics: false,
            },
            ..Default::default()
        };
        for f in FEATURE_CATALOG.iter().take(9) {
            input.toggle_feature(f);
        }
        input
    }

    #[test]
    fn test_heavy_ai_scenario() {
        let estimate = generate(&heavy_ai_input());

        // 35 + 20 + 25, uncapped
        assert_eq!(estimate.risk_score, 80);
        assert_eq!(estimate.timeline_weeks, 15);
        assert!(estimate.team.iter().any(|r| r == team::SOLUTION_ARCHITECT));
        assert!(estimate.team.iter().any(|r| r == team::AI_RESEARCHER));

        // Cloud and security contribute, analytics does not.
        let without_addons = generate(&ProjectInput {
            addons: Addons::default(),
            ..heavy_ai_input()
        });
        assert_eq!(
            estimate.total_cost - without_addons.total_cost,
            cost::ADDON_CLOUD_COST + cost::ADDON_SECURITY_COST
        );
    }

    #[test]
    fn test_small_web_scenario() {
        let estimate = generate(&ProjectInput {
            project_type: Some(ProjectType::Web),
            complexity: Some(Complexity::Low),
            team_size: Some(3),
            duration_weeks: Some(6),
            ..Default::default()
        });

        assert_eq!(estimate.risk_score, 0);
        assert_eq!(estimate.confidence, 100);
        assert_eq!(estimate.timeline_weeks, 6);
        assert_eq!(estimate.team, team::base_roles(ProjectType::Web));
        assert_eq!(
            estimate.total_cost,
            cost::BASE_RATE_WEB + 3 * cost::PER_HEAD_COST
        );
        assert_eq!(estimate.breakdown.sum(), estimate.total_cost);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let input = heavy_ai_input();
        let first = generate(&input);
        let second = generate(&input);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_total_over_empty_input() {
        // The engine never rejects its input; unset fields use defaults.
        let estimate = generate(&ProjectInput::default());
        assert!(estimate.risk_score <= 100);
        assert!(estimate.timeline_weeks >= 1);
        assert_eq!(estimate.breakdown.sum(), estimate.total_cost);
    }

    #[test]
    fn test_insight_order_is_stable() {
        let estimate = generate(&heavy_ai_input());
        assert_eq!(estimate.insights.len(), 3);
        assert!(estimate.insights[0].starts_with("Estimated team productivity"));
        assert!(estimate.insights[1].contains("phased delivery"));
        assert!(estimate.insights[2].starts_with("Market fluctuation range"));
    }
}
