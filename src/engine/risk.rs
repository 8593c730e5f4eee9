use crate::model::{Complexity, ProjectInput};

pub const HIGH_COMPLEXITY_WEIGHT: u32 = 35;
pub const LARGE_TEAM_WEIGHT: u32 = 20;
pub const FEATURE_HEAVY_WEIGHT: u32 = 25;

/// Team sizes above this add [`LARGE_TEAM_WEIGHT`].
pub const LARGE_TEAM_THRESHOLD: u32 = 8;

/// Feature counts above this add [`FEATURE_HEAVY_WEIGHT`].
pub const FEATURE_HEAVY_THRESHOLD: usize = 8;

pub const RISK_CAP: u32 = 100;

/// Additive risk score over complexity, team size, and feature count,
/// capped at [`RISK_CAP`]. No floor is needed; the minimum is 0.
pub fn risk_score(input: &ProjectInput) -> u8 {
    let mut score = 0;
    if super::resolved_complexity(input) == Complexity::High {
        score += HIGH_COMPLEXITY_WEIGHT;
    }
    if super::resolved_team_size(input) > LARGE_TEAM_THRESHOLD {
        score += LARGE_TEAM_WEIGHT;
    }
    if input.features.len() > FEATURE_HEAVY_THRESHOLD {
        score += FEATURE_HEAVY_WEIGHT;
    }
    score.min(RISK_CAP) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FEATURE_CATALOG;

    #[test]
    fn test_calm_project_scores_zero() {
        let input = ProjectInput {
            complexity: Some(Complexity::Low),
            team_size: Some(3),
            ..Default::default()
        };
        assert_eq!(risk_score(&input), 0);
    }

    #[test]
    fn test_all_conditions_stack() {
        let mut input = ProjectInput {
            complexity: Some(Complexity::High),
            team_size: Some(10),
            ..Default::default()
        };
        for f in FEATURE_CATALOG.iter().take(9) {
            input.toggle_feature(f);
        }
        assert_eq!(
            u32::from(risk_score(&input)),
            HIGH_COMPLEXITY_WEIGHT + LARGE_TEAM_WEIGHT + FEATURE_HEAVY_WEIGHT
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        let input = ProjectInput {
            complexity: Some(Complexity::Medium),
            team_size: Some(LARGE_TEAM_THRESHOLD),
            ..Default::default()
        };
        // Exactly at the threshold does not trigger the weight.
        assert_eq!(risk_score(&input), 0);
    }

    #[test]
    fn test_score_within_bounds() {
        let mut input = ProjectInput {
            complexity: Some(Complexity::High),
            team_size: Some(50),
            ..Default::default()
        };
        for f in FEATURE_CATALOG {
            input.toggle_feature(f);
        }
        assert!(risk_score(&input) <= 100);
    }
}
