use crate::model::{Addon, Complexity, CostBreakdown, ProjectInput, ProjectType};

/// Base engagement rate per project type, in currency-agnostic units.
pub const BASE_RATE_WEB: u64 = 25_000;
pub const BASE_RATE_MOBILE: u64 = 40_000;
pub const BASE_RATE_AI: u64 = 75_000;
pub const BASE_RATE_ECOMMERCE: u64 = 60_000;

/// Flat cost per selected catalog feature.
pub const FEATURE_UNIT_COST: u64 = 3_500;

/// Flat cost per add-on service.
pub const ADDON_CLOUD_COST: u64 = 18_000;
pub const ADDON_SECURITY_COST: u64 = 23_000;
pub const ADDON_ANALYTICS_COST: u64 = 15_000;

/// Staffing cost per team member.
pub const PER_HEAD_COST: u64 = 9_000;

/// Share of the total attributed to each breakdown category. Contingency is
/// not listed; it takes the remainder so the breakdown sums exactly.
pub const DEVELOPMENT_SHARE: f64 = 0.55;
pub const DESIGN_SHARE: f64 = 0.15;
pub const TESTING_SHARE: f64 = 0.12;
pub const PROJECT_MANAGEMENT_SHARE: f64 = 0.10;

pub fn base_rate(project_type: ProjectType) -> u64 {
    match project_type {
        ProjectType::Web => BASE_RATE_WEB,
        ProjectType::Mobile => BASE_RATE_MOBILE,
        ProjectType::Ai => BASE_RATE_AI,
        ProjectType::Ecommerce => BASE_RATE_ECOMMERCE,
    }
}

pub fn complexity_factor(complexity: Complexity) -> f64 {
    match complexity {
        Complexity::Low => 1.0,
        Complexity::Medium => 1.45,
        Complexity::High => 2.2,
    }
}

pub fn addon_cost(addon: Addon) -> u64 {
    match addon {
        Addon::Cloud => ADDON_CLOUD_COST,
        Addon::Security => ADDON_SECURITY_COST,
        Addon::Analytics => ADDON_ANALYTICS_COST,
    }
}

/// Total cost plus its category breakdown.
///
/// Rounding is applied once, at the total. The breakdown rounds each share
/// independently and assigns the remainder to contingency, so
/// `breakdown.sum() == total` holds exactly.
pub fn estimate_cost(input: &ProjectInput) -> (u64, CostBreakdown) {
    let project_type = super::resolved_project_type(input);
    let complexity = super::resolved_complexity(input);
    let team_size = super::resolved_team_size(input);

    let feature_cost = input.features.len() as u64 * FEATURE_UNIT_COST;
    let addons_cost: u64 = Addon::ALL
        .iter()
        .filter(|a| input.addons.get(**a))
        .map(|a| addon_cost(*a))
        .sum();
    let team_cost = u64::from(team_size) * PER_HEAD_COST;

    let total = (base_rate(project_type) as f64 * complexity_factor(complexity)
        + (feature_cost + addons_cost + team_cost) as f64)
        .round() as u64;

    let development = (total as f64 * DEVELOPMENT_SHARE).round() as u64;
    let design = (total as f64 * DESIGN_SHARE).round() as u64;
    let testing = (total as f64 * TESTING_SHARE).round() as u64;
    let project_management = (total as f64 * PROJECT_MANAGEMENT_SHARE).round() as u64;
    let contingency = total - (development + design + testing + project_management);

    (
        total,
        CostBreakdown {
            development,
            design,
            testing,
            project_management,
            contingency,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Addons;

    fn input(project_type: ProjectType, complexity: Complexity, team_size: u32) -> ProjectInput {
        ProjectInput {
            project_type: Some(project_type),
            complexity: Some(complexity),
            team_size: Some(team_size),
            duration_weeks: Some(8),
            ..Default::default()
        }
    }

    #[test]
    fn test_low_web_is_base_plus_team_only() {
        let (total, _) = estimate_cost(&input(ProjectType::Web, Complexity::Low, 3));
        assert_eq!(total, BASE_RATE_WEB + 3 * PER_HEAD_COST);
    }

    #[test]
    fn test_addons_contribute_only_when_enabled() {
        let mut with_addons = input(ProjectType::Ai, Complexity::High, 10);
        with_addons.addons = Addons {
            cloud: true,
            security: true,
            analytics: false,
        };
        for f in crate::model::FEATURE_CATALOG.iter().take(9) {
            with_addons.toggle_feature(f);
        }

        let (total, _) = estimate_cost(&with_addons);
        let expected = (BASE_RATE_AI as f64 * 2.2).round() as u64
            + 9 * FEATURE_UNIT_COST
            + ADDON_CLOUD_COST
            + ADDON_SECURITY_COST
            + 10 * PER_HEAD_COST;
        assert_eq!(total, expected);
    }

    #[test]
    fn test_breakdown_sums_exactly() {
        for complexity in Complexity::ALL {
            for project_type in ProjectType::ALL {
                for team in [1, 7, 13] {
                    let (total, breakdown) = estimate_cost(&input(project_type, complexity, team));
                    assert_eq!(breakdown.sum(), total);
                }
            }
        }
    }
}
