use crate::model::{Complexity, ProjectInput, ProjectType};

pub const SOLUTION_ARCHITECT: &str = "Solution Architect";
pub const AI_RESEARCHER: &str = "AI Researcher";

/// Base role list per project type, in display order.
pub fn base_roles(project_type: ProjectType) -> &'static [&'static str] {
    match project_type {
        ProjectType::Web => &["Frontend Developer", "Backend Developer", "QA Engineer"],
        ProjectType::Mobile => &["Mobile Developer", "API Developer", "QA Engineer"],
        ProjectType::Ai => &["ML Engineer", "Data Scientist", "Backend Engineer"],
        ProjectType::Ecommerce => &["Frontend Developer", "Backend Developer", "DevOps", "QA"],
    }
}

/// Recommended team composition. Appends specialist roles for high
/// complexity and for non-trivial AI projects; never produces duplicates.
pub fn team_structure(input: &ProjectInput) -> Vec<String> {
    let project_type = super::resolved_project_type(input);
    let complexity = super::resolved_complexity(input);

    let mut team: Vec<String> = base_roles(project_type)
        .iter()
        .map(|r| r.to_string())
        .collect();

    let mut append = |role: &str| {
        if !team.iter().any(|r| r == role) {
            team.push(role.to_string());
        }
    };

    if complexity == Complexity::High {
        append(SOLUTION_ARCHITECT);
    }
    if project_type == ProjectType::Ai && complexity != Complexity::Low {
        append(AI_RESEARCHER);
    }

    team
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(project_type: ProjectType, complexity: Complexity) -> ProjectInput {
        ProjectInput {
            project_type: Some(project_type),
            complexity: Some(complexity),
            team_size: Some(4),
            duration_weeks: Some(8),
            ..Default::default()
        }
    }

    #[test]
    fn test_low_web_is_unmodified_base() {
        let team = team_structure(&input(ProjectType::Web, Complexity::Low));
        assert_eq!(team, base_roles(ProjectType::Web));
    }

    #[test]
    fn test_high_complexity_adds_architect() {
        let team = team_structure(&input(ProjectType::Mobile, Complexity::High));
        assert_eq!(team.last().map(String::as_str), Some(SOLUTION_ARCHITECT));
    }

    #[test]
    fn test_ai_researcher_gated_on_complexity() {
        let low = team_structure(&input(ProjectType::Ai, Complexity::Low));
        assert!(!low.iter().any(|r| r == AI_RESEARCHER));

        let medium = team_structure(&input(ProjectType::Ai, Complexity::Medium));
        assert!(medium.iter().any(|r| r == AI_RESEARCHER));
    }

    #[test]
    fn test_high_ai_gets_both_specialists_in_order() {
        let team = team_structure(&input(ProjectType::Ai, Complexity::High));
        let tail: Vec<&str> = team.iter().map(String::as_str).collect();
        assert_eq!(
            tail[tail.len() - 2..].to_vec(),
            vec![SOLUTION_ARCHITECT, AI_RESEARCHER]
        );
    }

    #[test]
    fn test_no_duplicate_roles() {
        for project_type in ProjectType::ALL {
            for complexity in Complexity::ALL {
                let team = team_structure(&input(project_type, complexity));
                let mut deduped = team.clone();
                deduped.dedup();
                assert_eq!(team.len(), deduped.len());
            }
        }
    }
}
