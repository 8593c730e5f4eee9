use crate::model::{Complexity, ProjectInput};

pub fn timeline_factor(complexity: Complexity) -> f64 {
    match complexity {
        Complexity::Low => 1.0,
        Complexity::Medium => 1.2,
        Complexity::High => 1.45,
    }
}

/// Projected delivery time in weeks. All factors are >= 1.0, so the result
/// never undercuts the requested duration.
pub fn timeline_weeks(input: &ProjectInput) -> u32 {
    let duration = super::resolved_duration_weeks(input);
    let factor = timeline_factor(super::resolved_complexity(input));
    (f64::from(duration) * factor).ceil() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(duration_weeks: u32, complexity: Complexity) -> ProjectInput {
        ProjectInput {
            duration_weeks: Some(duration_weeks),
            complexity: Some(complexity),
            ..Default::default()
        }
    }

    #[test]
    fn test_low_complexity_is_identity() {
        assert_eq!(timeline_weeks(&input(6, Complexity::Low)), 6);
    }

    #[test]
    fn test_high_complexity_rounds_up() {
        // ceil(10 * 1.45) = 15
        assert_eq!(timeline_weeks(&input(10, Complexity::High)), 15);
    }

    #[test]
    fn test_never_shorter_than_requested() {
        for weeks in [1, 2, 7, 11, 52] {
            for complexity in Complexity::ALL {
                assert!(timeline_weeks(&input(weeks, complexity)) >= weeks);
            }
        }
    }
}
