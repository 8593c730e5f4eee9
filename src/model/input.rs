use super::types::{Addon, Complexity, FEATURE_CATALOG, ProjectType};
use serde::{Deserialize, Serialize};

/// Metadata for a document attached on the wizard's third step. File content
/// is never read by the estimator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentRef {
    pub name: String,

    #[serde(default)]
    pub size_bytes: u64,
}

/// Add-on service selections with a fixed flat cost each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Addons {
    #[serde(default)]
    pub cloud: bool,

    #[serde(default)]
    pub security: bool,

    #[serde(default)]
    pub analytics: bool,
}

impl Addons {
    pub fn get(&self, addon: Addon) -> bool {
        match addon {
            Addon::Cloud => self.cloud,
            Addon::Security => self.security,
            Addon::Analytics => self.analytics,
        }
    }

    pub fn set(&mut self, addon: Addon, enabled: bool) {
        match addon {
            Addon::Cloud => self.cloud = enabled,
            Addon::Security => self.security = enabled,
            Addon::Analytics => self.analytics = enabled,
        }
    }
}

/// The in-progress project description collected across the wizard steps.
///
/// Every field is optional or defaulted so any partial draft deserializes
/// cleanly. Unknown keys in persisted drafts are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Complexity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_size: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_weeks: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,

    #[serde(default)]
    pub addons: Addons,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<DocumentRef>,
}

impl ProjectInput {
    /// Toggle a catalog feature. Features outside [`FEATURE_CATALOG`] are
    /// ignored. Selection order is normalized to catalog order so identical
    /// selections always serialize identically.
    pub fn toggle_feature(&mut self, feature: &str) {
        if !FEATURE_CATALOG.contains(&feature) {
            tracing::warn!(feature, "Ignoring unknown feature");
            return;
        }
        if let Some(pos) = self.features.iter().position(|f| f == feature) {
            self.features.remove(pos);
        } else {
            self.features.push(feature.to_string());
            self.features
                .sort_by_key(|f| FEATURE_CATALOG.iter().position(|c| c == f));
        }
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }

    /// True once step 1 is satisfied.
    pub fn has_project_type(&self) -> bool {
        self.project_type.is_some()
    }

    /// True once step 2 is satisfied: complexity set, team size and duration
    /// present and positive.
    pub fn has_details(&self) -> bool {
        self.complexity.is_some()
            && self.team_size.is_some_and(|n| n > 0)
            && self.duration_weeks.is_some_and(|n| n > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_draft_deserializes() {
        let input: ProjectInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input, ProjectInput::default());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let input: ProjectInput =
            serde_json::from_str(r#"{"projectColor": "mauve", "complexity": "high"}"#).unwrap();
        assert_eq!(input.complexity, Some(Complexity::High));
    }

    #[test]
    fn test_toggle_feature_roundtrip() {
        let mut input = ProjectInput::default();
        input.toggle_feature("Analytics");
        assert!(input.has_feature("Analytics"));
        input.toggle_feature("Analytics");
        assert!(!input.has_feature("Analytics"));
    }

    #[test]
    fn test_unknown_feature_ignored() {
        let mut input = ProjectInput::default();
        input.toggle_feature("Blockchain Synergy");
        assert!(input.features.is_empty());
    }

    #[test]
    fn test_feature_order_is_catalog_order() {
        let mut input = ProjectInput::default();
        input.toggle_feature("API Integrations");
        input.toggle_feature("Authentication");
        assert_eq!(input.features, vec!["Authentication", "API Integrations"]);
    }

    #[test]
    fn test_details_gate_requires_positive_numbers() {
        let mut input = ProjectInput {
            complexity: Some(Complexity::Low),
            team_size: Some(0),
            duration_weeks: Some(6),
            ..Default::default()
        };
        assert!(!input.has_details());
        input.team_size = Some(3);
        assert!(input.has_details());
    }
}
