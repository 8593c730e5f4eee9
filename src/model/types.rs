use crate::error::{PredictoError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Fixed catalog of selectable features. Feature strings outside this list
/// are ignored by the wizard.
pub const FEATURE_CATALOG: [&str; 10] = [
    "Authentication",
    "Admin Dashboard",
    "User Dashboard",
    "Real-time Chat",
    "Payment Gateway",
    "Analytics",
    "Push Notifications",
    "AI Automation",
    "API Integrations",
    "File Uploads",
];

/// Tech stacks offered on the wizard's third step. Descriptive only, no
/// effect on the estimate.
pub const TECH_STACKS: [&str; 8] = [
    "MERN",
    "MEAN",
    "Django",
    "Spring Boot",
    "Laravel",
    "Ruby on Rails",
    "Serverless / Firebase",
    "Custom Stack",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Web,
    Mobile,
    Ai,
    Ecommerce,
}

impl ProjectType {
    pub const ALL: [ProjectType; 4] = [
        ProjectType::Web,
        ProjectType::Mobile,
        ProjectType::Ai,
        ProjectType::Ecommerce,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Web => "Web App",
            ProjectType::Mobile => "Mobile App",
            ProjectType::Ai => "AI / ML System",
            ProjectType::Ecommerce => "E-commerce Platform",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectType::Web => write!(f, "web"),
            ProjectType::Mobile => write!(f, "mobile"),
            ProjectType::Ai => write!(f, "ai"),
            ProjectType::Ecommerce => write!(f, "ecommerce"),
        }
    }
}

impl FromStr for ProjectType {
    type Err = PredictoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "web" => Ok(ProjectType::Web),
            "mobile" => Ok(ProjectType::Mobile),
            "ai" | "ml" => Ok(ProjectType::Ai),
            "ecommerce" | "e-commerce" | "shop" => Ok(ProjectType::Ecommerce),
            _ => Err(PredictoError::Parse(format!("Invalid project type: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub const ALL: [Complexity; 3] = [Complexity::Low, Complexity::Medium, Complexity::High];

    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Low => "Low (Basic)",
            Complexity::Medium => "Medium (Standard)",
            Complexity::High => "High (Advanced)",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complexity::Low => write!(f, "low"),
            Complexity::Medium => write!(f, "medium"),
            Complexity::High => write!(f, "high"),
        }
    }
}

impl FromStr for Complexity {
    type Err = PredictoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "low" | "basic" => Ok(Complexity::Low),
            "medium" | "standard" => Ok(Complexity::Medium),
            "high" | "advanced" => Ok(Complexity::High),
            _ => Err(PredictoError::Parse(format!("Invalid complexity: {}", s))),
        }
    }
}

/// The optional flat-cost add-on services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addon {
    Cloud,
    Security,
    Analytics,
}

impl Addon {
    pub const ALL: [Addon; 3] = [Addon::Cloud, Addon::Security, Addon::Analytics];

    pub fn label(&self) -> &'static str {
        match self {
            Addon::Cloud => "Cloud Setup",
            Addon::Security => "Security Hardening",
            Addon::Analytics => "Analytics Dashboard",
        }
    }
}

impl fmt::Display for Addon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Addon::Cloud => write!(f, "cloud"),
            Addon::Security => write!(f, "security"),
            Addon::Analytics => write!(f, "analytics"),
        }
    }
}

impl FromStr for Addon {
    type Err = PredictoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "cloud" => Ok(Addon::Cloud),
            "security" => Ok(Addon::Security),
            "analytics" => Ok(Addon::Analytics),
            _ => Err(PredictoError::Parse(format!("Invalid add-on: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_type_roundtrip() {
        for pt in ProjectType::ALL {
            let parsed: ProjectType = pt.to_string().parse().unwrap();
            assert_eq!(parsed, pt);
        }
    }

    #[test]
    fn test_complexity_aliases() {
        assert_eq!("advanced".parse::<Complexity>().unwrap(), Complexity::High);
        assert!("extreme".parse::<Complexity>().is_err());
    }

    #[test]
    fn test_catalog_has_ten_features() {
        assert_eq!(FEATURE_CATALOG.len(), 10);
    }
}
