//! Data models for predicto.
//!
//! This module defines the core data structures:
//!
//! - [`ProjectInput`]: The project description collected across wizard steps
//! - [`EstimateResult`]: One committed estimate produced by the engine
//! - [`ProjectType`] / [`Complexity`] / [`Addon`]: The classification enums

mod estimate;
mod input;
mod types;

pub use estimate::{CostBreakdown, EstimateResult};
pub use input::{Addons, DocumentRef, ProjectInput};
pub use types::{Addon, Complexity, FEATURE_CATALOG, ProjectType, TECH_STACKS};
