//! The wizard state machine: step sequencing, forward-transition gates, and
//! draft autosave.

mod session;

pub use session::{WizardSession, WizardStep};
