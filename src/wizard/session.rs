use crate::engine;
use crate::model::{
    Addon, Complexity, DocumentRef, EstimateResult, ProjectInput, ProjectType,
};
use crate::storage::DraftStore;

/// The four wizard steps, strictly linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    ProjectType,
    Details,
    TechAndRequirements,
    Results,
}

impl WizardStep {
    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::ProjectType => "Project Classification",
            WizardStep::Details => "Project Details",
            WizardStep::TechAndRequirements => "Tech Stack & Requirements",
            WizardStep::Results => "Estimate",
        }
    }

    /// 1-based position for the progress indicator.
    pub fn index(&self) -> usize {
        match self {
            WizardStep::ProjectType => 1,
            WizardStep::Details => 2,
            WizardStep::TechAndRequirements => 3,
            WizardStep::Results => 4,
        }
    }
}

/// One estimation session: owns the [`ProjectInput`] for its lifetime,
/// sequences the steps, and persists the draft on every field change.
///
/// Field mutators are the explicit change-notification contract: every
/// mutation goes through one of them, and each one saves the draft.
/// Persistence failures are logged and never interrupt the session.
pub struct WizardSession {
    input: ProjectInput,
    store: DraftStore,
    step: WizardStep,
    estimate: Option<EstimateResult>,
}

impl WizardSession {
    /// Start a session with an empty input.
    pub fn new(store: DraftStore) -> Self {
        Self {
            input: ProjectInput::default(),
            store,
            step: WizardStep::ProjectType,
            estimate: None,
        }
    }

    /// Start a session from the persisted draft, if any.
    pub fn restore(store: DraftStore) -> Self {
        let input = store.load();
        Self {
            input,
            store,
            step: WizardStep::ProjectType,
            estimate: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn input(&self) -> &ProjectInput {
        &self.input
    }

    pub fn estimate(&self) -> Option<&EstimateResult> {
        self.estimate.as_ref()
    }

    pub fn draft_store(&self) -> &DraftStore {
        &self.store
    }

    // ------------------------------------------------------------------
    // Field mutators (each persists the draft)
    // ------------------------------------------------------------------

    pub fn set_project_type(&mut self, project_type: ProjectType) {
        self.input.project_type = Some(project_type);
        self.autosave();
    }

    pub fn set_complexity(&mut self, complexity: Complexity) {
        self.input.complexity = Some(complexity);
        self.autosave();
    }

    pub fn set_team_size(&mut self, team_size: Option<u32>) {
        self.input.team_size = team_size;
        self.autosave();
    }

    pub fn set_duration_weeks(&mut self, duration_weeks: Option<u32>) {
        self.input.duration_weeks = duration_weeks;
        self.autosave();
    }

    pub fn set_location(&mut self, location: Option<String>) {
        self.input.location = location.filter(|l| !l.is_empty());
        self.autosave();
    }

    pub fn toggle_feature(&mut self, feature: &str) {
        self.input.toggle_feature(feature);
        self.autosave();
    }

    pub fn toggle_addon(&mut self, addon: Addon) {
        let enabled = self.input.addons.get(addon);
        self.input.addons.set(addon, !enabled);
        self.autosave();
    }

    pub fn set_tech_stack(&mut self, tech_stack: Option<String>) {
        self.input.tech_stack = tech_stack;
        self.autosave();
    }

    pub fn set_requirements(&mut self, requirements: Option<String>) {
        self.input.requirements = requirements.filter(|r| !r.is_empty());
        self.autosave();
    }

    pub fn attach_document(&mut self, document: DocumentRef) {
        self.input.documents.push(document);
        self.autosave();
    }

    fn autosave(&self) {
        if let Err(e) = self.store.save(&self.input) {
            tracing::warn!(error = %e, "Failed to autosave draft");
        }
    }

    // ------------------------------------------------------------------
    // Step transitions
    // ------------------------------------------------------------------

    /// Whether the forward transition from the current step is enabled.
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::ProjectType => self.input.has_project_type(),
            WizardStep::Details => self.input.has_details(),
            // "Generate Estimate" is unconditional.
            WizardStep::TechAndRequirements => true,
            WizardStep::Results => false,
        }
    }

    /// Move to the next step when the gate allows it. From the third step
    /// this runs the engine. Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        match self.step {
            WizardStep::ProjectType => self.step = WizardStep::Details,
            WizardStep::Details => self.step = WizardStep::TechAndRequirements,
            WizardStep::TechAndRequirements => return self.generate(),
            WizardStep::Results => return false,
        }
        true
    }

    /// Run the engine over the current input and move to the results step.
    /// Replaces any previous estimate. Only valid from the third step.
    pub fn generate(&mut self) -> bool {
        if self.step != WizardStep::TechAndRequirements {
            return false;
        }
        self.estimate = Some(engine::generate(&self.input));
        self.step = WizardStep::Results;
        true
    }

    /// Step back without touching entered fields. Disabled on the first
    /// step and on results (reset is the only way out of results).
    pub fn back(&mut self) -> bool {
        match self.step {
            WizardStep::Details => self.step = WizardStep::ProjectType,
            WizardStep::TechAndRequirements => self.step = WizardStep::Details,
            WizardStep::ProjectType | WizardStep::Results => return false,
        }
        true
    }

    /// Explicit restart from the results step: discards the estimate, the
    /// input, and the persisted draft.
    pub fn reset(&mut self) -> bool {
        if self.step != WizardStep::Results {
            return false;
        }
        self.input = ProjectInput::default();
        self.estimate = None;
        self.step = WizardStep::ProjectType;
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Failed to clear draft");
        }
        true
    }
}
