//! Calculator session state
//!
//! Mirrors the input wizard: edits merge into a draft, steps advance only
//! when clean, submit validates everything and holds the computed plan until
//! the draft changes or the user asks to recalculate.

use crate::errors::{CalcError, ValidationErrors};
use crate::models::{ProfileDraft, ProfileUpdate, UserProfile};
use crate::planner::calculate_plan;
use crate::types::NutritionPlan;
use crate::validation::{validate_all, validate_step, WizardStep};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorSession {
    draft: ProfileDraft,
    step: WizardStep,
    errors: ValidationErrors,
    plan: Option<NutritionPlan>,
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing draft, on the first step
    pub fn with_draft(draft: ProfileDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Errors from the last step check or submit
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// The plan from the last successful submit, if still current
    pub fn plan(&self) -> Option<&NutritionPlan> {
        self.plan.as_ref()
    }

    pub fn has_results(&self) -> bool {
        self.plan.is_some()
    }

    /// Merge one edit into the draft; any held plan is discarded
    pub fn update(&mut self, update: ProfileUpdate) {
        debug!(field = %update.field(), "Profile draft updated");
        self.draft.apply(update);
        self.plan = None;
    }

    pub fn update_all(&mut self, updates: impl IntoIterator<Item = ProfileUpdate>) {
        for update in updates {
            self.update(update);
        }
    }

    /// Validate the current step and advance when it is clean
    ///
    /// Returns the step now shown. On the last step this only validates.
    pub fn next_step(&mut self) -> Result<WizardStep, ValidationErrors> {
        let errors = validate_step(self.step, &self.draft);
        if !errors.is_empty() {
            debug!(step = self.step.number(), errors = errors.len(), "Step validation failed");
            self.errors = errors.clone();
            return Err(errors);
        }

        self.errors = ValidationErrors::new();
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Go back one step without validating
    pub fn prev_step(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Validate every step, finalize the draft and compute the plan
    pub fn submit(&mut self) -> Result<&NutritionPlan, CalcError> {
        let errors = validate_all(&self.draft);
        if !errors.is_empty() {
            debug!(errors = errors.len(), "Submit rejected");
            self.errors = errors.clone();
            return Err(errors.into());
        }
        self.errors = ValidationErrors::new();

        let profile: UserProfile = self.draft.finalize()?;
        let plan = calculate_plan(&profile)?;
        info!(
            maintenance_calories = plan.maintenance_calories,
            target_calories = plan.macros.calories,
            "Plan ready"
        );
        Ok(self.plan.insert(plan))
    }

    /// Discard the held plan and return to the form, keeping the draft
    pub fn recalculate(&mut self) {
        self.plan = None;
    }
}
