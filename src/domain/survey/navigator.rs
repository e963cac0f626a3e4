//! Step navigation state machine for the multi-step form.
//!
//! The form is a linear sequence of N+2 steps: the instructions step, one
//! step per catalog question, and the final details step. Forward movement
//! is strictly sequential and gated on the current step's validity; there is
//! no jump-to-arbitrary-step operation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::question::questions;

/// The concrete kind of a form step.
///
/// Steps are dispatched by matching on this enum; each variant has exactly
/// one validation rule and one rendering path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "questionId")]
pub enum StepKind {
    /// Index 0. Always valid.
    Instructions,
    /// One step per question, carrying the 1-based question id.
    Question(u32),
    /// The terminal step. Its forward action submits instead of navigating.
    Details,
}

/// Tracks the current step, per-step validity and the completed-step set.
#[derive(Debug, Clone)]
pub struct StepNavigator {
    total_questions: usize,
    current_index: usize,
    completed: BTreeSet<usize>,
    validity: Vec<bool>,
}

impl StepNavigator {
    /// Creates a navigator positioned on the instructions step.
    pub fn new(total_questions: usize) -> Self {
        let mut validity = vec![false; total_questions + 2];
        // The instructions step carries no inputs.
        validity[0] = true;
        Self {
            total_questions,
            current_index: 0,
            completed: BTreeSet::new(),
            validity,
        }
    }

    /// Creates a navigator sized to the embedded question catalog.
    pub fn for_catalog() -> Self {
        Self::new(questions().len())
    }

    /// Total number of steps: instructions + questions + details.
    pub fn total_steps(&self) -> usize {
        self.total_questions + 2
    }

    /// 0-based index of the active step.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Kind of the active step.
    pub fn current_step(&self) -> StepKind {
        self.step_at(self.current_index)
            .expect("current index is always in range")
    }

    /// Kind of the step at `index`, if in range.
    pub fn step_at(&self, index: usize) -> Option<StepKind> {
        if index == 0 {
            Some(StepKind::Instructions)
        } else if index <= self.total_questions {
            Some(StepKind::Question(index as u32))
        } else if index == self.total_questions + 1 {
            Some(StepKind::Details)
        } else {
            None
        }
    }

    /// Records the validator's verdict for a step.
    ///
    /// The instructions step is implicitly always valid and cannot be
    /// invalidated. Out-of-range indices are ignored.
    pub fn set_validity(&mut self, index: usize, is_valid: bool) {
        if index == 0 || index >= self.validity.len() {
            return;
        }
        self.validity[index] = is_valid;
    }

    /// Validity of the active step.
    pub fn is_current_valid(&self) -> bool {
        self.validity[self.current_index]
    }

    /// True when a forward transition is available.
    pub fn can_go_next(&self) -> bool {
        self.current_index < self.total_steps() - 1 && self.is_current_valid()
    }

    /// True when a backward transition is available.
    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    /// True on the terminal details step, whose forward action is
    /// submission rather than navigation.
    pub fn is_last(&self) -> bool {
        self.current_index == self.total_steps() - 1
    }

    /// Attempts the `Next` transition.
    ///
    /// Permitted only while the active step is valid. On success the active
    /// step joins the completed set and the index advances, unless already
    /// on the last step. Returns whether the transition was taken.
    pub fn next(&mut self) -> bool {
        if !self.is_current_valid() {
            return false;
        }
        self.completed.insert(self.current_index);
        if self.current_index < self.total_steps() - 1 {
            self.current_index += 1;
        }
        true
    }

    /// Attempts the `Previous` transition.
    ///
    /// Never re-validates and never alters the completed set. Returns
    /// whether the transition was taken.
    pub fn previous(&mut self) -> bool {
        if self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Whether a step has ever been confirmed with `Next`.
    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    /// Number of steps confirmed so far.
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }
}
