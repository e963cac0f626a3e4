//! Point allocation value object and the survey's validation rules.
//!
//! Every question asks the respondent to distribute exactly 100 points
//! across four options, twice: once for the organisation's current state and
//! once for its aspirational state. An allocation is acceptable when the
//! points total 100 and no two assigned (non-zero) options carry the same
//! value. Multiple options left at zero are fine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Points assigned to the four options of a single question state.
///
/// Wire names stay upper-case (`A`..`D`) to match the stored JSON shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointAllocation {
    #[serde(rename = "A")]
    pub a: u32,
    #[serde(rename = "B")]
    pub b: u32,
    #[serde(rename = "C")]
    pub c: u32,
    #[serde(rename = "D")]
    pub d: u32,
}

impl PointAllocation {
    pub fn new(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self { a, b, c, d }
    }

    /// Option values in A, B, C, D order.
    pub fn values(&self) -> [u32; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Sum of all four options.
    pub fn total(&self) -> u32 {
        self.values().iter().sum()
    }

    /// True when two or more non-zero options carry the same value.
    ///
    /// Zero-zero ties are permitted; the rule only forbids ties among
    /// options the respondent actually assigned points to.
    pub fn has_equal_non_zero(&self) -> bool {
        let values = self.values();
        for i in 0..values.len() {
            for j in (i + 1)..values.len() {
                if values[i] == values[j] && values[i] > 0 {
                    return true;
                }
            }
        }
        false
    }

    /// Checks both allocation rules.
    pub fn validate(&self) -> Result<(), AllocationViolation> {
        let total = self.total();
        if total != 100 {
            return Err(AllocationViolation::TotalNot100 { total });
        }
        if self.has_equal_non_zero() {
            return Err(AllocationViolation::EqualNonZero);
        }
        Ok(())
    }

    /// True when the allocation satisfies both rules.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Why a single allocation fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocationViolation {
    #[error("points total {total}, expected exactly 100")]
    TotalNot100 { total: u32 },

    #[error("two or more assigned options carry equal points")]
    EqualNonZero,
}

/// Why a question step (current + aspirational pair) fails validation.
///
/// Variants are ordered by reporting priority: totals are checked first
/// across both states, then equal points in the current state, then equal
/// points in the aspirational state. The display strings are the exact
/// messages surfaced to the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepViolation {
    #[error("Please ensure both Current and Aspirational states total exactly 100 points each.")]
    TotalsNot100,

    #[error("Current State: Do not assign equal points to any of the four options.")]
    CurrentEqualPoints,

    #[error("Aspirational State: Do not assign equal points to any of the four options.")]
    AspirationalEqualPoints,
}

/// Validates a question step: both states must independently satisfy both
/// allocation rules. Returns the highest-priority violation.
pub fn validate_question_step(
    current: &PointAllocation,
    aspirational: &PointAllocation,
) -> Result<(), StepViolation> {
    if current.total() != 100 || aspirational.total() != 100 {
        return Err(StepViolation::TotalsNot100);
    }
    if current.has_equal_non_zero() {
        return Err(StepViolation::CurrentEqualPoints);
    }
    if aspirational.has_equal_non_zero() {
        return Err(StepViolation::AspirationalEqualPoints);
    }
    Ok(())
}
