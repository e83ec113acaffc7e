//! The validation report: the complete output of one pass.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::{Category, CategoryStatus};
use crate::finding::{Finding, FixableIssue};

/// The complete, structured output of one validation pass.
///
/// Created fresh at the start of each pass and exclusively owned by it; holds
/// no reference to prior runs. Finding lists preserve insertion order, which
/// is rule evaluation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// True iff the pass recorded zero errors. Computed once by
    /// [`finalize`](Self::finalize); meaningless before that.
    pub is_valid: bool,

    /// Count of existence probes performed. Not deduplicated across rules.
    pub files_checked: u32,

    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub recommendations: Vec<String>,
    pub fixable_issues: Vec<FixableIssue>,

    /// Per-category pass/fail, keyed by every audited category.
    pub categories: BTreeMap<Category, CategoryStatus>,
}

impl ValidationReport {
    /// Fresh report with every audited category initially passed.
    pub fn new() -> Self {
        let categories = Category::AUDITED
            .iter()
            .map(|&c| (c, CategoryStatus::passed()))
            .collect();

        Self {
            is_valid: true,
            files_checked: 0,
            errors: Vec::new(),
            warnings: Vec::new(),
            recommendations: Vec::new(),
            fixable_issues: Vec::new(),
            categories,
        }
    }

    /// Record an error and fail its category.
    pub fn add_error(&mut self, finding: Finding) {
        self.fail_category(finding.category, finding.message.clone());
        self.errors.push(finding);
    }

    /// Record a warning. Warnings never affect category status or validity.
    pub fn add_warning(&mut self, finding: Finding) {
        self.warnings.push(finding);
    }

    /// Record a purely advisory recommendation.
    pub fn recommend(&mut self, text: impl Into<String>) {
        self.recommendations.push(text.into());
    }

    /// Record a fixable issue.
    pub fn add_fixable(&mut self, issue: FixableIssue) {
        self.fixable_issues.push(issue);
    }

    /// Count one existence probe.
    pub fn tally_check(&mut self) {
        self.files_checked += 1;
    }

    /// Flip a category to failed. Monotonic within a pass: the first failure
    /// pins the message, later calls are no-ops.
    pub fn fail_category(&mut self, category: Category, message: impl Into<String>) {
        let status = self
            .categories
            .entry(category)
            .or_insert_with(CategoryStatus::passed);
        if status.passed {
            *status = CategoryStatus::failed(message);
        }
    }

    /// Compute `is_valid` from the recorded errors. Called once, at the end
    /// of the pass.
    pub fn finalize(&mut self) {
        self.is_valid = self.errors.is_empty();
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}
