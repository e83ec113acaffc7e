//! # repovet-types
//!
//! **Tier 1 (Core Types)**
//!
//! Data model for repository compliance reports. These types are the contract
//! between the rule engine, the fix pipeline, and any report consumer.
//!
//! ## What belongs here
//! * Category registry and per-category status
//! * Findings (errors, warnings) and recommendations
//! * Fixable issue catalog
//! * The validation report and its accounting rules
//!
//! ## What does NOT belong here
//! * Rule logic (use repovet-engine)
//! * Remediation content or disk writes (use repovet-fix)

mod category;
mod finding;
mod report;

pub use category::{Category, CategoryStatus};
pub use finding::{Finding, FixKind, FixableIssue};
pub use report::ValidationReport;
