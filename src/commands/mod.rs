//! Command implementations

pub mod report;

pub use report::{Report, ReportConfig, build_constraints, build_report, parse_feedback_entry};
