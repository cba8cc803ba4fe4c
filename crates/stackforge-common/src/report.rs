//! Structured outcome records for the reporting surface.
//!
//! Every invocation produces exactly one [`Report`]: either a success record
//! carrying the operation's result data, or a failure record carrying the
//! error message. The CLI renders a report as human-readable text or as a
//! single machine-readable JSON record; the `succeeded` verdict decides the
//! process exit status.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Outcome record for one invocation.
///
/// A populated `issues` list with `succeeded == true` is a normal validation
/// result, not a failure; only `error` marks a failed invocation.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Whether the operation completed without a fatal error.
    pub succeeded: bool,
    /// Operation that produced this report (e.g. "new", "add", "validate").
    pub operation: String,
    /// Stack id involved, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    /// Service id involved, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// File path read or written, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Validation issues found; `Some(vec![])` means the check ran clean.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<String>>,
    /// Registered stacks, for listing operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacks: Option<Vec<StackInfo>>,
    /// Registered service ids, for listing operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,
    /// Error message when the operation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One registered stack in a listing report.
#[derive(Debug, Clone, Serialize)]
pub struct StackInfo {
    /// Stack id accepted by the catalog.
    pub id: String,
    /// Human-readable stack name.
    pub display_name: String,
    /// One-line stack description.
    pub description: String,
}

impl Report {
    /// Creates a success record for the given operation.
    #[must_use]
    pub fn success(operation: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            operation: operation.into(),
            stack: None,
            service: None,
            path: None,
            issues: None,
            stacks: None,
            services: None,
            error: None,
        }
    }

    /// Creates a failure record carrying the error message.
    #[must_use]
    pub fn failure(operation: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            error: Some(error.into()),
            ..Self::success(operation)
        }
    }

    /// Attaches the stack id.
    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Attaches the service id.
    #[must_use]
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Attaches the file path.
    #[must_use]
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Attaches a validation issue list (empty means clean).
    #[must_use]
    pub fn with_issues(mut self, issues: Vec<String>) -> Self {
        self.issues = Some(issues);
        self
    }

    /// Attaches listing data.
    #[must_use]
    pub fn with_listing(mut self, stacks: Vec<StackInfo>, services: Vec<String>) -> Self {
        self.stacks = Some(stacks);
        self.services = Some(services);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_report_serializes_minimal_record() {
        let report = Report::success("new").with_stack("mean").with_path("out.yml");
        let json = serde_json::to_string(&report).expect("should serialize");
        assert!(json.contains("\"succeeded\":true"), "got: {json}");
        assert!(json.contains("\"stack\":\"mean\""), "got: {json}");
        assert!(!json.contains("\"error\""), "got: {json}");
    }

    #[test]
    fn failure_report_carries_error_and_verdict() {
        let report = Report::failure("add", "unknown service \"ghost\"");
        let json = serde_json::to_string(&report).expect("should serialize");
        assert!(json.contains("\"succeeded\":false"), "got: {json}");
        assert!(json.contains("ghost"), "got: {json}");
    }

    #[test]
    fn empty_issue_list_survives_serialization() {
        let report = Report::success("validate").with_issues(Vec::new());
        let json = serde_json::to_string(&report).expect("should serialize");
        assert!(json.contains("\"issues\":[]"), "got: {json}");
    }
}
