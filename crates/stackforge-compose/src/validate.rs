//! Structural validation of compose documents.
//!
//! [`validate`] runs shallow checks over raw text only and never parses it;
//! a populated issue list is a normal result, not an error.
//! [`check_references`] is the deeper, opt-in pass over a typed
//! [`Document`] covering the advisory referential-integrity invariants.

use crate::model::Document;

const SERVICES_MARKER: &str = "services:";
const VERSION_MARKER: &str = "version:";

/// Runs all shallow structural checks over raw document text.
///
/// Checks are independent and always all run:
/// 1. Missing top-level `services:` marker anywhere in the text.
/// 2. A literal tab character, one issue per offending line with its
///    1-based line number.
/// 3. Missing top-level `version:` marker (advisory).
///
/// Returns one message per finding; the document is valid iff the list is
/// empty.
#[must_use]
pub fn validate(raw: &str) -> Vec<String> {
    tracing::debug!(bytes = raw.len(), "validating raw document text");
    let mut issues = Vec::new();

    if !raw.contains(SERVICES_MARKER) {
        issues.push("missing top-level \"services\" section".to_string());
    }

    for (idx, line) in raw.lines().enumerate() {
        if line.contains('\t') {
            issues.push(format!(
                "line {}: tab character found; indent with spaces",
                idx + 1
            ));
        }
    }

    if !raw.contains(VERSION_MARKER) {
        issues.push("missing top-level \"version\" key (advisory)".to_string());
    }

    issues
}

/// Reports referential-integrity problems in a typed document.
///
/// Covers the two advisory invariants: every `depends_on` name must match a
/// service key in the same document, and every named volume a service
/// mounts should be declared under the document's `volumes`. Bind mounts
/// (paths starting with `/` or `.`) are skipped.
#[must_use]
pub fn check_references(doc: &Document) -> Vec<String> {
    let mut issues = Vec::new();

    for (name, entry) in &doc.services {
        for dep in &entry.depends_on {
            if !doc.services.contains_key(dep) {
                issues.push(format!(
                    "service \"{name}\" depends on undefined service \"{dep}\""
                ));
            }
        }
        for mount in &entry.volumes {
            if mount.starts_with('/') || mount.starts_with('.') {
                continue;
            }
            let volume = mount.split(':').next().unwrap_or(mount);
            if !doc.volumes.contains_key(volume) {
                issues.push(format!(
                    "service \"{name}\" mounts undeclared volume \"{volume}\""
                ));
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ServiceEntry;
    use crate::value::Value;

    const GOOD: &str = "version: \"3.8\"\nservices:\n  web:\n    image: nginx\n";

    #[test]
    fn clean_document_yields_no_issues() {
        assert!(validate(GOOD).is_empty());
    }

    #[test]
    fn missing_services_section_is_reported() {
        let issues = validate("version: \"3.8\"\n");
        assert!(!issues.is_empty());
        assert!(issues[0].contains("services"), "got: {issues:?}");
    }

    #[test]
    fn tab_issue_carries_one_based_line_number() {
        let raw = "version: \"3.8\"\nservices:\n\tweb:\n";
        let issues = validate(raw);
        assert_eq!(issues.len(), 1, "got: {issues:?}");
        assert!(issues[0].contains("line 3"), "got: {issues:?}");
    }

    #[test]
    fn one_issue_per_tabbed_line() {
        let raw = "services:\n\ta:\n\tb:\nversion: x\n";
        let issues = validate(raw);
        assert_eq!(issues.len(), 2, "got: {issues:?}");
        assert!(issues[0].contains("line 2"));
        assert!(issues[1].contains("line 3"));
    }

    #[test]
    fn missing_version_is_advisory_issue() {
        let issues = validate("services:\n  web:\n    image: nginx\n");
        assert_eq!(issues.len(), 1, "got: {issues:?}");
        assert!(issues[0].contains("version"), "got: {issues:?}");
    }

    #[test]
    fn all_checks_run_without_short_circuiting() {
        let issues = validate("\tgarbage\n");
        assert_eq!(issues.len(), 3, "got: {issues:?}");
    }

    #[test]
    fn reference_check_accepts_consistent_document() {
        let mut doc = Document::new("3.8");
        let _ = doc.services.insert(
            "db".into(),
            ServiceEntry {
                image: "postgres".into(),
                volumes: vec!["db_data:/var/lib/postgresql/data".into()],
                ..ServiceEntry::default()
            },
        );
        let _ = doc.services.insert(
            "api".into(),
            ServiceEntry {
                image: "api".into(),
                depends_on: vec!["db".into()],
                ..ServiceEntry::default()
            },
        );
        let _ = doc.volumes.insert("db_data".into(), Value::Null);
        assert!(check_references(&doc).is_empty());
    }

    #[test]
    fn reference_check_reports_undefined_dependency() {
        let mut doc = Document::new("3.8");
        let _ = doc.services.insert(
            "api".into(),
            ServiceEntry {
                image: "api".into(),
                depends_on: vec!["ghost".into()],
                ..ServiceEntry::default()
            },
        );
        let issues = check_references(&doc);
        assert_eq!(issues.len(), 1, "got: {issues:?}");
        assert!(issues[0].contains("ghost"), "got: {issues:?}");
    }

    #[test]
    fn reference_check_reports_undeclared_volume() {
        let mut doc = Document::new("3.8");
        let _ = doc.services.insert(
            "cache".into(),
            ServiceEntry {
                image: "redis".into(),
                volumes: vec!["redis_data:/data".into()],
                ..ServiceEntry::default()
            },
        );
        let issues = check_references(&doc);
        assert_eq!(issues.len(), 1, "got: {issues:?}");
        assert!(issues[0].contains("redis_data"), "got: {issues:?}");
    }

    #[test]
    fn reference_check_skips_bind_mounts() {
        let mut doc = Document::new("3.8");
        let _ = doc.services.insert(
            "web".into(),
            ServiceEntry {
                image: "nginx".into(),
                volumes: vec!["/etc/nginx:/etc/nginx:ro".into(), "./html:/usr/share/nginx/html".into()],
                ..ServiceEntry::default()
            },
        );
        assert!(check_references(&doc).is_empty());
    }
}
