//! Merging catalog service fragments into fresh or existing documents.
//!
//! Fresh mode builds a typed single-service [`Document`]. Augment mode is a
//! best-effort textual append: the existing file's content is never parsed,
//! so its exact formatting and comments survive untouched. The trade-off is
//! that adding the same service twice can duplicate a volume declaration.

use std::fmt::Write as _;

use indexmap::IndexMap;
use stackforge_common::constants::COMPOSE_VERSION;
use stackforge_common::error::Result;

use crate::catalog;
use crate::emit;
use crate::model::Document;
use crate::value::Value;

const VOLUMES_MARKER: &str = "volumes:";

/// Builds a new document whose sole service is the named catalog fragment.
///
/// The fragment's declared volume names are added to the document's named
/// volumes, each mapped to absence, when the declared list is non-empty.
///
/// # Errors
///
/// Returns `UnknownService` when `service_id` is not registered. No file is
/// touched on failure.
pub fn fresh_document(service_id: &str) -> Result<Document> {
    let template = catalog::get_service(service_id)?;
    tracing::info!(service = %template.id, "building fresh single-service document");

    let mut doc = Document::new(COMPOSE_VERSION);
    let _ = doc.services.insert(template.id, template.entry);
    for name in template.volumes {
        let _ = doc.volumes.insert(name, Value::Null);
    }
    Ok(doc)
}

/// Appends the named catalog fragment to existing file text.
///
/// The existing content is kept verbatim apart from trailing-whitespace
/// trimming; the new service renders at one indentation level, as a
/// one-entry mapping fragment. Declared volumes follow: a new `volumes:`
/// section when the existing text has no such marker, bare name lines
/// otherwise. Already-declared volume names are not deduplicated.
///
/// # Errors
///
/// Returns `UnknownService` when `service_id` is not registered, before
/// any output is produced.
pub fn augment(existing: &str, service_id: &str) -> Result<String> {
    let template = catalog::get_service(service_id)?;
    tracing::info!(service = %template.id, "appending service to existing document");

    let mut fragment_map = IndexMap::new();
    let _ = fragment_map.insert(template.id, template.entry.to_value());
    let fragment = emit::emit(&Value::Map(fragment_map), 1);

    let mut out = existing.trim_end().to_string();
    out.push('\n');
    out.push_str(&fragment);
    out.push('\n');

    if !template.volumes.is_empty() {
        if !existing.contains(VOLUMES_MARKER) {
            out.push_str(VOLUMES_MARKER);
            out.push('\n');
        }
        for name in &template.volumes {
            // writeln! to a String cannot fail.
            let _ = writeln!(out, "  {name}:");
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackforge_common::error::StackforgeError;

    #[test]
    fn fresh_redis_document_has_single_service_and_volume() {
        let doc = fresh_document("redis").expect("redis should exist");
        let names: Vec<&String> = doc.services.keys().collect();
        assert_eq!(names, vec!["redis"]);
        assert_eq!(doc.volumes.len(), 1);
        assert_eq!(doc.volumes.get("redis_data"), Some(&Value::Null));
    }

    #[test]
    fn fresh_nginx_document_declares_no_volumes() {
        let doc = fresh_document("nginx").expect("nginx should exist");
        assert!(doc.volumes.is_empty());
        let text = emit::emit_document(&doc);
        assert!(!text.contains("volumes:"), "got: {text}");
    }

    #[test]
    fn fresh_document_rejects_unknown_service() {
        let err = fresh_document("ghost").expect_err("should fail");
        assert!(matches!(err, StackforgeError::UnknownService { .. }));
    }

    #[test]
    fn augment_appends_service_at_one_indent_level() {
        let existing = "version: \"3.8\"\nservices:\n  web:\n    image: nginx\n";
        let out = augment(existing, "nginx").expect("nginx should exist");
        assert!(out.starts_with(existing.trim_end()), "got: {out}");
        assert!(
            out.contains("\n  nginx:\n    image: \"nginx:alpine\""),
            "got: {out}"
        );
    }

    #[test]
    fn augment_trims_trailing_whitespace_before_appending() {
        let existing = "services:\n  web:\n    image: nginx\n\n\n   \n";
        let out = augment(existing, "nginx").expect("nginx should exist");
        assert!(out.contains("image: nginx\n  nginx:"), "got: {out}");
    }

    #[test]
    fn augment_adds_volumes_section_when_absent() {
        let existing = "services:\n  web:\n    image: nginx\n";
        let out = augment(existing, "redis").expect("redis should exist");
        assert!(out.contains("\nvolumes:\n  redis_data:\n"), "got: {out}");
    }

    #[test]
    fn augment_reuses_existing_volumes_section() {
        let existing = "services:\n  db:\n    image: mysql\nvolumes:\n  mysql_data:\n";
        let out = augment(existing, "redis").expect("redis should exist");
        // Only the pre-existing top-level marker; the indented `volumes:`
        // inside the redis service block does not count.
        let top_level = out.lines().filter(|line| *line == "volumes:").count();
        assert_eq!(top_level, 1, "got: {out}");
        assert!(out.ends_with("  redis_data:\n"), "got: {out}");
    }

    #[test]
    fn augment_without_volumes_never_adds_marker() {
        let existing = "services:\n  db:\n    image: mysql\nvolumes:\n  mysql_data:\n";
        let out = augment(existing, "nginx").expect("nginx should exist");
        assert_eq!(out.matches("volumes:").count(), 1, "got: {out}");
    }

    #[test]
    fn augment_tolerates_unparseable_content() {
        let existing = "!!! not a compose file at all";
        let out = augment(existing, "nginx").expect("nginx should exist");
        assert!(out.starts_with("!!! not a compose file at all\n"), "got: {out}");
        assert!(out.contains("  nginx:"), "got: {out}");
    }

    #[test]
    fn augment_rejects_unknown_service_before_producing_output() {
        let err = augment("services:\n", "ghost").expect_err("should fail");
        assert!(matches!(err, StackforgeError::UnknownService { .. }));
    }
}
