//! Typed compose document model.
//!
//! Pure data plus lowering into the emission [`Value`] tree. Documents are
//! mutated only while they are being assembled; after emission they are
//! discarded.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Restart policy for a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestartPolicy {
    /// Never restart.
    No,
    /// Always restart.
    Always,
    /// Restart only after a failing exit.
    OnFailure,
    /// Restart unless explicitly stopped.
    UnlessStopped,
}

impl RestartPolicy {
    /// Returns the policy string written into compose files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::No => "no",
            Self::Always => "always",
            Self::OnFailure => "on-failure",
            Self::UnlessStopped => "unless-stopped",
        }
    }
}

impl fmt::Display for RestartPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One deployable unit within a document.
///
/// Only the fixed field subset used by the bundled templates is modeled;
/// this is not a general compose schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntry {
    /// Image identifier, e.g. `"redis:7-alpine"`. Required, non-empty.
    pub image: String,
    /// Port mappings in `"host:container"` form.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<String>,
    /// Environment variables, insertion order preserved.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub environment: IndexMap<String, String>,
    /// Volume mounts in `"name:mountpath[:mode]"` form.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,
    /// Names of services this one depends on. Each name should match a
    /// service key in the same document; see
    /// [`validate::check_references`](crate::validate::check_references).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
    /// Restart policy, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restart: Option<RestartPolicy>,
    /// Opaque shell command overriding the image default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl ServiceEntry {
    /// Lowers the entry to an emission value.
    ///
    /// Field order is fixed (image, ports, environment, volumes,
    /// depends_on, restart, command) and empty optional fields are elided.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut map = IndexMap::new();
        let _ = map.insert("image".to_string(), Value::from(self.image.clone()));
        if !self.ports.is_empty() {
            let ports = self.ports.iter().map(|p| Value::from(p.clone())).collect();
            let _ = map.insert("ports".to_string(), Value::Seq(ports));
        }
        if !self.environment.is_empty() {
            let env = self
                .environment
                .iter()
                .map(|(k, v)| (k.clone(), Value::from(v.clone())))
                .collect();
            let _ = map.insert("environment".to_string(), Value::Map(env));
        }
        if !self.volumes.is_empty() {
            let volumes = self.volumes.iter().map(|v| Value::from(v.clone())).collect();
            let _ = map.insert("volumes".to_string(), Value::Seq(volumes));
        }
        if !self.depends_on.is_empty() {
            let deps = self.depends_on.iter().map(|d| Value::from(d.clone())).collect();
            let _ = map.insert("depends_on".to_string(), Value::Seq(deps));
        }
        if let Some(policy) = self.restart {
            let _ = map.insert("restart".to_string(), Value::from(policy.as_str()));
        }
        if let Some(ref command) = self.command {
            let _ = map.insert("command".to_string(), Value::from(command.clone()));
        }
        Value::Map(map)
    }
}

/// Root compose document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Compose format version, e.g. `"3.8"`.
    pub version: String,
    /// Service name to entry, keys unique, insertion order preserved.
    pub services: IndexMap<String, ServiceEntry>,
    /// Named volume declarations: name to `Value::Null` or an options
    /// mapping. Every named volume a service mounts should appear here.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub volumes: IndexMap<String, Value>,
}

impl Document {
    /// Creates an empty document at the given format version.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            services: IndexMap::new(),
            volumes: IndexMap::new(),
        }
    }

    /// Lowers the document to an emission value: version, then services,
    /// then volumes (elided when empty).
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut root = IndexMap::new();
        let _ = root.insert("version".to_string(), Value::from(self.version.clone()));
        let services = self
            .services
            .iter()
            .map(|(name, entry)| (name.clone(), entry.to_value()))
            .collect();
        let _ = root.insert("services".to_string(), Value::Map(services));
        if !self.volumes.is_empty() {
            let _ = root.insert("volumes".to_string(), Value::Map(self.volumes.clone()));
        }
        Value::Map(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_keys(value: &Value) -> Vec<String> {
        match value {
            Value::Map(map) => map.keys().cloned().collect(),
            other => panic!("expected map, got {other:?}"),
        }
    }

    #[test]
    fn restart_policy_strings() {
        assert_eq!(RestartPolicy::No.as_str(), "no");
        assert_eq!(RestartPolicy::Always.as_str(), "always");
        assert_eq!(RestartPolicy::OnFailure.as_str(), "on-failure");
        assert_eq!(RestartPolicy::UnlessStopped.to_string(), "unless-stopped");
    }

    #[test]
    fn minimal_entry_lowers_to_image_only() {
        let entry = ServiceEntry {
            image: "nginx:alpine".into(),
            ..ServiceEntry::default()
        };
        assert_eq!(entry_keys(&entry.to_value()), vec!["image"]);
    }

    #[test]
    fn full_entry_preserves_field_order() {
        let mut environment = IndexMap::new();
        let _ = environment.insert("A".to_string(), "1".to_string());
        let entry = ServiceEntry {
            image: "redis:7".into(),
            ports: vec!["6379:6379".into()],
            environment,
            volumes: vec!["redis_data:/data".into()],
            depends_on: vec!["db".into()],
            restart: Some(RestartPolicy::Always),
            command: Some("redis-server --appendonly yes".into()),
        };
        assert_eq!(
            entry_keys(&entry.to_value()),
            vec![
                "image",
                "ports",
                "environment",
                "volumes",
                "depends_on",
                "restart",
                "command"
            ]
        );
    }

    #[test]
    fn document_elides_empty_volumes() {
        let mut doc = Document::new("3.8");
        let _ = doc.services.insert(
            "web".into(),
            ServiceEntry {
                image: "nginx".into(),
                ..ServiceEntry::default()
            },
        );
        assert_eq!(entry_keys(&doc.to_value()), vec!["version", "services"]);
    }

    #[test]
    fn document_lowers_volumes_when_present() {
        let mut doc = Document::new("3.8");
        let _ = doc.services.insert(
            "cache".into(),
            ServiceEntry {
                image: "redis".into(),
                ..ServiceEntry::default()
            },
        );
        let _ = doc.volumes.insert("redis_data".into(), Value::Null);
        assert_eq!(
            entry_keys(&doc.to_value()),
            vec!["version", "services", "volumes"]
        );
    }

    #[test]
    fn document_serializes_to_json() {
        let mut doc = Document::new("3.8");
        let _ = doc.services.insert(
            "web".into(),
            ServiceEntry {
                image: "nginx".into(),
                restart: Some(RestartPolicy::UnlessStopped),
                ..ServiceEntry::default()
            },
        );
        let json = serde_json::to_string(&doc).expect("should serialize");
        assert!(json.contains("\"restart\":\"unless-stopped\""), "got: {json}");
    }
}
