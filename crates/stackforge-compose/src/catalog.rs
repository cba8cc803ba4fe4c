//! Immutable registries of predefined stacks and single-service fragments.
//!
//! Both registries are built once at first use and never mutated. Every
//! lookup hands out a deep copy (`Clone` on fully owned value types), so
//! callers may freely mutate the result without affecting the catalog or
//! other callers.

use std::sync::OnceLock;

use indexmap::IndexMap;
use stackforge_common::constants::COMPOSE_VERSION;
use stackforge_common::error::{Result, StackforgeError};

use crate::model::{Document, RestartPolicy, ServiceEntry};
use crate::value::Value;

/// Summary row for a registered stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackSummary {
    /// Id accepted by [`get_stack`]. Case-sensitive.
    pub id: &'static str,
    /// Human-readable stack name.
    pub display_name: &'static str,
    /// One-line description.
    pub description: &'static str,
}

/// A single-service catalog fragment: the entry under its id, plus the
/// named volumes the fragment declares.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceTemplate {
    /// Canonical (lowercase) service id used as the mapping key.
    pub id: String,
    /// The service entry itself.
    pub entry: ServiceEntry,
    /// Named volumes to declare alongside the entry, in order.
    pub volumes: Vec<String>,
}

struct StackEntry {
    id: &'static str,
    display_name: &'static str,
    description: &'static str,
    document: Document,
}

/// Lists registered stacks in registration order.
#[must_use]
pub fn list_stacks() -> Vec<StackSummary> {
    stack_registry()
        .iter()
        .map(|s| StackSummary {
            id: s.id,
            display_name: s.display_name,
            description: s.description,
        })
        .collect()
}

/// Returns a fresh copy of the named stack's document.
///
/// Stack id lookup is a case-sensitive exact match.
///
/// # Errors
///
/// Returns `UnknownStack`, carrying the full valid-id list, when `id` is
/// not registered.
pub fn get_stack(id: &str) -> Result<Document> {
    tracing::debug!(stack = id, "catalog stack lookup");
    stack_registry()
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.document.clone())
        .ok_or_else(|| StackforgeError::UnknownStack {
            id: id.to_string(),
            valid: stack_registry().iter().map(|s| s.id.to_string()).collect(),
        })
}

/// Lists registered service ids in registration order.
#[must_use]
pub fn list_services() -> Vec<String> {
    service_registry()
        .iter()
        .map(|t| t.id.clone())
        .collect()
}

/// Returns a fresh copy of the named single-service fragment.
///
/// Service id lookup is case-insensitive: `id` is lowercased before
/// matching.
///
/// # Errors
///
/// Returns `UnknownService`, carrying the full valid-id list, when `id` is
/// not registered.
pub fn get_service(id: &str) -> Result<ServiceTemplate> {
    tracing::debug!(service = id, "catalog service lookup");
    let needle = id.to_lowercase();
    service_registry()
        .iter()
        .find(|t| t.id == needle)
        .cloned()
        .ok_or_else(|| StackforgeError::UnknownService {
            id: id.to_string(),
            valid: list_services(),
        })
}

fn stack_registry() -> &'static [StackEntry] {
    static REGISTRY: OnceLock<Vec<StackEntry>> = OnceLock::new();
    REGISTRY.get_or_init(build_stacks)
}

fn service_registry() -> &'static [ServiceTemplate] {
    static REGISTRY: OnceLock<Vec<ServiceTemplate>> = OnceLock::new();
    REGISTRY.get_or_init(build_services)
}

fn env(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    let mut map = IndexMap::new();
    for (k, v) in pairs {
        let _ = map.insert((*k).to_string(), (*v).to_string());
    }
    map
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn document(services: Vec<(&str, ServiceEntry)>, volume_names: &[&str]) -> Document {
    let mut doc = Document::new(COMPOSE_VERSION);
    for (name, entry) in services {
        let _ = doc.services.insert(name.to_string(), entry);
    }
    for name in volume_names {
        let _ = doc.volumes.insert((*name).to_string(), Value::Null);
    }
    doc
}

#[allow(clippy::too_many_lines)]
fn build_stacks() -> Vec<StackEntry> {
    vec![
        StackEntry {
            id: "mean",
            display_name: "MEAN",
            description: "MongoDB, Node API, and nginx frontend",
            document: document(
                vec![
                    (
                        "mongo",
                        ServiceEntry {
                            image: "mongo:6".into(),
                            ports: strings(&["27017:27017"]),
                            volumes: strings(&["mongo_data:/data/db"]),
                            restart: Some(RestartPolicy::UnlessStopped),
                            ..ServiceEntry::default()
                        },
                    ),
                    (
                        "api",
                        ServiceEntry {
                            image: "node:20-alpine".into(),
                            ports: strings(&["3000:3000"]),
                            environment: env(&[
                                ("NODE_ENV", "production"),
                                ("MONGO_URL", "mongodb://mongo:27017/app"),
                            ]),
                            depends_on: strings(&["mongo"]),
                            restart: Some(RestartPolicy::UnlessStopped),
                            command: Some("node server.js".into()),
                            ..ServiceEntry::default()
                        },
                    ),
                    (
                        "frontend",
                        ServiceEntry {
                            image: "nginx:alpine".into(),
                            ports: strings(&["8080:80"]),
                            depends_on: strings(&["api"]),
                            restart: Some(RestartPolicy::UnlessStopped),
                            ..ServiceEntry::default()
                        },
                    ),
                ],
                &["mongo_data"],
            ),
        },
        StackEntry {
            id: "lamp",
            display_name: "LAMP",
            description: "MySQL, PHP with Apache, and phpMyAdmin",
            document: document(
                vec![
                    (
                        "mysql",
                        ServiceEntry {
                            image: "mysql:8".into(),
                            ports: strings(&["3306:3306"]),
                            environment: env(&[
                                ("MYSQL_ROOT_PASSWORD", "changeme"),
                                ("MYSQL_DATABASE", "app"),
                            ]),
                            volumes: strings(&["mysql_data:/var/lib/mysql"]),
                            restart: Some(RestartPolicy::Always),
                            ..ServiceEntry::default()
                        },
                    ),
                    (
                        "php",
                        ServiceEntry {
                            image: "php:8.3-apache".into(),
                            ports: strings(&["8080:80"]),
                            depends_on: strings(&["mysql"]),
                            restart: Some(RestartPolicy::Always),
                            ..ServiceEntry::default()
                        },
                    ),
                    (
                        "phpmyadmin",
                        ServiceEntry {
                            image: "phpmyadmin:latest".into(),
                            ports: strings(&["8081:80"]),
                            environment: env(&[("PMA_HOST", "mysql")]),
                            depends_on: strings(&["mysql"]),
                            ..ServiceEntry::default()
                        },
                    ),
                ],
                &["mysql_data"],
            ),
        },
        StackEntry {
            id: "wordpress",
            display_name: "WordPress",
            description: "WordPress with a MySQL database",
            document: document(
                vec![
                    (
                        "db",
                        ServiceEntry {
                            image: "mysql:8".into(),
                            environment: env(&[
                                ("MYSQL_ROOT_PASSWORD", "changeme"),
                                ("MYSQL_DATABASE", "wordpress"),
                                ("MYSQL_USER", "wordpress"),
                                ("MYSQL_PASSWORD", "wordpress"),
                            ]),
                            volumes: strings(&["db_data:/var/lib/mysql"]),
                            restart: Some(RestartPolicy::Always),
                            ..ServiceEntry::default()
                        },
                    ),
                    (
                        "wordpress",
                        ServiceEntry {
                            image: "wordpress:latest".into(),
                            ports: strings(&["8000:80"]),
                            environment: env(&[
                                ("WORDPRESS_DB_HOST", "db:3306"),
                                ("WORDPRESS_DB_USER", "wordpress"),
                                ("WORDPRESS_DB_PASSWORD", "wordpress"),
                            ]),
                            volumes: strings(&["wp_content:/var/www/html/wp-content"]),
                            depends_on: strings(&["db"]),
                            restart: Some(RestartPolicy::Always),
                            ..ServiceEntry::default()
                        },
                    ),
                ],
                &["db_data", "wp_content"],
            ),
        },
        StackEntry {
            id: "monitoring",
            display_name: "Monitoring",
            description: "Prometheus metrics store with Grafana dashboards",
            document: document(
                vec![
                    (
                        "prometheus",
                        ServiceEntry {
                            image: "prom/prometheus:latest".into(),
                            ports: strings(&["9090:9090"]),
                            volumes: strings(&["prometheus_data:/prometheus"]),
                            restart: Some(RestartPolicy::UnlessStopped),
                            ..ServiceEntry::default()
                        },
                    ),
                    (
                        "grafana",
                        ServiceEntry {
                            image: "grafana/grafana:latest".into(),
                            ports: strings(&["3001:3000"]),
                            environment: env(&[("GF_SECURITY_ADMIN_PASSWORD", "admin")]),
                            volumes: strings(&["grafana_data:/var/lib/grafana"]),
                            depends_on: strings(&["prometheus"]),
                            restart: Some(RestartPolicy::UnlessStopped),
                            ..ServiceEntry::default()
                        },
                    ),
                ],
                &["prometheus_data", "grafana_data"],
            ),
        },
    ]
}

fn build_services() -> Vec<ServiceTemplate> {
    vec![
        ServiceTemplate {
            id: "redis".into(),
            entry: ServiceEntry {
                image: "redis:7-alpine".into(),
                ports: strings(&["6379:6379"]),
                volumes: strings(&["redis_data:/data"]),
                restart: Some(RestartPolicy::UnlessStopped),
                ..ServiceEntry::default()
            },
            volumes: strings(&["redis_data"]),
        },
        ServiceTemplate {
            id: "nginx".into(),
            entry: ServiceEntry {
                image: "nginx:alpine".into(),
                ports: strings(&["80:80"]),
                restart: Some(RestartPolicy::UnlessStopped),
                ..ServiceEntry::default()
            },
            volumes: Vec::new(),
        },
        ServiceTemplate {
            id: "postgres".into(),
            entry: ServiceEntry {
                image: "postgres:16-alpine".into(),
                ports: strings(&["5432:5432"]),
                environment: env(&[("POSTGRES_PASSWORD", "changeme")]),
                volumes: strings(&["postgres_data:/var/lib/postgresql/data"]),
                restart: Some(RestartPolicy::UnlessStopped),
                ..ServiceEntry::default()
            },
            volumes: strings(&["postgres_data"]),
        },
        ServiceTemplate {
            id: "mysql".into(),
            entry: ServiceEntry {
                image: "mysql:8".into(),
                ports: strings(&["3306:3306"]),
                environment: env(&[("MYSQL_ROOT_PASSWORD", "changeme")]),
                volumes: strings(&["mysql_data:/var/lib/mysql"]),
                restart: Some(RestartPolicy::UnlessStopped),
                ..ServiceEntry::default()
            },
            volumes: strings(&["mysql_data"]),
        },
        ServiceTemplate {
            id: "mongo".into(),
            entry: ServiceEntry {
                image: "mongo:6".into(),
                ports: strings(&["27017:27017"]),
                volumes: strings(&["mongo_data:/data/db"]),
                restart: Some(RestartPolicy::UnlessStopped),
                ..ServiceEntry::default()
            },
            volumes: strings(&["mongo_data"]),
        },
        ServiceTemplate {
            id: "rabbitmq".into(),
            entry: ServiceEntry {
                image: "rabbitmq:3-management".into(),
                ports: strings(&["5672:5672", "15672:15672"]),
                volumes: strings(&["rabbitmq_data:/var/lib/rabbitmq"]),
                restart: Some(RestartPolicy::UnlessStopped),
                ..ServiceEntry::default()
            },
            volumes: strings(&["rabbitmq_data"]),
        },
    ]
}
