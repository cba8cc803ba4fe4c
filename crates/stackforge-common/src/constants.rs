//! System-wide constants and defaults.

/// Compose format version written into every generated document.
pub const COMPOSE_VERSION: &str = "3.8";

/// Default file name for generated and augmented compose files.
pub const DEFAULT_COMPOSE_FILE: &str = "docker-compose.yml";
