//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `wirebox_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "wirebox.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "wirebox";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "WIREBOX";

/// Separator for nested keys in environment variables (`WIREBOX_LOGGING__LEVEL`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "WIREBOX_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log file name stem used when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "wirebox";
