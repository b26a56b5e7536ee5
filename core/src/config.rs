//! Runner configuration.
//!
//! Controls how [`run_with`](crate::run_with) reports outcomes. Hosts can
//! keep the defaults or load the settings from JSON.
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "usage_exit_code": 1,
//!   "runtime_exit_code": 2,
//!   "help_on_error": true
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Exit status for a usage or validation failure.
pub const DEFAULT_USAGE_EXIT_CODE: u8 = 1;

/// Exit status for a failure raised while running the command.
pub const DEFAULT_RUNTIME_EXIT_CODE: u8 = 2;

/// Settings for [`run_with`](crate::run_with).
///
/// # Examples
///
/// ```
/// use argslot_core::RunConfig;
///
/// let config: RunConfig = serde_json::from_str(r#"{"runtime_exit_code": 70}"#).unwrap();
/// assert_eq!(config.usage_exit_code, 1);
/// assert_eq!(config.runtime_exit_code, 70);
/// assert!(config.help_on_error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Status returned when parsing or validation fails.
    pub usage_exit_code: u8,
    /// Status returned when [`Command::run`](crate::Command::run) fails.
    pub runtime_exit_code: u8,
    /// Print the help text after a usage error message.
    pub help_on_error: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            usage_exit_code: DEFAULT_USAGE_EXIT_CODE,
            runtime_exit_code: DEFAULT_RUNTIME_EXIT_CODE,
            help_on_error: true,
        }
    }
}
