//! Project-wide constants.

use std::time::Duration;

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name the assistant introduces itself with.
pub const ASSISTANT_NAME: &str = "Iris";

/// Leading words that address the assistant and are stripped before matching.
pub const WAKE_WORDS: &[&str] = &["iris", "alexa"];

/// Default bind host for `iris --serve`.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port for `iris --serve`, overridden by `PORT`.
pub const DEFAULT_PORT: u16 = 5000;

/// How long a single provider lookup may take before it is abandoned.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(5);

/// Upper bound on alternatives listed for an ambiguous lookup.
pub const MAX_ALTERNATIVES: usize = 5;

/// Upper bound on track matches appended to a music reply.
pub const MAX_TRACKS: usize = 5;

/// Printed by the CLI when invoked without a command.
pub const NO_COMMAND: &str = "No command provided";

/// User agent sent to every provider. Wikipedia rejects anonymous clients.
pub fn default_user_agent() -> String {
    format!("iris/{VERSION} (+{REPO})")
}
