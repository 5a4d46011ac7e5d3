//! Studio configuration parsed from environment variables.

use canvas::doc::DEFAULT_PROJECT_NAME;

pub const DEFAULT_NOTIFICATION_CAPACITY: usize = 5;
pub const DEFAULT_REFRESH_AFTER_MUTATION: bool = true;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioConfig {
    /// Name used when a save is requested with a blank name.
    pub fallback_project_name: String,
    /// Most notifications kept before the oldest is dropped.
    pub notification_capacity: usize,
    /// Re-list projects after a successful save or delete.
    pub refresh_after_mutation: bool,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            fallback_project_name: DEFAULT_PROJECT_NAME.to_string(),
            notification_capacity: DEFAULT_NOTIFICATION_CAPACITY,
            refresh_after_mutation: DEFAULT_REFRESH_AFTER_MUTATION,
        }
    }
}

impl StudioConfig {
    /// Build config from environment variables. Every variable is optional;
    /// unparseable values fall back to the default.
    ///
    /// - `DESIGNCRAFT_FALLBACK_PROJECT_NAME`: default `My Design`
    /// - `DESIGNCRAFT_NOTIFICATION_CAPACITY`: default 5
    /// - `DESIGNCRAFT_REFRESH_AFTER_MUTATION`: `true` (default) or `false`
    #[must_use]
    pub fn from_env() -> Self {
        let fallback_project_name = std::env::var("DESIGNCRAFT_FALLBACK_PROJECT_NAME")
            .map(|v| v.trim().to_string())
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());
        Self {
            fallback_project_name,
            notification_capacity: env_parse("DESIGNCRAFT_NOTIFICATION_CAPACITY", DEFAULT_NOTIFICATION_CAPACITY),
            refresh_after_mutation: env_parse("DESIGNCRAFT_REFRESH_AFTER_MUTATION", DEFAULT_REFRESH_AFTER_MUTATION),
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
