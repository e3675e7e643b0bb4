use fixlog_core::SessionId;

use crate::error::ConfigResult;

/// Port for per-session settings lookup
///
/// Mirrors what a FIX engine's session settings expose: a presence check
/// and a typed read. Callers check presence first; reading an absent
/// setting is an error.
pub trait SettingsSource: Send + Sync {
    /// Whether `name` is configured for `session` (directly or by default)
    fn is_setting(&self, session: &SessionId, name: &str) -> ConfigResult<bool>;

    /// Read `name` for `session` as a boolean
    fn get_bool(&self, session: &SessionId, name: &str) -> ConfigResult<bool>;
}
