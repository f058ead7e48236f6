//! Host-environment abstraction.
//!
//! Everything the translator needs from its host — the current default
//! locale, the forced-locale flag, process-wide default parameters and
//! actor-locale conversion — is injected through [`HostEnv`] at construction
//! time, so translation is deterministic and testable without a running host.

use std::collections::HashMap;

use crate::config::HostConfig;
use crate::locale;

/// Host collaborators consumed by the [`Translator`](crate::Translator).
pub trait HostEnv {
    /// The locale used when a caller passes no explicit locale.
    fn current_locale(&self) -> String;

    /// When true, actors' own locales are ignored.
    fn is_locale_forced(&self) -> bool;

    /// Process-wide parameters merged into every translation.
    /// Caller-supplied parameters win on key collision.
    fn default_params(&self) -> HashMap<String, String>;

    /// Converts an actor-reported IETF tag to the internal locale code.
    fn resolve_actor_locale(&self, tag: &str) -> Option<String> {
        locale::convert_ietf(tag)
    }
}

/// An actor a message may be rendered for (e.g. a connected player).
///
/// `None` means the actor cannot report a locale; the translator then falls
/// back to the host's current default.
pub trait LocaleReporter {
    fn locale_tag(&self) -> Option<String>;
}

/// A [`HostEnv`] backed by a fixed [`HostConfig`].
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    config: HostConfig,
}

impl StaticEnv {
    #[must_use]
    pub fn new(config: HostConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &HostConfig {
        &self.config
    }
}

impl HostEnv for StaticEnv {
    fn current_locale(&self) -> String {
        self.config.default_locale.clone()
    }

    fn is_locale_forced(&self) -> bool {
        self.config.locale_forced
    }

    fn default_params(&self) -> HashMap<String, String> {
        self.config.default_params.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_static_env_reflects_config() {
        let config = HostConfig {
            default_locale: "jpn".to_string(),
            locale_forced: true,
            default_params: HashMap::from([("a".to_string(), "1".to_string())]),
        };
        let env = StaticEnv::new(config);

        assert_eq!(env.current_locale(), "jpn");
        assert!(env.is_locale_forced());
        assert_eq!(env.default_params().get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_default_actor_locale_resolution() {
        let env = StaticEnv::default();

        assert_eq!(env.resolve_actor_locale("en_US"), Some("eng".to_string()));
        assert_eq!(env.resolve_actor_locale("xx_XX"), None);
    }
}
