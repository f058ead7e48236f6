//! Locale resolution and the two-pass template substitution engine.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::ResourceError;
use crate::host::{
    HostEnv,
    LocaleReporter,
};
use crate::language::Language;
use crate::loader;
use crate::locale;

/// Renders message templates against a set of [`Language`]s.
///
/// Rendering is total: a missing locale, key or parameter always degrades to
/// a defined fallback and never to an error. The only failure signal is
/// leftover `{%name}` markers or raw key text in the returned string.
pub struct Translator {
    /// Normalized locale code → language.
    languages: HashMap<String, Language>,
    /// Fallback when a locale or an individual key is unresolved.
    default_language: Option<Language>,
    /// Injected host collaborators.
    env: Arc<dyn HostEnv + Send + Sync>,
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("locales", &self.locale_codes())
            .field("default_language", &self.default_language.as_ref().map(Language::locale))
            .finish_non_exhaustive()
    }
}

impl Translator {
    /// Creates a translator owning the given languages.
    #[must_use]
    pub fn new(
        languages: impl IntoIterator<Item = Language>,
        default_language: Option<Language>,
        env: Arc<dyn HostEnv + Send + Sync>,
    ) -> Self {
        let languages = languages
            .into_iter()
            .map(|language| (language.locale().to_string(), language))
            .collect();
        Self { languages, default_language, env }
    }

    /// Loads every `<xxx>.ini` resource under `dir` and picks the default
    /// language by `default_locale`.
    pub fn from_dir(
        dir: &Path,
        default_locale: &str,
        env: Arc<dyn HostEnv + Send + Sync>,
    ) -> Result<Self, ResourceError> {
        let languages = loader::load_locale_dir(dir)?;
        let code = locale::normalize(default_locale);
        let default_language =
            languages.iter().find(|language| language.locale() == code).cloned();
        if default_language.is_none() {
            tracing::warn!("no resource found for default locale '{code}'");
        }
        Ok(Self::new(languages, default_language, env))
    }

    /// Resolves the language for a requested locale.
    ///
    /// A `None` locale means the host's current default. An unknown locale
    /// falls back to the default language; `None` as the terminal result
    /// means "render with raw substitution only".
    #[must_use]
    pub fn resolve_language(&self, requested: Option<&str>) -> Option<&Language> {
        let code = requested.map_or_else(|| self.env.current_locale(), str::to_owned);
        self.languages.get(&locale::normalize(&code)).or(self.default_language.as_ref())
    }

    /// Renders `template` for a locale.
    ///
    /// Translation tokens (`%key%`) are substituted first against the
    /// resolved language, then parameter tokens (`{%name}`) against the
    /// merged parameters. See [`HostEnv::default_params`] for the merge;
    /// caller-supplied parameters win on key collision.
    #[must_use]
    pub fn translate(
        &self,
        template: &str,
        params: &HashMap<String, String>,
        requested: Option<&str>,
    ) -> String {
        let merged = self.merged_params(params);

        let text = match self.resolve_language(requested) {
            Some(language) => self.substitute_translations(template, language),
            None => template.to_string(),
        };

        substitute_params(&text, &merged)
    }

    /// Renders `template` for an actor.
    ///
    /// The actor's reported locale is used when it reports one and the host
    /// has not forced a single locale; otherwise the host default applies.
    #[must_use]
    pub fn translate_for(
        &self,
        template: &str,
        params: &HashMap<String, String>,
        actor: Option<&dyn LocaleReporter>,
    ) -> String {
        let requested = match actor {
            Some(actor) if !self.env.is_locale_forced() => actor
                .locale_tag()
                .and_then(|tag| self.env.resolve_actor_locale(&tag)),
            _ => None,
        };
        self.translate(template, params, requested.as_deref())
    }

    /// All loaded languages, in locale order.
    #[must_use]
    pub fn languages(&self) -> Vec<&Language> {
        let mut languages: Vec<_> = self.languages.values().collect();
        languages.sort_by(|a, b| a.locale().cmp(b.locale()));
        languages
    }

    /// All loaded locale codes, sorted.
    #[must_use]
    pub fn locale_codes(&self) -> Vec<&str> {
        let mut codes: Vec<_> = self.languages.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    #[must_use]
    pub fn default_language(&self) -> Option<&Language> {
        self.default_language.as_ref()
    }

    pub fn set_default_language(&mut self, language: Option<Language>) {
        self.default_language = language;
    }

    /// Merges host default parameters with caller-supplied ones.
    /// Caller values win on key collision.
    fn merged_params(&self, params: &HashMap<String, String>) -> HashMap<String, String> {
        let mut merged = self.env.default_params();
        merged.extend(params.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    /// Translation-token pass: split on `%`, look up each fragment.
    ///
    /// Fallback chain per fragment: resolved language → default language →
    /// the fragment text itself. A `%` is reinserted only between two
    /// adjacent untranslated fragments, which reproduces literal `%`
    /// characters that never delimited a recognized token. A fragment whose
    /// translation equals its own key is indistinguishable from an
    /// untranslated one here; known edge case.
    fn substitute_translations(&self, template: &str, language: &Language) -> String {
        let mut out = String::with_capacity(template.len());
        let mut last_translated = false;

        for fragment in template.split('%') {
            let resolved = language
                .get(fragment)
                .or_else(|| {
                    self.default_language.as_ref().map(|default| default.get_or_key(fragment))
                })
                .unwrap_or(fragment);

            let translated = resolved != fragment;
            if !out.is_empty() && !translated && !last_translated {
                out.push('%');
            }
            last_translated = translated;
            out.push_str(resolved);
        }

        out
    }
}

/// Parameter-token pass: replaces `{%name}` tokens with parameter values.
///
/// Tokens are scanned once; every occurrence of a known token is replaced
/// literally, and substituted values are not re-scanned. Unknown tokens stay
/// verbatim as a data-quality signal.
fn substitute_params(text: &str, params: &HashMap<String, String>) -> String {
    let mut out = text.to_string();

    for name in param_token_names(text) {
        if let Some(value) = params.get(&name) {
            let token = format!("{{%{name}}}");
            out = out.replace(&token, value);
        }
    }

    out
}

/// Collects the distinct names of all `{%name}` tokens, in order of first
/// occurrence. A name is one or more ASCII alphanumerics followed by `}`.
fn param_token_names(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut rest = text;

    while let Some(pos) = rest.find("{%") {
        let Some(body) = rest.get(pos + 2..) else { break };

        let name: String =
            body.chars().take_while(char::is_ascii_alphanumeric).collect();
        let after_name = body.get(name.len()..).unwrap_or("");

        if !name.is_empty() && after_name.starts_with('}') {
            rest = after_name.get(1..).unwrap_or("");
            if !names.contains(&name) {
                names.push(name);
            }
        } else {
            rest = body;
        }
    }

    names
}
