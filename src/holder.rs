//! Composition helper for objects owning a [`Translator`].

use std::collections::HashMap;

use crate::host::LocaleReporter;
use crate::translator::Translator;

/// Delegating access to an owned [`Translator`].
///
/// Implementors store a `Translator` and expose the rendering entry points
/// through it; shared behavior comes from composition, not inheritance.
pub trait TranslatorHolder {
    /// The owned translator.
    fn translator(&self) -> &Translator;

    /// Delegates to [`Translator::translate`].
    fn translate(
        &self,
        template: &str,
        params: &HashMap<String, String>,
        locale: Option<&str>,
    ) -> String {
        self.translator().translate(template, params, locale)
    }

    /// Delegates to [`Translator::translate_for`].
    fn translate_for(
        &self,
        template: &str,
        params: &HashMap<String, String>,
        actor: Option<&dyn LocaleReporter>,
    ) -> String {
        self.translator().translate_for(template, params, actor)
    }
}
