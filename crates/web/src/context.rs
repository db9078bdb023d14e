//! Per-request application context: active locale plus translation lookup.

use std::sync::Arc;

use crate::i18n::{Locale, Translations};

/// Immutable view context handed to every page and view builder.
///
/// Switching language produces a new context; the shared tables are never mutated.
#[derive(Debug, Clone)]
pub struct AppContext {
    locale: Locale,
    translations: Arc<Translations>,
}

impl AppContext {
    pub fn new(locale: Locale, translations: Arc<Translations>) -> Self {
        Self {
            locale,
            translations,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            locale,
            translations: Arc::clone(&self.translations),
        }
    }

    /// Translate `key` in the active locale.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.translations.lookup(self.locale, key)
    }

    pub fn translations(&self) -> &Arc<Translations> {
        &self.translations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_locale_returns_new_context() {
        let ctx = AppContext::new(Locale::Et, Arc::new(Translations::builtin().unwrap()));
        let en = ctx.with_locale(Locale::En);

        assert_eq!(ctx.locale(), Locale::Et);
        assert_eq!(en.locale(), Locale::En);
        assert_eq!(ctx.t("nav.about"), "Meist");
        assert_eq!(en.t("nav.about"), "About");
        assert!(Arc::ptr_eq(ctx.translations(), en.translations()));
    }
}
