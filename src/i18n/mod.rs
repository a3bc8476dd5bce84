pub mod accept_language;
pub mod dictionary;
pub mod locale;
pub mod middleware;
pub mod negotiate;

pub use accept_language::LanguagePreference;
pub use dictionary::{DictionaryError, DictionaryStore};
pub use locale::{Locale, SupportedLocales};
pub use middleware::{
    is_excluded_path, locale_from_path, redirect_missing_locale, resolve, LocaleDecision,
    PreferredLocale,
};
pub use negotiate::{negotiate, negotiate_header};
