use serde::{Serialize, Serializer};
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

/// A supported site language. The set is closed: anything the resolver hands
/// out is one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Locale {
    #[strum(serialize = "en")]
    En,
    #[strum(serialize = "de")]
    De,
    #[strum(serialize = "es")]
    Es,
    #[strum(serialize = "fr")]
    Fr,
    #[strum(serialize = "zh-CN")]
    ZhCn,
    #[strum(serialize = "ja")]
    Ja,
    #[strum(serialize = "pt-BR")]
    PtBr,
    #[strum(serialize = "ru")]
    Ru,
    #[strum(serialize = "hi")]
    Hi,
    #[strum(serialize = "ar")]
    Ar,
}

impl Locale {
    pub const DEFAULT: Locale = Locale::En;

    /// Canonical tag, as used in URLs and dictionary file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::ZhCn => "zh-CN",
            Locale::Ja => "ja",
            Locale::PtBr => "pt-BR",
            Locale::Ru => "ru",
            Locale::Hi => "hi",
            Locale::Ar => "ar",
        }
    }

    /// Primary language subtag (`zh` for `zh-CN`).
    pub fn primary(&self) -> &'static str {
        primary_subtag(self.as_str())
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

pub(crate) fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

/// Ordered set of locales the site serves, plus the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLocales {
    locales: Vec<Locale>,
    default: Locale,
}

impl SupportedLocales {
    /// Returns `None` when `default` is not in `locales`, so a set can never
    /// fall back to a locale it does not serve.
    pub fn new(locales: Vec<Locale>, default: Locale) -> Option<Self> {
        if locales.contains(&default) {
            Some(SupportedLocales { locales, default })
        } else {
            None
        }
    }

    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    pub fn default_locale(&self) -> Locale {
        self.default
    }

    pub fn contains(&self, locale: Locale) -> bool {
        self.locales.contains(&locale)
    }

    /// Exact, case-sensitive lookup of a canonical tag.
    pub fn find_exact(&self, tag: &str) -> Option<Locale> {
        self.locales.iter().copied().find(|l| l.as_str() == tag)
    }
}

impl Default for SupportedLocales {
    fn default() -> Self {
        SupportedLocales {
            locales: Locale::iter().collect(),
            default: Locale::DEFAULT,
        }
    }
}
