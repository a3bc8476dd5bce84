use std::cmp::Ordering;

use super::accept_language::LanguagePreference;
use super::locale::{primary_subtag, Locale, SupportedLocales};

/// How closely a requested tag matches a supported locale. Higher is closer.
fn specificity(requested: &str, supported: Locale) -> Option<u8> {
    let requested = requested.to_ascii_lowercase();
    let code = supported.as_str().to_ascii_lowercase();

    if requested == code {
        Some(4)
    } else if primary_subtag(&requested) == code {
        // de-CH -> de
        Some(2)
    } else if requested == primary_subtag(&code) {
        // zh -> zh-CN
        Some(1)
    } else if requested == "*" {
        Some(0)
    } else {
        None
    }
}

struct Candidate {
    locale: Locale,
    weight: f32,
    specificity: u8,
    position: usize,
    rank: usize,
}

impl Candidate {
    /// Heavier weight wins, then closer match, then earlier header entry,
    /// then earlier supported locale.
    fn beats(&self, other: &Candidate) -> bool {
        let ord = self
            .weight
            .total_cmp(&other.weight)
            .then(self.specificity.cmp(&other.specificity))
            .then(other.position.cmp(&self.position))
            .then(other.rank.cmp(&self.rank));
        ord == Ordering::Greater
    }
}

/// The entry that decides `locale`'s weight: the most specific match, and
/// among equally specific matches the earliest one.
fn decisive_match(
    preferences: &[LanguagePreference],
    locale: Locale,
    rank: usize,
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for (position, pref) in preferences.iter().enumerate() {
        let Some(specificity) = specificity(&pref.tag, locale) else {
            continue;
        };
        if best.as_ref().map_or(true, |b| specificity > b.specificity) {
            best = Some(Candidate {
                locale,
                weight: pref.weight,
                specificity,
                position,
                rank,
            });
        }
    }

    best
}

/// Pick the supported locale that best fits `preferences`. Falls back to the
/// set's default when nothing acceptable matches; never fails.
///
/// A locale whose most specific match carries `q=0` is refused outright, even
/// if a broader entry such as `*` or a regional tag would accept it.
pub fn negotiate(preferences: &[LanguagePreference], supported: &SupportedLocales) -> Locale {
    let mut best: Option<Candidate> = None;

    for (rank, &locale) in supported.locales().iter().enumerate() {
        let Some(candidate) = decisive_match(preferences, locale, rank) else {
            continue;
        };
        if candidate.weight <= 0.0 {
            continue;
        }
        if best.as_ref().map_or(true, |b| candidate.beats(b)) {
            best = Some(candidate);
        }
    }

    best.map(|c| c.locale)
        .unwrap_or_else(|| supported.default_locale())
}

/// Convenience for a raw header value; `None` means the header was absent.
pub fn negotiate_header(header: Option<&str>, supported: &SupportedLocales) -> Locale {
    let preferences = header
        .map(LanguagePreference::parse_header)
        .unwrap_or_default();
    negotiate(&preferences, supported)
}
