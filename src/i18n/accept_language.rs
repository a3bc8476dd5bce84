/// One entry of an `Accept-Language` header.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguagePreference {
    pub tag: String,
    pub weight: f32,
}

impl LanguagePreference {
    /// Parse an `Accept-Language` value into preferences ordered by weight,
    /// highest first. Ties keep header order. Malformed entries are skipped;
    /// a missing `q` counts as 1.0 and out-of-range weights are clamped.
    pub fn parse_header(header: &str) -> Vec<LanguagePreference> {
        let mut prefs: Vec<LanguagePreference> =
            header.split(',').filter_map(parse_entry).collect();

        // sort_by is stable, so equal weights stay in header order.
        prefs.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        prefs
    }
}

fn parse_entry(raw: &str) -> Option<LanguagePreference> {
    let mut parts = raw.split(';');
    let tag = parts.next()?.trim();
    if tag.is_empty() || !is_valid_tag(tag) {
        return None;
    }

    let mut weight = 1.0_f32;
    for param in parts {
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        if key.trim().eq_ignore_ascii_case("q") {
            weight = value.trim().parse::<f32>().ok().filter(|w| w.is_finite())?;
        }
    }

    Some(LanguagePreference {
        tag: tag.to_string(),
        weight: weight.clamp(0.0, 1.0),
    })
}

fn is_valid_tag(tag: &str) -> bool {
    tag == "*"
        || tag
            .split('-')
            .all(|sub| !sub.is_empty() && sub.len() <= 8 && sub.chars().all(|c| c.is_ascii_alphanumeric()))
}
