use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

pub type FrontMatter = BTreeMap<String, String>;

static FRONT_MATTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A---\n(.*?)\n---\n(.*)\z").expect("valid regex"));

/// Split a document into its `---` delimited front matter and the body.
///
/// Without a front matter block the whole text is the body. Block lines are
/// `key: value`; the value keeps any further colons and loses one surrounding
/// quote on each side.
pub fn split_front_matter(raw: &str) -> (FrontMatter, String) {
    let normalized = raw.replace("\r\n", "\n");

    let Some(caps) = FRONT_MATTER.captures(&normalized) else {
        return (FrontMatter::new(), normalized);
    };

    let front_matter = caps[1].lines().filter_map(parse_line).collect();
    (front_matter, caps[2].to_string())
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    let value = value.trim();
    let value = value
        .strip_prefix(['"', '\''])
        .unwrap_or(value);
    let value = value
        .strip_suffix(['"', '\''])
        .unwrap_or(value);

    Some((key.to_string(), value.to_string()))
}
