//! HTML character entity repair.
//!
//! The export escapes markup-significant and non-ASCII characters as named or
//! numeric entities. Only the entities in [`ENTITIES`] are decoded; anything
//! else is left exactly as written.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Known entities and their literal replacement.
///
/// Non-breaking spaces are deleted outright.
pub const ENTITIES: &[(&str, &str)] = &[
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#34;", "\""),
    ("&apos;", "'"),
    ("&#39;", "'"),
    ("&#x27;", "'"),
    ("&#96;", "`"),
    ("&#x60;", "`"),
    ("&#61;", "="),
    ("&#x3D;", "="),
    ("&#47;", "/"),
    ("&#x2F;", "/"),
    ("&#223;", "ß"),
    ("&#224;", "à"),
    ("&#225;", "á"),
    ("&#226;", "â"),
    ("&#228;", "ä"),
    ("&#231;", "ç"),
    ("&#232;", "è"),
    ("&#233;", "é"),
    ("&#234;", "ê"),
    ("&#235;", "ë"),
    ("&#237;", "í"),
    ("&#239;", "ï"),
    ("&#241;", "ñ"),
    ("&#243;", "ó"),
    ("&#244;", "ô"),
    ("&#246;", "ö"),
    ("&#249;", "ù"),
    ("&#250;", "ú"),
    ("&#251;", "û"),
    ("&#252;", "ü"),
    ("&#201;", "É"),
    ("&#8211;", "–"),
    ("&#8212;", "—"),
    ("&#8216;", "‘"),
    ("&#8217;", "’"),
    ("&#8220;", "“"),
    ("&#8221;", "”"),
    ("&#8230;", "…"),
    ("&nbsp;", ""),
    ("&#160;", ""),
];

static ENTITY_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ENTITIES.iter().copied().collect());

// One alternation over the whole table, so a single pass decodes every token
// and the order of the table never matters.
static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = ENTITIES
        .iter()
        .map(|(entity, _)| regex::escape(entity))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("entity table builds a valid pattern")
});

/// Replaces every known entity in `text` with its literal character.
///
/// # Example
///
/// ```rust
/// use chatlog_csv::parsing::entities::repair;
///
/// assert_eq!(repair("caf&#233; &amp; cr&#232;me"), "café & crème");
/// assert_eq!(repair("&copy; stays"), "&copy; stays");
/// ```
pub fn repair(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    ENTITY_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let token = &caps[0];
            match ENTITY_MAP.get(token) {
                Some(literal) => (*literal).to_string(),
                None => token.to_string(),
            }
        })
        .into_owned()
}
