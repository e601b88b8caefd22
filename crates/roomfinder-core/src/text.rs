// crates/roomfinder-core/src/text.rs
use once_cell::sync::Lazy;
use regex::Regex;

/// Building-prefix shorthand: `pa5`, `pa05`.
static PA_SHORTHAND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^pa([0-9]{1,2})$").expect("static regex"));

/// Trim, lowercase and drop every whitespace character.
fn squash(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Normalize a term for the exact lookup.
///
/// Users type `pa5`, `PA 05` and `pa-05` interchangeably, so a hyphenless
/// `pa` followed by one or two digits is rewritten to the canonical
/// `pa-NN` form. Any other input is only trimmed, lowercased and stripped
/// of whitespace.
///
/// # Examples
///
/// ```rust
/// use roomfinder_core::text::normalize_exact;
///
/// assert_eq!(normalize_exact("pa5"), "pa-05");
/// assert_eq!(normalize_exact(" PA 05 "), "pa-05");
/// assert_eq!(normalize_exact("pa-05"), "pa-05");
/// assert_eq!(normalize_exact("LAB 01"), "lab01");
/// ```
pub fn normalize_exact(raw: &str) -> String {
    let t = squash(raw);
    if !t.contains('-') {
        if let Some(caps) = PA_SHORTHAND.captures(&t) {
            return format!("pa-{:0>2}", &caps[1]);
        }
    }
    t
}

/// Normalize a term for autocomplete matching.
///
/// Strips whitespace *and* hyphens so `pa01`, `pa 01` and `pa-01` all fold
/// to `pa01`. Only used for scoring, never for the exact lookup.
///
/// ```rust
/// use roomfinder_core::text::normalize_match;
///
/// assert_eq!(normalize_match("PA-01"), "pa01");
/// assert_eq!(normalize_match(" p a - 0 "), "pa0");
/// ```
pub fn normalize_match(raw: &str) -> String {
    squash(raw).replace('-', "")
}
