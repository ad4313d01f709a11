//! HTML/script injection detection and string sanitization
//!
//! Applied to every user-supplied string field except passwords, before the
//! value reaches validation or storage.

use once_cell::sync::Lazy;
use regex::{Captures, Regex, RegexSet};
use std::borrow::Cow;

const MALICIOUS_PATTERNS: &[&str] = &[
    r"(?is)<script\b.*?</script>",
    r"(?is)<iframe\b.*?</iframe>",
    r"(?i)javascript:",
    r"(?i)on\w+\s*=",
    r"(?i)<embed",
    r"(?i)<object",
    r"(?i)<link",
    r"(?i)<meta",
    r"(?i)document\.(cookie|write|domain)",
    r"(?i)window\.(location|open)",
    r"(?i)eval\s*\(",
    r"(?i)setTimeout\s*\(",
    r"(?i)setInterval\s*\(",
    r"(?i)Function\s*\(",
    r"(?i)\.innerHTML\s*=",
    r"(?i)\.outerHTML\s*=",
];

static MALICIOUS_SET: Lazy<RegexSet> =
    Lazy::new(|| RegexSet::new(MALICIOUS_PATTERNS).expect("static injection patterns"));

static HTML_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&lt;|&gt;|&quot;|&#x27;|&#x2F;|&amp;").expect("static entity pattern"));

static SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b.*?</script>").expect("static script pattern"));

static IFRAME_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<iframe\b.*?</iframe>").expect("static iframe pattern"));

static JS_PROTOCOL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)javascript:").expect("static protocol pattern"));

static EVENT_HANDLER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)on\w+\s*=").expect("static handler pattern"));

static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("static tag pattern"));

static SAFE_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^</?(?:br|p|strong|em|u|i|b)\s*/?>$").expect("static safe tag pattern")
});

static ATTACK_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<\w|on\w+=").expect("static attack pattern"));

/// Decode the handful of HTML entities attackers use to smuggle markup
pub fn decode_html_entities(value: &str) -> Cow<'_, str> {
    HTML_ENTITY.replace_all(value, |caps: &Captures| {
        match &caps[0] {
            "&lt;" => "<",
            "&gt;" => ">",
            "&quot;" => "\"",
            "&#x27;" => "'",
            "&#x2F;" => "/",
            _ => "&",
        }
        .to_string()
    })
}

/// True when the value, or its entity-decoded form, contains script or
/// markup injection
pub fn contains_malicious_content(value: &str) -> bool {
    if MALICIOUS_SET.is_match(value) {
        return true;
    }
    match decode_html_entities(value) {
        Cow::Owned(decoded) => MALICIOUS_SET.is_match(&decoded),
        Cow::Borrowed(_) => false,
    }
}

/// Strip scripts, handlers and non-whitelisted tags.
///
/// Safe formatting tags (`br p strong em u i b`) survive. If what remains
/// still looks like an attack, the HTML metacharacters are escaped.
pub fn sanitize_str(value: &str) -> String {
    let stripped = SCRIPT_BLOCK.replace_all(value, "");
    let stripped = IFRAME_BLOCK.replace_all(&stripped, "");
    let stripped = JS_PROTOCOL.replace_all(&stripped, "");
    let stripped = EVENT_HANDLER.replace_all(&stripped, "");

    let stripped = ANY_TAG.replace_all(&stripped, |caps: &Captures| {
        if SAFE_TAG.is_match(&caps[0]) {
            caps[0].to_string()
        } else {
            String::new()
        }
    });

    // only whitelisted tags remain; judge what lies outside them
    let outside_tags = ANY_TAG.replace_all(&stripped, "");
    if ATTACK_SHAPE.is_match(&outside_tags) {
        escape_html(&stripped)
    } else {
        stripped.into_owned()
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '/' => escaped.push_str("&#x2F;"),
            other => escaped.push(other),
        }
    }
    escaped
}
