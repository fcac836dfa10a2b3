use std::sync::OnceLock;

use regex::Regex;

/// Decode HTML entities the board API leaves in user supplied strings.
/// Falls back to the raw input if it contains a malformed entity.
pub fn decode_html(input: &str) -> String {
    html_entities::decode_html_entities(input).unwrap_or_else(|_| input.to_string())
}

fn unsafe_filename_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[/\\\x00]").expect("static pattern"))
}

/// A filename is safe when it names a single entry inside the target directory.
pub fn is_safe_filename(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !unsafe_filename_re().is_match(name)
}
