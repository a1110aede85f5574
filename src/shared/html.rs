use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::borrow::Cow;

lazy_static! {
    /// Matches a single character reference: `&amp;`, `&#39;` or `&#x27;`
    static ref ENTITY_REGEX: Regex =
        Regex::new(r"&(#[xX][0-9a-fA-F]{1,6}|#[0-9]{1,7}|[a-zA-Z]{2,8});").unwrap();
}

/// Decode HTML character references in text served by the DPM server.
///
/// The server sanitizes names before sending them, so `O'Brien` arrives as
/// `O&#39;Brien`. Unknown named entities and invalid code points are left as-is.
pub fn decode_entities(input: &str) -> Cow<'_, str> {
    if !input.contains('&') {
        return Cow::Borrowed(input);
    }

    ENTITY_REGEX.replace_all(input, |caps: &Captures| {
        let body = &caps[1];
        let decoded = match body.strip_prefix('#') {
            Some(numeric) => decode_numeric(numeric),
            None => decode_named(body),
        };
        decoded.unwrap_or_else(|| caps[0].to_string())
    })
}

fn decode_numeric(numeric: &str) -> Option<String> {
    let hex = numeric
        .strip_prefix('x')
        .or_else(|| numeric.strip_prefix('X'));
    let code = match hex {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => numeric.parse::<u32>().ok()?,
    };
    char::from_u32(code).map(String::from)
}

fn decode_named(name: &str) -> Option<String> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        _ => return None,
    };
    Some(c.to_string())
}
