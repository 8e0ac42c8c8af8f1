//! `application/x-www-form-urlencoded` bodies

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Bytes left as-is by the form serializer
const FORM_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

fn encode_component(value: &str) -> String {
    // '%' is always escaped, so a literal "%20" cannot survive to here
    utf8_percent_encode(value, FORM_SET)
        .to_string()
        .replace("%20", "+")
}

/// Serialize key/value pairs the way a browser form would
pub fn encode_form(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}
