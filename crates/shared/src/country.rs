//! Origin-country helpers for dish badges.

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("JP", "Japan"),
    ("CN", "China"),
    ("TH", "Thailand"),
    ("IN", "India"),
    ("US", "United States"),
    ("FR", "France"),
    ("KR", "South Korea"),
    ("VN", "Vietnam"),
    ("CY", "Cyprus"),
];

/// Flag emoji for an ISO 3166-1 alpha-2 code, or an empty string when the
/// code is not two ASCII letters.
pub fn country_flag(code: &str) -> String {
    if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return String::new();
    }
    code.bytes()
        .map(|b| REGIONAL_INDICATOR_A + u32::from(b.to_ascii_uppercase() - b'A'))
        .filter_map(char::from_u32)
        .collect()
}

/// English name for a known code; unknown codes yield `None` and callers
/// show the raw code instead.
pub fn country_name(code: &str) -> Option<&'static str> {
    COUNTRY_NAMES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}
