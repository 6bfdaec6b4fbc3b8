use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::LiteralType;

lazy_static! {
    static ref HEX_FLOATING: Regex = Regex::new(
        r"^0[xX][0-9a-fA-F_]*(\.[0-9a-fA-F_]*)?[pP][+-]?[0-9_]*(?P<suffix>[fFdD])?$"
    )
    .unwrap();
    static ref RADIX_INTEGER: Regex =
        Regex::new(r"^0[xXbB][0-9a-fA-F_]*(\.[0-9a-fA-F_]*)?(?P<suffix>[lL])?$").unwrap();
    static ref DECIMAL: Regex = Regex::new(
        r"^[0-9][0-9_]*(?P<fraction>\.[0-9_]*)?(?P<exponent>[eE][+-]?[0-9_]+)?(?P<suffix>[fFdDlL])?$"
    )
    .unwrap();
}

/// Derives a literal's type from its text alone.
///
/// Numeric rules: an explicit suffix wins (`l`→long, `f`→float, `d`→double);
/// otherwise a decimal point or exponent makes a double and anything else an
/// int. Hex literals with a `p` exponent are always floating point, hex and
/// binary literals without one are int unless `l`-suffixed.
pub fn infer_literal_type(text: &str) -> LiteralType {
    match text {
        "true" | "false" => return LiteralType::Boolean,
        "null" => return LiteralType::Null,
        _ => {}
    }

    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        return LiteralType::String;
    }
    if text.len() >= 3 && text.starts_with('\'') && text.ends_with('\'') {
        return LiteralType::Char;
    }

    if let Some(caps) = HEX_FLOATING.captures(text) {
        return match caps.name("suffix").map(|m| m.as_str()) {
            Some("f" | "F") => LiteralType::Float,
            _ => LiteralType::Double,
        };
    }

    if let Some(caps) = RADIX_INTEGER.captures(text) {
        return match caps.name("suffix") {
            Some(_) => LiteralType::Long,
            None => LiteralType::Int,
        };
    }

    if let Some(caps) = DECIMAL.captures(text) {
        return match caps.name("suffix").map(|m| m.as_str()) {
            Some("l" | "L") => LiteralType::Long,
            Some("f" | "F") => LiteralType::Float,
            Some(_) => LiteralType::Double,
            None if caps.name("fraction").is_some() || caps.name("exponent").is_some() => {
                LiteralType::Double
            }
            None => LiteralType::Int,
        };
    }

    LiteralType::Unknown
}
