//! Scalar coercions applied while parsing sections.
//!
//! Each helper takes the raw value (if the key was present) and a
//! caller-supplied fallback that is returned whenever the value cannot be
//! coerced.

use serde_yaml::Value;

/// Strip YAML tags so `!foo 3` coerces like `3`.
fn untagged(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untagged(&tagged.value),
        other => other,
    }
}

/// Coerce to a boolean.
///
/// Only a literal boolean or the exact strings `"true"`/`"false"` carry
/// their meaning. Any other present value is `false`, so `"yes"` and
/// `"True"` are not true. `null` or a missing key yields the fallback.
pub fn to_bool(value: Option<&Value>, fallback: Option<bool>) -> Option<bool> {
    match value.map(untagged) {
        None | Some(Value::Null) => fallback,
        Some(Value::Bool(b)) => Some(*b),
        Some(Value::String(s)) => Some(s == "true"),
        Some(_) => Some(false),
    }
}

/// Coerce to an integer.
///
/// Numbers are truncated toward zero; strings use their leading integer
/// (`"12px"` is 12). Anything else, including NaN, yields the fallback.
pub fn to_number(value: Option<&Value>, fallback: Option<i64>) -> Option<i64> {
    match value.map(untagged) {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f.abs() < i64::MAX as f64 => Some(f.trunc() as i64),
                _ => fallback,
            }
        }
        Some(Value::String(s)) => leading_integer(s).or(fallback),
        _ => fallback,
    }
}

/// Coerce to a non-negative integer, treating negatives as uncoercible.
pub fn to_count(value: Option<&Value>, fallback: Option<u32>) -> Option<u32> {
    match to_number(value, None) {
        Some(n) => u32::try_from(n).ok().or(fallback),
        None => fallback,
    }
}

/// Coerce any scalar to its string form.
///
/// `null` and non-scalars yield the fallback. An empty string stays empty.
pub fn to_string(value: Option<&Value>, fallback: Option<String>) -> Option<String> {
    match value.map(untagged) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => fallback,
    }
}

/// Coerce to a string and lower-case it, for enumerated names.
pub fn to_lower(value: Option<&Value>) -> Option<String> {
    to_string(value, None).map(|s| s.to_lowercase())
}

/// Parse the leading integer of a string: optional whitespace, an
/// optional sign, then digits. Trailing garbage is ignored.
pub fn leading_integer(s: &str) -> Option<i64> {
    let trimmed = s.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse a range expression: a two-element array or a `"start,end"` string.
///
/// Returns the raw pair without validating it.
pub fn to_pair(value: Option<&Value>) -> Option<(i64, i64)> {
    match value.map(untagged)? {
        Value::Sequence(items) if items.len() == 2 => {
            let start = to_number(items.first(), None)?;
            let end = to_number(items.get(1), None)?;
            Some((start, end))
        }
        Value::String(s) => {
            let mut parts = s.split(',');
            let start = leading_integer(parts.next()?)?;
            let end = leading_integer(parts.next()?)?;
            if parts.next().is_some() {
                return None;
            }
            Some((start, end))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn bool_accepts_only_exact_true() {
        assert_eq!(to_bool(Some(&yaml("true")), None), Some(true));
        assert_eq!(to_bool(Some(&yaml("'true'")), None), Some(true));
        assert_eq!(to_bool(Some(&yaml("'True'")), None), Some(false));
        assert_eq!(to_bool(Some(&yaml("'yes'")), None), Some(false));
        assert_eq!(to_bool(Some(&yaml("1")), None), Some(false));
        assert_eq!(to_bool(Some(&yaml("'false'")), Some(true)), Some(false));
    }

    #[test]
    fn bool_null_and_missing_use_fallback() {
        assert_eq!(to_bool(None, Some(true)), Some(true));
        assert_eq!(to_bool(Some(&Value::Null), None), None);
    }

    #[test]
    fn number_parses_leading_integer() {
        assert_eq!(to_number(Some(&yaml("'12px'")), None), Some(12));
        assert_eq!(to_number(Some(&yaml("' -3'")), None), Some(-3));
        assert_eq!(to_number(Some(&yaml("7.9")), None), Some(7));
        assert_eq!(to_number(Some(&yaml("'abc'")), Some(5)), Some(5));
        assert_eq!(to_number(Some(&yaml(".nan")), Some(1)), Some(1));
        assert_eq!(to_number(Some(&yaml("true")), None), None);
    }

    #[test]
    fn count_rejects_negative_values() {
        assert_eq!(to_count(Some(&yaml("-2")), None), None);
        assert_eq!(to_count(Some(&yaml("-2")), Some(4)), Some(4));
        assert_eq!(to_count(Some(&yaml("0")), Some(4)), Some(0));
    }

    #[test]
    fn string_stringifies_scalars() {
        assert_eq!(to_string(Some(&yaml("42")), None).as_deref(), Some("42"));
        assert_eq!(to_string(Some(&yaml("false")), None).as_deref(), Some("false"));
        assert_eq!(to_string(Some(&yaml("''")), Some("x".into())).as_deref(), Some(""));
        assert_eq!(to_string(Some(&yaml("~")), Some("x".into())).as_deref(), Some("x"));
        assert_eq!(to_string(Some(&yaml("[1, 2]")), None), None);
    }

    #[test]
    fn lower_normalizes_case() {
        assert_eq!(to_lower(Some(&yaml("Terminal"))).as_deref(), Some("terminal"));
    }

    #[test]
    fn pair_accepts_array_and_string_forms() {
        assert_eq!(to_pair(Some(&yaml("[4, 9]"))), Some((4, 9)));
        assert_eq!(to_pair(Some(&yaml("'4, 9'"))), Some((4, 9)));
        assert_eq!(to_pair(Some(&yaml("'4'"))), None);
        assert_eq!(to_pair(Some(&yaml("'1,2,3'"))), None);
        assert_eq!(to_pair(Some(&yaml("[1, 2, 3]"))), None);
        assert_eq!(to_pair(Some(&yaml("5"))), None);
    }
}
