//! Leading-number parsing with C `atoi`/`atof` semantics.
//!
//! Sysfs values and config-file values arrive as text with trailing
//! newlines, units, or garbage after the number. The original tooling in
//! this space parses the longest leading numeric prefix and ignores the
//! rest; these helpers reproduce that so `"45000\n"` and `"42abc"` both
//! resolve to a number rather than an error.

/// Parse the leading integer of a string: optional leading whitespace,
/// optional sign, then digits. Returns `None` when no digits are present
/// or the value does not fit in an `i64`.
pub fn leading_i64(s: &str) -> Option<i64> {
    let t = s.trim_start();
    let bytes = t.as_bytes();
    let mut i = 0;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        return None;
    }
    t[..i].parse().ok()
}

/// Parse the leading float of a string: optional whitespace and sign,
/// digits with an optional fractional part, then an optional exponent.
/// Returns `None` when no mantissa digits are present.
pub fn leading_f64(s: &str) -> Option<f64> {
    let t = s.trim_start();
    let bytes = t.as_bytes();
    let mut i = 0;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    let mantissa_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    // At least one digit required before the exponent
    if !t[mantissa_start..i].bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    t[..i].parse().ok()
}
