/// `background-color` -> `backgroundColor`, `-webkit-box` -> `WebkitBox`.
/// Every hyphen is consumed, even repeated or trailing ones.
#[inline]
pub fn to_camel_case(raw: &str, out: &mut String) {
    for (idx, word) in raw.split('-').enumerate() {
        if idx == 0 {
            out.push_str(word);
            continue;
        }

        let first_char = word.chars().next();
        if let Some(ch) = first_char {
            // Uppercase the first char and append to buf
            for ch_component in ch.to_uppercase() {
                out.push(ch_component);
            }

            // Push the rest of the word
            out.push_str(&word[ch.len_utf8()..]);
        }
    }
}

/// Stringifies a number the way `String(number)` does in JavaScript:
/// shortest round-trip digits, no trailing `.0`, exponent notation
/// outside of `[1e-6, 1e21)`.
pub fn format_js_number(value: f64) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    // Also covers `-0`
    if value == 0.0 {
        return String::from("0");
    }

    let abs = value.abs();
    if (1e-6..1e21).contains(&abs) {
        return value.to_string();
    }

    // `1e30` -> `1e+30`
    let exponential = format!("{value:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}
