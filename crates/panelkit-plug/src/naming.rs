//! Plugin name normalization.

/// Normalize a raw plugin name to a lowercase snake_case identifier.
///
/// Non-alphanumeric runs collapse to a single `_`, an `_` is inserted at
/// lower-to-upper camel boundaries, and leading/trailing `_` are trimmed.
/// The result is used as the plugin directory name, the generated module
/// identifier, and the descriptor's base path. Idempotent: applying it to
/// its own output is a no-op.
pub fn snakecase(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 4);
    let mut prev_lower_or_digit = false;
    let mut prev_separator = true; // suppresses a leading underscore

    for c in raw.chars() {
        if c.is_alphanumeric() {
            if c.is_uppercase() {
                if prev_lower_or_digit && !prev_separator {
                    out.push('_');
                }
                out.extend(c.to_lowercase());
                prev_lower_or_digit = false;
            } else {
                out.push(c);
                prev_lower_or_digit = true;
            }
            prev_separator = false;
        } else {
            if !prev_separator {
                out.push('_');
            }
            prev_separator = true;
            prev_lower_or_digit = false;
        }
    }

    while out.ends_with('_') {
        out.pop();
    }
    out
}
