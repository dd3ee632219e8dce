//! Identifier helpers shared by every fragment builder.
//!
//! Generated labels come from object and field identifiers, so the rules
//! here decide how a name like `cars` ends up as `Cars` in a menu entry.

/// Upper-case the first character and leave the rest untouched.
///
/// | Input        | Output       |
/// |--------------|--------------|
/// | `"cars"`     | `"Cars"`     |
/// | `"car_id"`   | `"Car_id"`   |
/// | `"iPhone"`   | `"IPhone"`   |
/// | `""`         | `""`         |
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            // to_uppercase handles Unicode correctly (e.g., "ß" -> "SS")
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Convert a display name to camelCase.
///
/// Used to derive a project's `nameCamelCase` when the description omits it.
///
/// | Input             | Output          |
/// |-------------------|-----------------|
/// | `"My Garage"`     | `"myGarage"`    |
/// | `"fleet-manager"` | `"fleetManager"`|
/// | `"HTTPServer"`    | `"httpServer"`  |
pub fn to_camel_case(s: &str) -> String {
    let mut words = split_words(s).into_iter();
    let mut out = words.next().unwrap_or_default();
    for word in words {
        out.push_str(&capitalize(&word));
    }
    out
}

/// Split a string into lower-cased words based on casing and separators.
///
/// 1. **Explicit separators:** `_`, `-`, whitespace → always split
/// 2. **Case transition (camelCase):** `aB` → split between `a` and `B`
/// 3. **Acronym boundary:** `HTTPRequest` → split between `P` and `R`
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(&next) = chars.peek() {
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            // "HTTPServer" → "HTTP" + "Server"
            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}
