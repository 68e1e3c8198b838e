// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
/// `place_of_worship` → `Place_Of_Worship`, `guest house` → `Guest House`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha { out.extend(ch.to_lowercase()); }
            else { out.extend(ch.to_uppercase()); }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

/// Render a coordinate the way the data files carry it: shortest text that
/// parses back to the same value, always with a decimal point (`7.0`, `7.1`).
pub fn fmt_coord(v: f64) -> String {
    let mut t = v.to_string();
    if v.is_finite() && !t.contains('.') {
        t.push_str(".0");
    }
    t
}
