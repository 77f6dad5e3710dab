// src/core/sanitize.rs

/// Collapse sequences of whitespace (including newlines) into a single space and trim.
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

/// Make a value safe for a single pipe-table cell: one line, literal pipes escaped as `\|`.
pub fn escape_cell(s: &str) -> String {
    normalize_ws(s).replace('|', "\\|")
}

/// Exactly four ASCII digits.
pub fn is_year(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())
}

/// First run of exactly four digits, e.g. `"2009–2012"` → `"2009"`.
pub fn first_year(s: &str) -> Option<String> {
    let b = s.as_bytes();
    let mut i = 0;
    while i < b.len() {
        if b[i].is_ascii_digit() {
            let start = i;
            while i < b.len() && b[i].is_ascii_digit() { i += 1; }
            if i - start == 4 {
                return Some(s[start..i].to_string());
            }
        } else {
            i += 1;
        }
    }
    None
}

/// Year in the last `(YYYY...)` group: `"2001: A Space Odyssey (1968)"` → `"1968"`.
pub fn year_in_parens(s: &str) -> Option<String> {
    s.rmatch_indices('(')
        .filter_map(|(i, _)| s.get(i + 1..i + 5))
        .find(|y| is_year(y))
        .map(str::to_string)
}
