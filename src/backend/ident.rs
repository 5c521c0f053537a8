//! Turn human-readable case names into test routine identifiers.
//!
//! Only spaces, hyphens and parentheses are removed. Any other punctuation passes through
//! unchanged and is caught later by syntax validation of the generated file.

/// Characters dropped from case names.
const STRIPPED: &[char] = &[' ', '-', '(', ')'];

/// Upper-case the first character of `s`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip separators from a case name and capitalize the result.
pub fn sanitize_case_name(name: &str) -> String {
    let stripped: String = name.chars().filter(|c| !STRIPPED.contains(c)).collect();
    capitalize(&stripped)
}

/// Full routine name: `Test<Scope><SanitizedName>`.
pub fn routine_name(scope: &str, case_name: &str) -> String {
    format!("Test{}{}", capitalize(scope), sanitize_case_name(case_name))
}
