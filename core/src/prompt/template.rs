use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").unwrap();
}

/// Replaces `{{name}}` placeholders in one pass. Unknown names render empty; substituted values
/// are never re-scanned.
pub fn render<'a, F>(template: &'a str, lookup: F) -> Cow<'a, str>
where
    F: Fn(&str) -> Option<&'a str>,
{
    PLACEHOLDER.replace_all(template, |caps: &Captures| {
        lookup(&caps[1]).unwrap_or_default().to_string()
    })
}

/// Placeholder names used by a template, in order of first appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(template) {
        if let Some(name) = caps.get(1).map(|m| m.as_str()) {
            if !out.contains(&name) {
                out.push(name);
            }
        }
    }
    out
}
