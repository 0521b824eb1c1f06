//! Cross-reference rewriting and quote escaping for docstring bodies.
//!
//! Comments mark class references as `_Mesh_`. Known classes become a
//! Sphinx role such as ``:py:class:`Mesh` ``; anything else stays as
//! written so no dangling link is emitted.

use crate::error::Result;
use log::debug;
use regex::Regex;
use std::collections::HashSet;

/// Link rewriter over the process-wide set of known class names.
pub struct LinkRewriter<'a> {
    pattern: Option<Regex>,
    role: &'a str,
}

impl<'a> LinkRewriter<'a> {
    /// Build one matcher for `_Name_` over every known name.
    pub fn new(known: &HashSet<String>, role: &'a str) -> Result<Self> {
        let mut names: Vec<&str> = known
            .iter()
            .map(String::as_str)
            .filter(|name| !name.is_empty())
            .collect();
        // Longest first so `_Mesh_Data_` is not cut short by `Mesh`.
        names.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

        let pattern = if names.is_empty() {
            None
        } else {
            let alternation: Vec<String> = names.iter().map(|name| regex::escape(name)).collect();
            Some(Regex::new(&format!("_({})_", alternation.join("|")))?)
        };
        debug!("link rewriter covers {} classes", names.len());
        Ok(Self { pattern, role })
    }

    /// Replace `_Name_` markup for every known `Name`.
    pub fn rewrite(&self, text: &str) -> String {
        let Some(ref pattern) = self.pattern else {
            return text.to_string();
        };
        pattern
            .replace_all(text, |caps: &regex::Captures| format!("{}`{}`", self.role, &caps[1]))
            .into_owned()
    }
}

/// Escape every `"` that is not already escaped.
///
/// A quote counts as escaped when an odd run of backslashes precedes it,
/// so `\"` is left alone while `\\"` gets its own backslash.
pub fn escape_quotes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut backslashes = 0;
    for c in text.chars() {
        if c == '"' && backslashes % 2 == 0 {
            out.push('\\');
        }
        out.push(c);
        backslashes = if c == '\\' { backslashes + 1 } else { 0 };
    }
    out
}
