// Wed Aug 05 2026 - Alex

use regex::Regex;

/// Compile one slash-delimited glob pattern into an anchored regex over
/// dotted class names. `*` matches within one segment, `**` matches any
/// number of segments; a `**` segment at the start, middle or end makes
/// the adjoining separator-and-segments optional, so `a/**/b` matches
/// both `a.b` and `a.x.y.b`.
pub fn compile_pattern(pattern: &str) -> Regex {
    let segments: Vec<&str> = pattern.split('/').collect();
    let mut built = String::from("^");

    for (index, segment) in segments.iter().enumerate() {
        let first = index == 0;
        let last = index + 1 == segments.len();

        if *segment == "**" {
            match (first, last) {
                (true, true) => built.push_str(".*"),
                (true, false) => built.push_str(r"(?:.*\.)?"),
                (false, true) => built.push_str(r"(?:\..*)?"),
                (false, false) => built.push_str(r"\.(?:.*\.)?"),
            }
            continue;
        }

        if !first && segments[index - 1] != "**" {
            built.push_str(r"\.");
        }
        for ch in segment.chars() {
            match ch {
                '*' => built.push_str("[^.]*"),
                '?' => built.push('.'),
                other => built.push_str(&regex::escape(&other.to_string())),
            }
        }
    }

    built.push('$');
    // The translation only emits escaped literals and fixed groups.
    Regex::new(&built).expect("glob translation produced invalid regex")
}

/// Include/exclude filter over dotted class names. A name passes when
/// no exclude pattern matches it and, if any include patterns were
/// given, at least one of them matches.
#[derive(Debug, Default)]
pub struct ClassFilter {
    includes: Vec<Regex>,
    excludes: Vec<Regex>,
}

impl ClassFilter {
    pub fn new(includes: &[String], excludes: &[String]) -> Self {
        Self {
            includes: includes.iter().map(|p| compile_pattern(p)).collect(),
            excludes: excludes.iter().map(|p| compile_pattern(p)).collect(),
        }
    }

    pub fn is_considered(&self, dotted_name: &str) -> bool {
        if self.excludes.iter().any(|p| p.is_match(dotted_name)) {
            return false;
        }
        if self.includes.is_empty() {
            return true;
        }
        self.includes.iter().any(|p| p.is_match(dotted_name))
    }
}
