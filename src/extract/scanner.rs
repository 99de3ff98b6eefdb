// Thu Jan 15 2026 - Alex

use super::record::StructRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A full definition whose body allows at most one level of nested braces.
static COMPAT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"struct\s+(\w+)\s*(?::\s*\w+\s*)?\{(?:[^{}]|\{[^{}]*\})*\};")
        .expect("struct pattern compiles")
});

/// Only the definition header, up to and including the opening brace.
static HEADER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"struct\s+(\w+)\s*(?::\s*\w+\s*)?\{").expect("header pattern compiles")
});

/// How struct bodies are delimited.
///
/// `Compat` allows one level of nested braces: a body nested two or more
/// levels deep does not match at its own header at all, though a named struct
/// inside it may still match by itself.
/// `Balanced` counts brace depth and captures any nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    #[default]
    Compat,
    Balanced,
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanMode::Compat => write!(f, "compat"),
            ScanMode::Balanced => write!(f, "balanced"),
        }
    }
}

impl FromStr for ScanMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compat" | "regex" => Ok(ScanMode::Compat),
            "balanced" | "depth" => Ok(ScanMode::Balanced),
            other => Err(format!("unknown scan mode '{}' (expected compat or balanced)", other)),
        }
    }
}

pub struct StructScanner {
    mode: ScanMode,
}

impl StructScanner {
    pub fn new(mode: ScanMode) -> Self {
        Self { mode }
    }

    /// All definitions in document order. Matches never overlap.
    pub fn scan<'a>(&self, text: &'a str) -> Vec<StructRecord<'a>> {
        match self.mode {
            ScanMode::Compat => scan_compat(text),
            ScanMode::Balanced => scan_balanced(text),
        }
    }
}

pub fn extract_structs(text: &str, mode: ScanMode) -> Vec<StructRecord<'_>> {
    StructScanner::new(mode).scan(text)
}

fn scan_compat(text: &str) -> Vec<StructRecord<'_>> {
    COMPAT_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            Some(StructRecord::new(name.as_str(), whole.as_str(), whole.start()))
        })
        .collect()
}

fn scan_balanced(text: &str) -> Vec<StructRecord<'_>> {
    let mut records = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let caps = match HEADER_PATTERN.captures_at(text, pos) {
            Some(caps) => caps,
            None => break,
        };
        let (header, name) = match (caps.get(0), caps.get(1)) {
            (Some(header), Some(name)) => (header, name),
            _ => break,
        };

        match closing_brace(text, header.end()) {
            Some(end) => {
                records.push(StructRecord::new(
                    name.as_str(),
                    &text[header.start()..end],
                    header.start(),
                ));
                pos = end;
            }
            // "struct" is ASCII, so start + 1 stays on a char boundary.
            None => pos = header.start() + 1,
        }
    }

    records
}

/// Byte offset just past the `};` that closes a body opened right before
/// `body_start`, or `None` when the braces never balance or the final brace
/// is not followed by `;`.
fn closing_brace(text: &str, body_start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 1usize;

    for i in body_start..bytes.len() {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return (bytes.get(i + 1) == Some(&b';')).then_some(i + 2);
                }
            }
            _ => {}
        }
    }

    None
}
