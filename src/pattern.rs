//! Regex-backed helpers for the `PATTERN` and `DISPLAY.EXCLUDE` strings.

use crate::error::{CodefenceError, Result};
use regex::Regex;

/// A compiled captured-output pattern with at least two capture groups.
///
/// The first group is the prompt, the second the command; a line that
/// does not match is output.
#[derive(Debug, Clone)]
pub struct CapturePattern {
    regex: Regex,
}

impl CapturePattern {
    /// Compile a pattern, requiring at least two capture groups.
    pub fn compile(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            CodefenceError::UserError(format!("invalid PATTERN regex '{}': {}", pattern, e))
        })?;

        // captures_len counts the implicit whole-match group.
        let groups = regex.captures_len() - 1;
        if groups < 2 {
            return Err(CodefenceError::UserError(format!(
                "PATTERN '{}' needs two capture groups, found {}",
                pattern, groups
            )));
        }

        Ok(Self { regex })
    }

    /// Split a line into its prompt and command pieces.
    ///
    /// Returns `None` when the line does not match. A group that did not
    /// participate in the match yields an empty string.
    pub fn split<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = self.regex.captures(line)?;
        let piece = |i| caps.get(i).map_or("", |m| m.as_str());
        Some((piece(1), piece(2)))
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// 1-based numbers of the lines of `content` matching `pattern`.
///
/// An empty pattern excludes nothing.
pub fn excluded_lines(content: &str, pattern: &str) -> Result<Vec<usize>> {
    if pattern.is_empty() {
        return Ok(Vec::new());
    }

    let regex = Regex::new(pattern).map_err(|e| {
        CodefenceError::UserError(format!("invalid EXCLUDE regex '{}': {}", pattern, e))
    })?;

    Ok(content
        .split('\n')
        .enumerate()
        .filter(|(_, line)| regex.is_match(line))
        .map(|(idx, _)| idx + 1)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_requires_two_groups() {
        let err = CapturePattern::compile(r"^(\$ ).*$").unwrap_err();
        assert!(err.to_string().contains("two capture groups"));
        assert!(CapturePattern::compile(r"^(\$ )(.*)$").is_ok());
    }

    #[test]
    fn compile_rejects_invalid_regex() {
        let err = CapturePattern::compile("(unclosed").unwrap_err();
        assert!(err.to_string().contains("invalid PATTERN regex"));
    }

    #[test]
    fn split_returns_prompt_and_command() {
        let pattern = CapturePattern::compile(r"^(\$ )(.*)$").unwrap();
        assert_eq!(pattern.split("$ cargo test"), Some(("$ ", "cargo test")));
        assert_eq!(pattern.split("running 3 tests"), None);
    }

    #[test]
    fn split_optional_group_is_empty() {
        let pattern = CapturePattern::compile(r"^(>>> )?(.*)$").unwrap();
        assert_eq!(pattern.split("print(1)"), Some(("", "print(1)")));
    }

    #[test]
    fn excluded_lines_matches_pattern() {
        let content = "// header\nfn main() {}\n// trailer";
        assert_eq!(excluded_lines(content, "^//").unwrap(), vec![1, 3]);
    }

    #[test]
    fn excluded_lines_empty_pattern() {
        assert!(excluded_lines("a\nb", "").unwrap().is_empty());
    }

    #[test]
    fn excluded_lines_invalid_pattern() {
        assert!(excluded_lines("a", "[").is_err());
    }
}
