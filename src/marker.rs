//! Coverage markers and the statements that carry them
//!
//! A [`Marker`] names one instrumented block by `(label, line, index)`. The
//! [`MarkerSyntax`] renders the two statements the test harness consumes: the
//! increment call inserted at the block's opening brace, and the registration
//! call appended once at the end of the file.

use std::fmt;

/// Default name of the call inserted at each block entry
pub const DEFAULT_INCREMENT_CALL: &str = "Lapiz.Test.incMk";

/// Default name of the trailing call that lists every marker
pub const DEFAULT_REGISTER_CALL: &str = "Lapiz.Test.regMks";

/// Identity of a single inserted marker.
///
/// `line` is the number of newlines consumed before the block's brace was
/// found, and `index` counts earlier markers on that same line, so the triple
/// is unique within one scan.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker {
    pub label: String,
    pub line: usize,
    pub index: usize,
}

impl Marker {
    pub fn new(label: impl Into<String>, line: usize, index: usize) -> Self {
        Self {
            label: label.into(),
            line,
            index,
        }
    }
}

/// Renders the marker as the quoted token written into the output,
/// e.g. `"app.js) 12 : 0"`.
impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}) {} : {}\"", self.label, self.line, self.index)
    }
}

/// Call names used when rendering marker statements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSyntax {
    pub increment_call: String,
    pub register_call: String,
}

impl MarkerSyntax {
    pub fn new(increment_call: impl Into<String>, register_call: impl Into<String>) -> Self {
        Self {
            increment_call: increment_call.into(),
            register_call: register_call.into(),
        }
    }

    /// Statement inserted right after a block's opening brace.
    pub fn increment_statement(&self, marker: &Marker) -> String {
        format!("{}({});", self.increment_call, marker)
    }

    /// Trailing statement listing every marker, one per line.
    ///
    /// Returns `None` when there is nothing to register.
    pub fn registration_statement(&self, markers: &[Marker]) -> Option<String> {
        if markers.is_empty() {
            return None;
        }

        let tokens = markers
            .iter()
            .map(Marker::to_string)
            .collect::<Vec<_>>()
            .join(",\n  ");

        Some(format!("{}(\n  {}\n);", self.register_call, tokens))
    }
}

impl Default for MarkerSyntax {
    fn default() -> Self {
        Self::new(DEFAULT_INCREMENT_CALL, DEFAULT_REGISTER_CALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_marker_token() {
        let marker = Marker::new("lib/init.js", 12, 3);
        assert_eq!(marker.to_string(), r#""lib/init.js) 12 : 3""#);
    }

    #[test]
    fn test_increment_statement() {
        let syntax = MarkerSyntax::default();
        let marker = Marker::new("a.js", 0, 0);
        assert_eq!(
            syntax.increment_statement(&marker),
            r#"Lapiz.Test.incMk("a.js) 0 : 0");"#
        );
    }

    #[test]
    fn test_registration_statement() {
        let syntax = MarkerSyntax::default();
        let markers = vec![Marker::new("a.js", 0, 0), Marker::new("a.js", 0, 1)];
        assert_eq!(
            syntax.registration_statement(&markers).as_deref(),
            Some("Lapiz.Test.regMks(\n  \"a.js) 0 : 0\",\n  \"a.js) 0 : 1\"\n);")
        );
    }

    #[test]
    fn test_registration_statement_empty() {
        assert_eq!(MarkerSyntax::default().registration_statement(&[]), None);
    }

    #[test]
    fn test_custom_call_names() {
        let syntax = MarkerSyntax::new("cov.hit", "cov.register");
        let marker = Marker::new("x", 4, 1);
        assert_eq!(syntax.increment_statement(&marker), r#"cov.hit("x) 4 : 1");"#);
        assert_eq!(
            syntax.registration_statement(&[marker]).as_deref(),
            Some("cov.register(\n  \"x) 4 : 1\"\n);")
        );
    }
}
