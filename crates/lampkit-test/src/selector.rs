//! CSS-like selector parsing for widget queries.
//!
//! Supports:
//! - `"#main-lamp"` - by test ID
//! - `"[data-testid='main-lamp']"` - by test ID
//! - `"[aria-label='Toggle Theme']"` - by accessible name
//! - `"[role='switch']"` - by accessible role

use lampkit_core::Widget;

/// Parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match by test ID
    TestId(String),
    /// Match by accessible name
    Label(String),
    /// Match by accessible role
    Role(String),
}

impl Selector {
    /// Parse a selector string.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is invalid.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        SelectorParser::new(input).parse()
    }

    /// Check if this selector matches a widget.
    #[must_use]
    pub fn matches(&self, widget: &dyn Widget) -> bool {
        match self {
            Self::TestId(id) => widget.test_id() == Some(id.as_str()),
            Self::Label(label) => widget.accessible_name() == Some(label.as_str()),
            Self::Role(role) => widget.accessible_role().as_str() == role.as_str(),
        }
    }
}

/// Selector parser.
pub struct SelectorParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> SelectorParser<'a> {
    /// Create a new parser.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Parse the selector.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is invalid.
    pub fn parse(&mut self) -> Result<Selector, SelectorError> {
        self.skip_whitespace();
        match self.peek_char() {
            None => Err(SelectorError::Empty),
            Some('#') => {
                self.advance();
                Ok(Selector::TestId(self.read_identifier()?))
            }
            Some('[') => self.parse_attribute(),
            Some(c) => Err(SelectorError::UnexpectedChar(c)),
        }
    }

    fn parse_attribute(&mut self) -> Result<Selector, SelectorError> {
        self.advance(); // Skip '['

        let name = self.read_until('=');
        if name.is_empty() || self.peek_char() != Some('=') {
            return Err(SelectorError::InvalidAttribute);
        }
        self.advance(); // Skip '='

        let quote = self.peek_char();
        if quote == Some('\'') || quote == Some('"') {
            self.advance();
        }
        let value = self.read_until_any(&['\'', '"', ']']);
        if self.peek_char() == Some('\'') || self.peek_char() == Some('"') {
            self.advance();
        }

        if self.peek_char() != Some(']') {
            return Err(SelectorError::UnclosedAttribute);
        }
        self.advance();

        match name.as_str() {
            "data-testid" => Ok(Selector::TestId(value)),
            "aria-label" => Ok(Selector::Label(value)),
            "role" => Ok(Selector::Role(value)),
            _ => Err(SelectorError::UnknownAttribute(name)),
        }
    }

    fn read_identifier(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        if self.pos == start {
            return Err(SelectorError::ExpectedIdentifier);
        }

        Ok(self.input[start..self.pos].to_string())
    }

    fn read_until(&mut self, stop: char) -> String {
        self.read_until_any(&[stop])
    }

    fn read_until_any(&mut self, stops: &[char]) -> String {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if stops.contains(&c) {
                break;
            }
            self.advance();
        }
        self.input[start..self.pos].to_string()
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }
}

/// Selector parsing error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// Empty selector
    Empty,
    /// Unexpected character
    UnexpectedChar(char),
    /// Expected identifier
    ExpectedIdentifier,
    /// Invalid attribute syntax
    InvalidAttribute,
    /// Unclosed attribute bracket
    UnclosedAttribute,
    /// Attribute the harness cannot match on
    UnknownAttribute(String),
}

impl std::fmt::Display for SelectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty selector"),
            Self::UnexpectedChar(c) => write!(f, "unexpected character: '{c}'"),
            Self::ExpectedIdentifier => write!(f, "expected identifier"),
            Self::InvalidAttribute => write!(f, "invalid attribute syntax"),
            Self::UnclosedAttribute => write!(f, "unclosed attribute bracket"),
            Self::UnknownAttribute(name) => write!(f, "unsupported attribute: {name}"),
        }
    }
}

impl std::error::Error for SelectorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_shorthand() {
        assert_eq!(
            Selector::parse("#main-lamp").unwrap(),
            Selector::TestId("main-lamp".to_string())
        );
    }

    #[test]
    fn test_parse_test_id_attribute() {
        assert_eq!(
            Selector::parse("[data-testid='size-small']").unwrap(),
            Selector::TestId("size-small".to_string())
        );
        assert_eq!(
            Selector::parse("[data-testid=\"x\"]").unwrap(),
            Selector::TestId("x".to_string())
        );
    }

    #[test]
    fn test_parse_label_and_role() {
        assert_eq!(
            Selector::parse("[aria-label='Toggle Theme']").unwrap(),
            Selector::Label("Toggle Theme".to_string())
        );
        assert_eq!(
            Selector::parse("  [role=switch]").unwrap(),
            Selector::Role("switch".to_string())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Selector::parse(""), Err(SelectorError::Empty));
        assert_eq!(Selector::parse("#"), Err(SelectorError::ExpectedIdentifier));
        assert_eq!(Selector::parse("Button"), Err(SelectorError::UnexpectedChar('B')));
        assert_eq!(Selector::parse("[=x]"), Err(SelectorError::InvalidAttribute));
        assert_eq!(
            Selector::parse("[role='switch'"),
            Err(SelectorError::UnclosedAttribute)
        );
        assert_eq!(
            Selector::parse("[href='x']"),
            Err(SelectorError::UnknownAttribute("href".to_string()))
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(SelectorError::Empty.to_string(), "empty selector");
        assert_eq!(
            SelectorError::UnexpectedChar('x').to_string(),
            "unexpected character: 'x'"
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn id_shorthand_and_attribute_agree(id in "[a-z][a-z0-9_-]{0,15}") {
                let short = Selector::parse(&format!("#{id}")).unwrap();
                let long = Selector::parse(&format!("[data-testid='{id}']")).unwrap();
                prop_assert_eq!(short, long);
            }

            #[test]
            fn parse_never_panics(input in "\\PC{0,24}") {
                let _ = Selector::parse(&input);
            }
        }
    }
}
