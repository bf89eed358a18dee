//! Render configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Width a tab counts for when measuring lines.
pub const TAB_WIDTH: usize = 4;

/// Indentation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indent {
    /// `n` spaces, 1 to 8.
    Spaces(u8),
    /// One tab.
    Tab,
}

impl Default for Indent {
    fn default() -> Self {
        Self::Spaces(2)
    }
}

impl Indent {
    /// Returns the text of one indentation level.
    #[must_use]
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(n) => " ".repeat(usize::from(*n)),
            Self::Tab => String::from("\t"),
        }
    }

    /// Returns the display width of one indentation level.
    #[must_use]
    pub fn width(&self) -> usize {
        match self {
            Self::Spaces(n) => usize::from(*n),
            Self::Tab => TAB_WIDTH,
        }
    }

    /// Checks the space count.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidIndent` outside 1..=8.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::Spaces(n) if !(1..=8).contains(n) => Err(ConfigError::InvalidIndent(*n)),
            _ => Ok(()),
        }
    }
}

impl FromStr for Indent {
    type Err = ConfigError;

    /// Parses `tab` or a space count such as `4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("tab") {
            return Ok(Self::Tab);
        }
        let n: u8 = s.parse().map_err(|_| ConfigError::UnknownOptionValue {
            option: "indent",
            value: s.to_string(),
        })?;
        let indent = Self::Spaces(n);
        indent.validate()?;
        Ok(indent)
    }
}

/// Case applied to reserved words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCase {
    /// Keep the source spelling.
    Preserve,
    /// UPPERCASE.
    #[default]
    Upper,
    /// lowercase.
    Lower,
}

impl KeywordCase {
    /// Returns the option value name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Preserve => "preserve",
            Self::Upper => "upper",
            Self::Lower => "lower",
        }
    }
}

impl FromStr for KeywordCase {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" => Ok(Self::Preserve),
            "upper" => Ok(Self::Upper),
            "lower" => Ok(Self::Lower),
            _ => Err(ConfigError::UnknownOptionValue {
                option: "keyword_case",
                value: s.to_string(),
            }),
        }
    }
}

/// Options controlling the output layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// Indentation unit.
    pub indent: Indent,
    /// Case of reserved words.
    pub keyword_case: KeywordCase,
    /// Preferred maximum line width. Lines that cannot be broken may exceed it.
    pub line_width: usize,
    /// Blank lines between statements.
    pub lines_between_statements: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: Indent::default(),
            keyword_case: KeywordCase::default(),
            line_width: 50,
            lines_between_statements: 1,
        }
    }
}

impl FormatOptions {
    /// Sets the indentation unit.
    #[must_use]
    pub const fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the keyword case.
    #[must_use]
    pub const fn with_keyword_case(mut self, keyword_case: KeywordCase) -> Self {
        self.keyword_case = keyword_case;
        self
    }

    /// Sets the line width hint.
    #[must_use]
    pub const fn with_line_width(mut self, line_width: usize) -> Self {
        self.line_width = line_width;
        self
    }

    /// Sets the number of blank lines between statements.
    #[must_use]
    pub const fn with_lines_between_statements(mut self, lines: usize) -> Self {
        self.lines_between_statements = lines;
        self
    }

    /// Checks option ranges.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for an out-of-range indent or a zero width.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.indent.validate()?;
        if self.line_width == 0 {
            return Err(ConfigError::InvalidLineWidth);
        }
        Ok(())
    }

    /// Reads and validates options from a JSON document.
    ///
    /// Missing fields take their default values; unknown fields are errors.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the document is malformed or out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }
}
