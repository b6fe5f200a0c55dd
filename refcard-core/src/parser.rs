//! The extractor seam: one trait every schedule format implements.

use crate::error::ParseError;
use crate::raw::RawGame;

/// Non-fatal findings collected while parsing (skipped rows, fallbacks).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub warnings: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and echo it to the debug log.
    pub fn warn(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        log::debug!("{msg}");
        self.warnings.push(msg);
    }

    /// Record "skipped N <what>" when `count` is non-zero.
    pub fn skipped(&mut self, count: usize, what: &str) {
        if count > 0 {
            self.warn(format!("Skipped {count} {what}"));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Trait for turning one provider's schedule text into raw game records.
///
/// Implementors must not fail on recoverable problems: malformed lines are
/// skipped and text with no games yields an empty list. An `Err` is reserved
/// for input the parser cannot work with at all; the registry catches it and
/// reports it as an error message.
pub trait ScheduleParser: Send + Sync {
    /// Parse text, recording skipped rows and other findings in `diagnostics`.
    fn parse_with_diagnostics(
        &self,
        text: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<RawGame>, ParseError>;

    /// Parse text, discarding diagnostics.
    fn parse(&self, text: &str) -> Result<Vec<RawGame>, ParseError> {
        self.parse_with_diagnostics(text, &mut Diagnostics::new())
    }

    /// Registry key used when the parser is registered without an explicit key.
    fn key(&self) -> &str;

    /// Human-readable name for parser pickers.
    fn display_name(&self) -> &str;

    /// One-line description of the layout this parser expects.
    fn description(&self) -> &str {
        ""
    }
}

/// A [`ScheduleParser`] backed by a closure.
///
/// Lets callers register ad-hoc extractors without declaring a type.
pub struct ParserFn<F> {
    key: String,
    name: String,
    f: F,
}

impl<F> ParserFn<F>
where
    F: Fn(&str) -> Result<Vec<RawGame>, ParseError> + Send + Sync,
{
    pub fn new(key: impl Into<String>, name: impl Into<String>, f: F) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            f,
        }
    }
}

impl<F> ScheduleParser for ParserFn<F>
where
    F: Fn(&str) -> Result<Vec<RawGame>, ParseError> + Send + Sync,
{
    fn parse_with_diagnostics(
        &self,
        text: &str,
        _diagnostics: &mut Diagnostics,
    ) -> Result<Vec<RawGame>, ParseError> {
        (self.f)(text)
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
