//! Error types for configuration loading and positioning

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors raised while building or loading a placement configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Position string that is not `direction[-alignment]`
    #[error("invalid position '{input}': {reason}")]
    InvalidPosition {
        input: String,
        reason: String,
        span: Option<Span>,
    },

    /// Fallback order that is not a permutation starting with its key
    #[error("invalid {kind} flip order for '{key}': {reason}")]
    InvalidFlipOrder {
        kind: &'static str,
        key: String,
        reason: String,
        span: Option<Span>,
    },

    /// Margin or padding below zero, or not a finite number
    #[error("{name} must be a finite non-negative number, got {value}")]
    InvalidLength {
        name: &'static str,
        value: f64,
        span: Option<Span>,
    },

    /// Box table with inverted edges or missing extent
    #[error("invalid box '{name}': {reason}")]
    InvalidRect {
        name: String,
        reason: String,
        span: Option<Span>,
    },
}

impl ConfigError {
    pub fn invalid_position(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPosition {
            input: input.into(),
            reason: reason.into(),
            span: None,
        }
    }

    pub fn invalid_flip_order(
        kind: &'static str,
        key: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidFlipOrder {
            kind,
            key: key.into(),
            reason: reason.into(),
            span: None,
        }
    }

    pub fn invalid_length(name: &'static str, value: f64) -> Self {
        Self::InvalidLength {
            name,
            value,
            span: None,
        }
    }

    pub fn invalid_rect(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRect {
            name: name.into(),
            reason: reason.into(),
            span: None,
        }
    }

    /// Attach a source span, keeping any span already present
    pub fn with_span(mut self, at: Span) -> Self {
        match &mut self {
            Self::InvalidPosition { span, .. }
            | Self::InvalidFlipOrder { span, .. }
            | Self::InvalidLength { span, .. }
            | Self::InvalidRect { span, .. } => {
                span.get_or_insert(at);
            }
            Self::Io(_) | Self::Toml(_) => {}
        }
        self
    }

    /// Get the source span if available
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Toml(e) => e.span(),
            Self::InvalidPosition { span, .. }
            | Self::InvalidFlipOrder { span, .. }
            | Self::InvalidLength { span, .. }
            | Self::InvalidRect { span, .. } => span.clone(),
            Self::Io(_) => None,
        }
    }

    /// Short message for the diagnostic label
    fn label_message(&self) -> String {
        match self {
            Self::Toml(e) => e.message().to_string(),
            other => other.to_string(),
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a span fall back to their plain display form.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span() else {
            return format!("Error: {}", self);
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.label_message())
            .with_label(
                Label::new((filename, span))
                    .with_message(self.label_message())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("Error: {}", self),
        }
    }
}

/// Errors raised by the positioning adapter
#[derive(Error, Debug)]
pub enum PlaceError {
    /// `update` called before a reference or popper was attached
    #[error("cannot position: no {0} element attached")]
    MissingElement(&'static str),

    /// Option overrides that failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_position_display() {
        let err = ConfigError::invalid_position("sideways", "unknown direction");
        assert_eq!(
            err.to_string(),
            "invalid position 'sideways': unknown direction"
        );
        assert_eq!(err.span(), None);
    }

    #[test]
    fn test_with_span_keeps_first() {
        let err = ConfigError::invalid_length("margin", -1.0)
            .with_span(3..5)
            .with_span(10..12);
        assert_eq!(err.span(), Some(3..5));
    }

    #[test]
    fn test_missing_element_display() {
        let err = PlaceError::MissingElement("reference");
        assert!(err.to_string().contains("no reference element"));
    }

    #[test]
    fn test_format_without_span_is_plain() {
        let err = ConfigError::invalid_flip_order("direction", "top", "too short");
        assert_eq!(
            err.format("", "scene.toml"),
            "Error: invalid direction flip order for 'top': too short"
        );
    }

    #[test]
    fn test_format_with_span_mentions_file() {
        let source = "margin = -4\n";
        let err = ConfigError::invalid_length("margin", -4.0).with_span(9..11);
        let report = err.format(source, "scene.toml");
        assert!(report.contains("scene.toml"));
        assert!(report.contains("margin must be a finite non-negative number"));
    }
}
