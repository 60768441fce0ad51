use thiserror::Error;

pub type AxesResult<T> = Result<T, AxesError>;

#[derive(Debug, Error)]
pub enum AxesError {
    #[error("Missing required WCS keyword: {keyword}")]
    MissingKeyword { keyword: String },

    #[error("Frame not supported: {ctype1}/{ctype2}")]
    FrameNotSupported { ctype1: String, ctype2: String },

    #[error("Unknown frame: {name}")]
    UnknownFrame { name: String },

    #[error("Step magnitude must be positive and finite, got {value}")]
    InvalidMagnitude { value: f64 },

    #[error("Span of {span} exceeds the largest breakpoint ({limit})")]
    SpanOutOfRange { span: String, limit: String },

    #[error("Invalid step table: {message}")]
    InvalidTable { message: String },
}

impl AxesError {
    pub fn missing_keyword(keyword: impl Into<String>) -> Self {
        Self::MissingKeyword {
            keyword: keyword.into(),
        }
    }

    pub fn frame_not_supported(ctype1: impl Into<String>, ctype2: impl Into<String>) -> Self {
        Self::FrameNotSupported {
            ctype1: ctype1.into(),
            ctype2: ctype2.into(),
        }
    }

    pub fn unknown_frame(name: impl Into<String>) -> Self {
        Self::UnknownFrame { name: name.into() }
    }

    pub fn invalid_magnitude(value: f64) -> Self {
        Self::InvalidMagnitude { value }
    }

    pub fn span_out_of_range(span: impl Into<String>, limit: impl Into<String>) -> Self {
        Self::SpanOutOfRange {
            span: span.into(),
            limit: limit.into(),
        }
    }

    pub fn invalid_table(message: impl Into<String>) -> Self {
        Self::InvalidTable {
            message: message.into(),
        }
    }
}
