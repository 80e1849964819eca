use std::{error::Error as StdError, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Timeout,
    Connect,
    Request,
    Body,
    Decode,
    Status,
    Unknown,
}

impl TransportErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Connect => "connect",
            Self::Request => "request",
            Self::Body => "body",
            Self::Decode => "decode",
            Self::Status => "status",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of the single outbound completion call.
///
/// Status and status text are carried exactly as the upstream reported them; the gateway does not
/// distinguish causes when surfacing them.
#[derive(Debug)]
pub struct TransportError {
    kind: TransportErrorKind,
    status: Option<u16>,
    status_text: String,
    source: Option<anyhow::Error>,
}

impl TransportError {
    pub fn status_error(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            kind: TransportErrorKind::Status,
            status: Some(status),
            status_text: status_text.into(),
            source: None,
        }
    }

    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: None,
            status_text: message.into(),
            source: None,
        }
    }

    pub fn with_status(mut self, status: Option<u16>) -> Self {
        self.status = status;
        self
    }

    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn kind(&self) -> TransportErrorKind {
        self.kind
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.status) {
            (TransportErrorKind::Status, Some(status)) => {
                write!(f, "upstream completion error: {} {}", status, self.status_text)
            }
            (kind, Some(status)) => write!(
                f,
                "upstream completion error ({}): {} {}",
                kind, status, self.status_text
            ),
            (kind, None) => write!(f, "upstream completion error ({}): {}", kind, self.status_text),
        }
    }
}

impl StdError for TransportError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}
