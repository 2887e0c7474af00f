//! Error types for address parsing and port assignment

use thiserror::Error;

/// Broad category of an [`AddressError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Text could not be turned into a well-formed address.
    Format,
    /// A value of the wrong type was handed to the port setter.
    Type,
    /// A port outside of the valid range was handed to the port setter.
    Range,
}

/// Errors raised by the codec, the constructors and the port setter.
///
/// Validators never produce these, they answer with `false` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Invalid IPv4 address format; segment '{0}' is not an integer")]
    InvalidIpv4Segment(String),

    #[error("Invalid IPv4 address format; expected 4 segments, found {0}")]
    Ipv4SegmentCount(usize),

    #[error("Invalid IPv6 address format; only one zero-skip allowed")]
    MultipleElisions,

    #[error("Invalid IPv6 address format; address contains invalid characters ('{0}')")]
    InvalidCharacters(String),

    #[error("Invalid IPv6 address format; expected 8 segments, found {0}")]
    Ipv6SegmentCount(usize),

    /// Carries the hextet as written, which may be wider than any integer type.
    #[error("Invalid IPv6 address format; segment max value passed ({0} > FFFF)")]
    SegmentTooLarge(String),

    #[error("Invalid IPv6 address format; segment min value passed ({0} < 0)")]
    SegmentTooSmall(String),

    /// The port embedded in address text is not an integer.
    #[error("Invalid address format; embedded port '{0}' is not an integer")]
    InvalidPort(String),

    #[error("No valid address representation exists for {0}")]
    NoRepresentation(String),

    #[error("Port '{0}' is not a valid integer")]
    PortNotInteger(String),

    #[error("Port number '{0}' not in valid range (0-65535)")]
    PortOutOfRange(String),
}

impl AddressError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AddressError::PortNotInteger(_) => ErrorKind::Type,
            AddressError::PortOutOfRange(_) => ErrorKind::Range,
            _ => ErrorKind::Format,
        }
    }
}

/// Result type for address operations
pub type AddressResult<T> = Result<T, AddressError>;

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
