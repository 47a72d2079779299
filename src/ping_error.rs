use std::{error::Error, fmt, io};

pub type GenericError = Box<dyn Error + Send + Sync + 'static>;

pub type PingResult<T> = std::result::Result<T, PingError>;

#[derive(Debug)]
pub enum PingError {
    /// The raw socket could not be created, or the target did not resolve to IPv4.
    ChannelOpen(io::Error),
    /// Sending the request or reading the reply failed for a reason other than the deadline.
    Transport(io::Error),
    /// No reply arrived before the read deadline.
    Timeout,
    /// A reply arrived but it is not an ICMP echo reply.
    ProtocolMismatch(String),
}

impl PingError {
    pub(crate) fn from_read_error(error: io::Error) -> PingError {
        match error.kind() {
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => PingError::Timeout,
            _ => PingError::Transport(error),
        }
    }
}

impl fmt::Display for PingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "PingError")?;
        match self {
            PingError::ChannelOpen(e) => write!(f, ": could not open ICMP channel: {e}"),
            PingError::Transport(e) => write!(f, ": transport failure: {e}"),
            PingError::Timeout => write!(f, ": timed out waiting for echo reply"),
            PingError::ProtocolMismatch(message) => write!(f, ": {message}"),
        }
    }
}

impl Error for PingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PingError::ChannelOpen(e) | PingError::Transport(e) => Some(e),
            PingError::Timeout | PingError::ProtocolMismatch(_) => None,
        }
    }
}
