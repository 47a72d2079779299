use std::time::Duration;

pub const ICMP_ECHO_REQUEST: u8 = 8;
pub const ICMP_ECHO_REPLY: u8 = 0;
pub const ICMP_HEADER_SIZE: usize = 8;

pub const DEFAULT_COUNT: u16 = 4;
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);
pub const RECEIVE_BUFFER_SIZE: usize = 1024;

#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PingConfig {
    /// Number of echo requests sent per run.
    pub count: u16,
    /// Pause between two consecutive echo requests.
    pub interval: Duration,
    /// Read deadline for a single echo reply.
    pub timeout: Duration,
    /// Size of the buffer a reply datagram, IPv4 header included, is read into.
    pub receive_buffer_size: usize,
}

impl Default for PingConfig {
    fn default() -> Self {
        PingConfig {
            count: DEFAULT_COUNT,
            interval: DEFAULT_INTERVAL,
            timeout: DEFAULT_TIMEOUT,
            receive_buffer_size: RECEIVE_BUFFER_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PingConfig::default();
        assert_eq!(4, config.count);
        assert_eq!(Duration::from_secs(1), config.interval);
        assert_eq!(Duration::from_secs(3), config.timeout);
        assert_eq!(1024, config.receive_buffer_size);
    }
}
