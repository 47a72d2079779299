use crate::config::PingConfig;
use crate::icmp::v4::{send_ping, SequenceNumber, TSocketFactory};
use crate::PingStatistics;
use std::io::{self, Write};

/// Identifier shared by every echo request of this process.
#[allow(clippy::cast_possible_truncation)]
pub fn process_identifier() -> u16 {
    (std::process::id() & 0xFFFF) as u16
}

/// Sends `config.count` echo requests one after the other and reports on `out`.
pub struct PingRunner<F> {
    socket_factory: F,
    config: PingConfig,
    identifier: u16,
}

impl<F> PingRunner<F>
where
    F: TSocketFactory,
{
    pub fn new(socket_factory: F, config: PingConfig) -> Self {
        Self::with_identifier(socket_factory, config, process_identifier())
    }

    pub fn with_identifier(socket_factory: F, config: PingConfig, identifier: u16) -> Self {
        PingRunner { socket_factory, config, identifier }
    }

    /// Errors of a single ping are reported and counted as loss; only failures writing to
    /// `out` end the run early.
    pub fn run<W: Write>(&self, target: &str, out: &mut W) -> io::Result<PingStatistics> {
        tracing::trace!("PingRunner start with count {} and identifier {}", self.config.count, self.identifier);
        writeln!(out, "PING {target}:")?;

        let mut statistics = PingStatistics::new();
        let mut sequence_number = SequenceNumber::start_value();
        for i in 0..self.config.count {
            if i > 0 {
                std::thread::sleep(self.config.interval);
            }

            let result = send_ping(&self.socket_factory, target, self.identifier, sequence_number, &self.config);
            statistics.add_transmitted();
            match result {
                Ok(output) => {
                    statistics.add_received(output.ping_duration);
                    writeln!(
                        out,
                        "Reply from {target}: bytes={} icmp_seq={} ttl={} time={:?}",
                        output.package_size, output.sequence_number, output.ttl, output.ping_duration
                    )?;
                }
                Err(e) => {
                    tracing::debug!("ping {} failed: {:?}", sequence_number, e);
                    writeln!(out, "Request timed out: {e}")?;
                }
            }
            sequence_number = sequence_number.next();
        }

        writeln!(out)?;
        writeln!(out, "--- {target} ping statistics ---")?;
        write!(out, "{statistics}")?;
        tracing::trace!("PingRunner end");
        Ok(statistics)
    }
}
