use std::fmt;
use std::time::Duration;

/// Counters and round-trip times accumulated over one run.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PingStatistics {
    transmitted: usize,
    received: usize,
    rtts: Vec<Duration>,
}

impl PingStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_transmitted(&mut self) {
        self.transmitted += 1;
    }

    pub fn add_received(&mut self, rtt: Duration) {
        self.received += 1;
        self.rtts.push(rtt);
    }

    pub fn transmitted(&self) -> usize {
        self.transmitted
    }

    pub fn received(&self) -> usize {
        self.received
    }

    /// Round-trip times of the successful pings, in send order.
    pub fn rtts(&self) -> &[Duration] {
        &self.rtts
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn loss_percent(&self) -> f64 {
        if self.transmitted == 0 {
            return 0.0;
        }
        (self.transmitted - self.received) as f64 / self.transmitted as f64 * 100.0
    }

    pub fn min(&self) -> Option<Duration> {
        self.rtts.iter().min().copied()
    }

    pub fn max(&self) -> Option<Duration> {
        self.rtts.iter().max().copied()
    }

    /// Mean round-trip time, truncated to whole nanoseconds.
    pub fn avg(&self) -> Option<Duration> {
        let count = u32::try_from(self.rtts.len()).ok().filter(|count| *count > 0)?;
        let total: Duration = self.rtts.iter().sum();
        Some(total / count)
    }
}

impl fmt::Display for PingStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} packets transmitted, {} received, {:.1}% packet loss",
            self.transmitted,
            self.received,
            self.loss_percent()
        )?;
        if let (Some(min), Some(avg), Some(max)) = (self.min(), self.avg(), self.max()) {
            writeln!(f, "rtt min/avg/max = {min:?}/{avg:?}/{max:?}")?;
        }
        Ok(())
    }
}
