use crate::config::PingConfig;
use crate::icmp::v4::{EchoReply, EchoRequest, SequenceNumber, TSocket, TSocketFactory};
use crate::ping_error::{PingError, PingResult};
use crate::utils::lookup_host_v4;
use crate::PingOutput;
use std::io;
use std::time::{Duration, Instant};

/// One echo cycle: open a channel to `target`, send a single echo request and wait at most
/// `config.timeout` for the answer, read into a buffer of `config.receive_buffer_size` bytes.
///
/// There is no retry. The channel is dropped, and thereby closed, on every return path.
pub fn send_ping<F>(
    socket_factory: &F,
    target: &str,
    identifier: u16,
    sequence_number: SequenceNumber,
    config: &PingConfig,
) -> PingResult<PingOutput>
where
    F: TSocketFactory,
{
    let ip_addr = lookup_host_v4(target).map_err(|e| {
        tracing::warn!("could not resolve {} to an IPv4 address: {}", target, e);
        PingError::ChannelOpen(e)
    })?;
    let socket = socket_factory.open(ip_addr).map_err(|e| {
        tracing::warn!("could not open ICMP channel to {}: {}", ip_addr, e);
        PingError::ChannelOpen(e)
    })?;

    let request = EchoRequest::new(identifier, sequence_number)
        .to_bytes()
        .ok_or_else(|| PingError::Transport(io::Error::new(io::ErrorKind::InvalidInput, "could not create ICMP package")))?;

    let start_time = Instant::now();
    socket.send(&request).map_err(PingError::Transport)?;
    tracing::trace!("echo request {} sent to {}", sequence_number, ip_addr);

    socket.set_read_timeout(config.timeout).map_err(PingError::Transport)?;
    let deadline = Instant::now() + config.timeout;
    let mut buf = vec![0u8; config.receive_buffer_size];
    let n = loop {
        let n = socket.recv(&mut buf).map_err(PingError::from_read_error)?;
        // On loopback the raw socket also sees the request itself.
        if !EchoReply::is_request_echo(&buf[..n], &request) {
            break n;
        }
        tracing::trace!("skipping looped back echo request {}", sequence_number);
        let remaining = remaining_read_timeout(deadline, Instant::now()).ok_or(PingError::Timeout)?;
        socket.set_read_timeout(remaining).map_err(PingError::Transport)?;
    };
    let ping_duration = start_time.elapsed();

    let reply = EchoReply::parse(&buf[..n])?;
    if reply.identifier != identifier || reply.sequence_number != u16::from(sequence_number) {
        tracing::warn!(
            "echo reply carries identifier {} and sequence number {}, expected {} and {}",
            reply.identifier,
            reply.sequence_number,
            identifier,
            sequence_number
        );
    }
    tracing::trace!("echo reply {} received after {:?}", sequence_number, ping_duration);

    Ok(PingOutput {
        package_size: reply.icmp_size,
        ip_addr,
        ttl: reply.ttl,
        sequence_number: sequence_number.into(),
        ping_duration,
    })
}

/// Time left until `deadline`, or `None` once less than a microsecond remains.
///
/// A read timeout below one microsecond becomes a zero `timeval`, which blocks without limit.
fn remaining_read_timeout(deadline: Instant, now: Instant) -> Option<Duration> {
    let remaining = deadline.saturating_duration_since(now);
    if remaining < Duration::from_micros(1) {
        return None;
    }
    Some(remaining)
}
