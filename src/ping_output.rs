use crate::icmp::v4::Ttl;
use std::net::Ipv4Addr;
use std::time::Duration;

/// A successful echo cycle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PingOutput {
    pub package_size: usize,
    pub ip_addr: Ipv4Addr,
    pub ttl: Ttl,
    pub sequence_number: u16,
    pub ping_duration: Duration,
}
