use std::{io, net::Ipv4Addr, time::Duration};

pub(crate) mod raw_socket;

/// A channel carrying ICMPv4 messages to and from one connected peer.
pub trait TSocket {
    fn send(&self, buf: &[u8]) -> io::Result<usize>;
    /// Reads one datagram, IPv4 header included.
    fn recv(&self, buf: &mut [u8]) -> io::Result<usize>;
    fn set_read_timeout(&self, timeout: Duration) -> io::Result<()>;
}

/// Opens a fresh [`TSocket`] for every echo cycle. Dropping the socket releases it.
pub trait TSocketFactory {
    type Socket: TSocket;

    fn open(&self, addr: Ipv4Addr) -> io::Result<Self::Socket>;
}
