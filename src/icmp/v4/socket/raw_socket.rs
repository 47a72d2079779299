use super::{TSocket, TSocketFactory};
use socket2::{Domain, Protocol, SockAddr, Type};
use std::io::{self, Read};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Raw ICMPv4 socket connected to a single peer.
///
/// Note: raw sockets require root privileges (or `CAP_NET_RAW`).
pub struct RawSocket {
    socket: socket2::Socket,
}

impl RawSocket {
    pub fn connect(addr: Ipv4Addr) -> Result<Self, io::Error> {
        tracing::trace!("creating RawSocket to {}", addr);
        let socket = socket2::Socket::new(Domain::IPV4, Type::RAW, Some(Protocol::ICMPV4))?;
        socket.connect(&SockAddr::from(SocketAddr::new(IpAddr::V4(addr), 0)))?;
        Ok(RawSocket { socket })
    }
}

impl TSocket for RawSocket {
    fn send(&self, buf: &[u8]) -> io::Result<usize> {
        self.socket.send(buf)
    }

    fn recv(&self, buf: &mut [u8]) -> io::Result<usize> {
        // On a RAW socket we get the whole IP packet.
        (&self.socket).read(buf)
    }

    fn set_read_timeout(&self, timeout: Duration) -> io::Result<()> {
        self.socket.set_read_timeout(Some(timeout))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RawSocketFactory;

impl TSocketFactory for RawSocketFactory {
    type Socket = RawSocket;

    fn open(&self, addr: Ipv4Addr) -> io::Result<RawSocket> {
        RawSocket::connect(addr)
    }
}
