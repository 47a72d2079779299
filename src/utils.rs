use std::io;
use std::net::{IpAddr, Ipv4Addr, ToSocketAddrs};

/// Resolves `host` (an IPv4 literal or a hostname) to its first IPv4 address.
pub fn lookup_host_v4(host: &str) -> io::Result<Ipv4Addr> {
    if let Ok(ipv4) = host.parse::<Ipv4Addr>() {
        return Ok(ipv4);
    }
    (host, 0)
        .to_socket_addrs()?
        .find_map(|addr| match addr.ip() {
            IpAddr::V4(ipv4) => Some(ipv4),
            IpAddr::V6(_) => None,
        })
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("could not resolve {host} to IPv4")))
}
