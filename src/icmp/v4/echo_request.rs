use crate::config::{ICMP_ECHO_REQUEST, ICMP_HEADER_SIZE};
use crate::icmp::v4::{checksum, SequenceNumber};
use pnet_packet::icmp::echo_request::MutableEchoRequestPacket;
use pnet_packet::icmp::{IcmpCode, IcmpType};
use pnet_packet::Packet;

/// ICMPv4 echo request header without payload.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EchoRequest {
    pub identifier: u16,
    pub sequence_number: SequenceNumber,
}

impl EchoRequest {
    pub fn new(identifier: u16, sequence_number: SequenceNumber) -> Self {
        EchoRequest { identifier, sequence_number }
    }

    /// Wire layout: type, code, checksum, identifier, sequence number (big-endian).
    pub fn to_bytes(&self) -> Option<[u8; ICMP_HEADER_SIZE]> {
        let mut buf = [0u8; ICMP_HEADER_SIZE];
        {
            let mut package = MutableEchoRequestPacket::new(&mut buf)?;
            package.set_icmp_type(IcmpType::new(ICMP_ECHO_REQUEST));
            package.set_icmp_code(IcmpCode::new(0));
            package.set_identifier(self.identifier);
            package.set_sequence_number(self.sequence_number.into());
            package.set_checksum(0);
            let checksum = checksum(package.packet());
            package.set_checksum(checksum);
        }
        Some(buf)
    }
}
