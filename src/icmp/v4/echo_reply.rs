use crate::config::{ICMP_ECHO_REPLY, ICMP_HEADER_SIZE};
use crate::icmp::v4::Ttl;
use crate::ping_error::{PingError, PingResult};
use pnet_packet::icmp::echo_reply::EchoReplyPacket;
use pnet_packet::ipv4::Ipv4Packet;

/// The parts of a received IPv4 datagram we report on.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct EchoReply {
    pub icmp_size: usize,
    pub ttl: Ttl,
    pub identifier: u16,
    pub sequence_number: u16,
}

impl EchoReply {
    /// Parses what a raw ICMPv4 socket delivers: an IPv4 header followed by the ICMP message.
    ///
    /// The ICMP message starts after the IHL-announced header length, so replies carrying
    /// IP options are handled as well as the common 20-byte header.
    pub(crate) fn parse(datagram: &[u8]) -> PingResult<EchoReply> {
        let ipv4_packet = Ipv4Packet::new(datagram)
            .ok_or_else(|| PingError::ProtocolMismatch(format!("reply too short ({} bytes)", datagram.len())))?;
        if ipv4_packet.get_version() != 4 {
            return Err(PingError::ProtocolMismatch(format!(
                "reply is not an IPv4 datagram (version {})",
                ipv4_packet.get_version()
            )));
        }

        let header_length = usize::from(ipv4_packet.get_header_length()) * 4;
        if header_length < Ipv4Packet::minimum_packet_size() || datagram.len() < header_length + ICMP_HEADER_SIZE {
            return Err(PingError::ProtocolMismatch(format!(
                "reply too short for IPv4 header of {header_length} bytes and ICMP header"
            )));
        }

        let icmp = &datagram[header_length..];
        let echo_reply_packet = EchoReplyPacket::new(icmp)
            .ok_or_else(|| PingError::ProtocolMismatch("could not read ICMP header".to_owned()))?;
        let icmp_type = echo_reply_packet.get_icmp_type().0;
        if icmp_type != ICMP_ECHO_REPLY {
            return Err(PingError::ProtocolMismatch(format!(
                "did not receive echo reply (ICMP type {icmp_type})"
            )));
        }

        Ok(EchoReply {
            icmp_size: icmp.len(),
            ttl: ipv4_packet.get_ttl().into(),
            identifier: echo_reply_packet.get_identifier(),
            sequence_number: echo_reply_packet.get_sequence_number(),
        })
    }

    /// True when `datagram` carries exactly the ICMP message `request`.
    pub(crate) fn is_request_echo(datagram: &[u8], request: &[u8]) -> bool {
        let Some(ipv4_packet) = Ipv4Packet::new(datagram) else {
            return false;
        };
        let header_length = usize::from(ipv4_packet.get_header_length()) * 4;
        datagram.get(header_length..) == Some(request)
    }
}
