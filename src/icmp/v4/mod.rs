mod checksum;
pub use checksum::checksum;

mod echo_reply;
pub(crate) use echo_reply::EchoReply;

mod echo_request;
pub use echo_request::EchoRequest;

mod icmpv4;
pub use icmpv4::send_ping;

mod sequence_number;
pub use sequence_number::SequenceNumber;

pub mod socket;
pub use socket::raw_socket::{RawSocket, RawSocketFactory};
pub use socket::{TSocket, TSocketFactory};

mod ttl;
pub use ttl::Ttl;
