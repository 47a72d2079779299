use crate::config::PingConfig;
use crate::icmp::v4::TSocketFactory;
use crate::{PingRunner, PingStatistics};
use argh::{EarlyExit, FromArgs};
use std::io::{self, Write};

pub const USAGE: &str = "Usage: ping-lite <IPv4-address>";

#[derive(FromArgs, Debug)]
/// ping-lite - send four ICMP ECHO_REQUEST packets to an IPv4 host
pub struct Args {
    #[argh(positional)]
    /// IPv4 address or hostname
    pub addresses: Vec<String>,
}

impl Args {
    /// The ping target, if exactly one was given.
    pub fn target(&self) -> Option<&str> {
        match self.addresses.as_slice() {
            [target] => Some(target.as_str()),
            _ => None,
        }
    }
}

/// What the command line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Ping(String),
    Help(String),
    Usage,
}

impl Command {
    /// Parses the arguments following `command_name`.
    ///
    /// Arguments `argh` refuses, such as `-x`, still count as addresses, so a single one is
    /// pinged and any other number of them yields [`Command::Usage`].
    pub fn parse(command_name: &str, arguments: &[&str]) -> Command {
        match Args::from_args(&[command_name], arguments) {
            Ok(args) => args.target().map_or(Command::Usage, |target| Command::Ping(target.to_owned())),
            Err(EarlyExit { output, status: Ok(()) }) => Command::Help(output),
            Err(EarlyExit { status: Err(()), .. }) => match arguments {
                [target] => Command::Ping((*target).to_owned()),
                _ => Command::Usage,
            },
        }
    }
}

/// Pings the target of a [`Command::Ping`]; otherwise prints help or the usage line without network I/O.
pub fn run<F, W>(
    command: &Command,
    socket_factory: F,
    config: PingConfig,
    out: &mut W,
) -> io::Result<Option<PingStatistics>>
where
    F: TSocketFactory,
    W: Write,
{
    match command {
        Command::Ping(target) => PingRunner::new(socket_factory, config).run(target, out).map(Some),
        Command::Help(help) => {
            writeln!(out, "{help}")?;
            Ok(None)
        }
        Command::Usage => {
            writeln!(out, "{USAGE}")?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icmp::v4::socket::tests::{OnReceive, SocketFactoryMock};
    use std::time::Duration;

    fn args(positional: &[&str]) -> Args {
        Args::from_args(&["ping-lite"], positional).unwrap()
    }

    fn config() -> PingConfig {
        PingConfig { interval: Duration::ZERO, ..PingConfig::default() }
    }

    #[test]
    fn one_target() {
        assert_eq!(Some("192.0.2.1"), args(&["192.0.2.1"]).target());
    }

    #[test]
    fn no_target() {
        assert_eq!(None, args(&[]).target());
    }

    #[test]
    fn two_targets() {
        assert_eq!(None, args(&["192.0.2.1", "192.0.2.2"]).target());
    }

    #[test]
    fn wrong_argument_count_prints_usage_without_network_io() {
        let cases: [&[&str]; 4] = [&[], &["192.0.2.1", "192.0.2.2"], &["-x", "192.0.2.1"], &["-x", "-y"]];
        for positional in cases {
            let socket_factory = SocketFactoryMock::with_receives(&[OnReceive::ReturnDefault]);
            let mut out = Vec::new();

            let command = Command::parse("ping-lite", positional);
            let statistics = run(&command, socket_factory.clone(), config(), &mut out).unwrap();

            assert!(statistics.is_none());
            assert_eq!("Usage: ping-lite <IPv4-address>\n", String::from_utf8(out).unwrap());
            socket_factory.should_open_number_of_sockets(0).should_send_number_of_messages(0);
        }
    }

    #[test]
    fn one_target_pings() {
        let socket_factory = SocketFactoryMock::with_receives(&[OnReceive::ReturnDefault; 4]);
        let mut out = Vec::new();

        let command = Command::parse("ping-lite", &["127.0.0.1"]);
        let statistics = run(&command, socket_factory.clone(), config(), &mut out).unwrap().unwrap();

        assert_eq!(4, statistics.received());
        socket_factory.should_open_number_of_sockets(4);
    }

    #[test]
    fn parse_single_address() {
        assert_eq!(Command::Ping("192.0.2.1".to_owned()), Command::parse("ping-lite", &["192.0.2.1"]));
    }

    #[test]
    fn parse_wrong_argument_count() {
        assert_eq!(Command::Usage, Command::parse("ping-lite", &[]));
        assert_eq!(Command::Usage, Command::parse("ping-lite", &["192.0.2.1", "192.0.2.2"]));
    }

    #[test]
    fn dash_argument_with_address_is_usage() {
        assert_eq!(Command::Usage, Command::parse("ping-lite", &["-x", "192.0.2.1"]));
    }

    #[test]
    fn single_dash_argument_is_a_target() {
        assert_eq!(Command::Ping("-x".to_owned()), Command::parse("ping-lite", &["-x"]));
    }

    #[test]
    fn help_is_printed_without_network_io() {
        let command = Command::parse("ping-lite", &["--help"]);
        let socket_factory = SocketFactoryMock::with_receives(&[OnReceive::ReturnDefault]);
        let mut out = Vec::new();

        let statistics = run(&command, socket_factory.clone(), config(), &mut out).unwrap();

        assert!(statistics.is_none());
        assert!(String::from_utf8(out).unwrap().starts_with("Usage: ping-lite"));
        socket_factory.should_open_number_of_sockets(0);
    }

    #[test]
    fn single_dash_argument_goes_through_ping_path() {
        let socket_factory = SocketFactoryMock::with_receives(&[OnReceive::ReturnDefault; 4]);
        let mut out = Vec::new();

        let statistics = run(&Command::parse("ping-lite", &["-x"]), socket_factory.clone(), config(), &mut out)
            .unwrap()
            .unwrap();

        assert_eq!(4, statistics.transmitted());
        assert_eq!(0, statistics.received());
        assert!(String::from_utf8(out).unwrap().starts_with("PING -x:"));
    }
}
