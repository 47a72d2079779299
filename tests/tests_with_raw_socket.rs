use std::net::Ipv4Addr;
use std::time::Duration;

use more_asserts as ma;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use ping_lite::icmp::v4::{send_ping, RawSocketFactory, SequenceNumber};
use ping_lite::{PingConfig, PingRunner};

/*
* Note: Raw sockets work only with root privileges.
*/
#[test]
#[ignore = "needs root privileges for raw sockets"]
fn ping_localhost_with_raw_socket_succeeds() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::ERROR).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let output = send_ping(&RawSocketFactory, "127.0.0.1", 0x4242, SequenceNumber::start_value(), &PingConfig::default());

    let output = output.unwrap();
    assert_eq!(Ipv4Addr::new(127, 0, 0, 1), output.ip_addr);
    ma::assert_gt!(output.ping_duration, Duration::from_secs(0));
}

#[test]
#[ignore = "needs root privileges for raw sockets"]
fn ping_runner_against_localhost() {
    let config = PingConfig { interval: Duration::from_millis(10), ..PingConfig::default() };
    let ping_runner = PingRunner::new(RawSocketFactory, config);

    let statistics = ping_runner.run("127.0.0.1", &mut std::io::sink()).unwrap();

    assert_eq!(4, statistics.transmitted());
    ma::assert_ge!(statistics.received(), 1);
}
