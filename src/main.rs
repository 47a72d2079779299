use std::io::{self, Write};
use std::path::Path;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use ping_lite::cli::{self, Command};
use ping_lite::icmp::v4::RawSocketFactory;
use ping_lite::{GenericError, PingConfig};

fn main() -> Result<(), GenericError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let strings: Vec<String> = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()).collect();
    let command_name = strings
        .first()
        .and_then(|path| Path::new(path).file_name())
        .and_then(|name| name.to_str())
        .unwrap_or("ping-lite");
    let arguments: Vec<&str> = strings.iter().skip(1).map(String::as_str).collect();
    let command = Command::parse(command_name, &arguments);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::run(&command, RawSocketFactory, PingConfig::default(), &mut out)?;
    out.flush()?;

    Ok(())
}
