use clap::Parser;
use std::path::PathBuf;

/// Process configuration, parsed from the command line.
///
/// There is no global options state; the parsed value is handed to the
/// listener, which passes the directory on to the file routes.
#[derive(Parser, Debug, Clone)]
#[command(name = "lantern", about = "Minimal asynchronous HTTP/1.1 server")]
pub struct Config {
    /// Base directory for the /files/ routes. When absent those routes
    /// are not registered at all.
    #[arg(long)]
    pub directory: Option<PathBuf>,

    /// Port to listen on.
    #[arg(long, default_value_t = 4221)]
    pub port: u16,
}
