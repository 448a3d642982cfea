//! filewire Client Binary
//!
//! Connects to a file server and reads commands from standard input.

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use filewire::{CommandTable, Config, Connection, Console, Dispatcher, Session};
use tracing_subscriber::{fmt, EnvFilter};

/// filewire client
#[derive(Parser, Debug)]
#[command(name = "filewire")]
#[command(about = "Interactive client for a remote file server")]
#[command(version)]
struct Args {
    /// Server host name or address
    host: String,

    /// Server port
    port: u16,

    /// Logging directives, e.g. "filewire=debug" (RUST_LOG takes precedence)
    #[arg(short, long)]
    debug: Option<String>,

    /// Local directory that get writes into and put reads from
    #[arg(short = 'C', long, default_value = ".")]
    directory: PathBuf,

    /// Largest payload accepted or sent, in MB
    #[arg(long, default_value_t = 64, value_parser = clap::value_parser!(u32).range(1..4096))]
    max_payload_mb: u32,
}

fn main() {
    let args = Args::parse();

    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(args.debug.as_deref().unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    tracing::info!("filewire client v{}", filewire::VERSION);

    // Build config from args
    let config = Config::builder()
        .host(&args.host)
        .port(args.port)
        .local_dir(&args.directory)
        .max_payload_size(args.max_payload_mb * 1024 * 1024)
        .build();

    if let Err(e) = config.validate() {
        eprintln!("{}: {}", program_name(), e);
        std::process::exit(1);
    }

    let connection = match Connection::connect(&config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to connect: {}", e);
            eprintln!("{}: {}", program_name(), e);
            std::process::exit(1);
        }
    };

    let console = Console::new(io::stdout(), io::stderr(), program_name());
    let dispatcher = Dispatcher::new(connection, console, &config);
    let mut session = Session::new(io::stdin().lock(), CommandTable::new(), dispatcher);

    if let Err(e) = session.run() {
        tracing::error!("Session error: {}", e);
        eprintln!("{}: {}", program_name(), e);
        std::process::exit(1);
    }
}

/// Base name of the running executable
fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|p| Path::new(p).file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "filewire".to_string())
}
