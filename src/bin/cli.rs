//! dbglink CLI Client
//!
//! Command-line interface for ad-hoc interaction with a debug agent.

use clap::{Parser, Subcommand};
use dbglink::RpcClient;
use tracing_subscriber::{fmt, EnvFilter};

/// dbglink CLI
#[derive(Parser, Debug)]
#[command(name = "dbglink-cli")]
#[command(about = "Send commands to a debug agent over its RPC port")]
#[command(version)]
struct Args {
    /// Agent host
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Agent TCP port
    #[arg(short, long, default_value = "5073")]
    port: u16,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Liveness check: the agent replies "pong", or echoes the message back
    Ping {
        /// Message for the agent to echo
        message: Option<String>,
    },

    /// Send an arbitrary command
    Send {
        /// Command name
        command: String,

        /// Parameter bytes, passed through verbatim
        params: Option<String>,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,dbglink=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let client = RpcClient::new(args.host, args.port);
    if let Err(e) = client.connect() {
        tracing::error!("Failed to connect: {}", e);
        std::process::exit(1);
    }

    let result = match &args.command {
        Commands::Ping { message } => {
            client.send_command("ping", message.as_deref().map(str::as_bytes))
        }
        Commands::Send { command, params } => {
            client.send_command(command, params.as_deref().map(str::as_bytes))
        }
    };

    let status = match result {
        Ok(response) => {
            println!("{response}");
            0
        }
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            1
        }
    };

    client.disconnect();
    std::process::exit(status);
}
