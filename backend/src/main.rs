//! Retrotext CLI - serve or apply retro text transformations
//!
//! ```bash
//! retrotext serve                         # Start HTTP server (port from $PORT, default 5000)
//! retrotext transform l33t_speak "hello"  # Transform text from the command line
//! echo hello | retrotext transform rot13  # ... or from stdin
//! retrotext list                          # Show available transformations
//! ```

use clap::{Parser, Subcommand};
use retrotext::{
    logging, server, transformations_description, AppConfig, ServerError, Transformer,
    TransformerConfig,
};
use std::io::Read;

#[derive(Parser)]
#[command(name = "retrotext")]
#[command(about = "90s internet text effects: l33t speak, Morse, ROT13, zalgo and friends", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Interface to bind (default depends on APP_ENV)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (default: $PORT or 5000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Seed every randomized transformation
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Apply a transformation and print the result
    Transform {
        /// Transformation name (see `retrotext list`)
        transformation: String,

        /// Text to transform (default: read stdin)
        text: Option<String>,

        /// Seed for randomized transformations
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show available transformations
    List,
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { host, port, seed } => cmd_serve(host, port, seed).await,
        Commands::Transform {
            transformation,
            text,
            seed,
        } => cmd_transform(&transformation, text, seed),
        Commands::List => cmd_list(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(
    host: Option<String>,
    port: Option<u16>,
    seed: Option<u64>,
) -> Result<(), ServerError> {
    let mut config = AppConfig::from_env()?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    logging::init(&config.logging)?;
    tracing::info!(
        environment = %config.environment,
        address = %config.bind_address(),
        "Starting retrotext"
    );

    let transformer = Transformer::with_config(TransformerConfig { seed });
    server::start_server(&config.bind_address(), transformer).await
}

fn cmd_transform(
    transformation: &str,
    text: Option<String>,
    seed: Option<u64>,
) -> Result<(), ServerError> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            strip_line_ending(&mut buf);
            buf
        }
    };

    let transformer = Transformer::with_config(TransformerConfig { seed });
    let result = transformer.transform(&text, transformation)?;
    println!("{}", result);
    Ok(())
}

fn cmd_list() -> Result<(), ServerError> {
    println!("{}", transformations_description());
    Ok(())
}

/// Drop the single trailing `\n` or `\r\n` added by `echo` and heredocs
fn strip_line_ending(buf: &mut String) {
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending() {
        for (input, expected) in [
            ("hello\n", "hello"),
            ("hello\r\n", "hello"),
            ("hello", "hello"),
            ("two lines\n\n", "two lines\n"),
            ("keep\r", "keep\r"),
        ] {
            let mut buf = input.to_string();
            strip_line_ending(&mut buf);
            assert_eq!(buf, expected, "{input:?}");
        }
    }
}
