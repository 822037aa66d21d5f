use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `Strainer` - pulls mentions, emoticons and titled links out of chat messages.
#[derive(Parser, Debug)]
#[command(name = "strainer")]
#[command(version)]
#[command(about = "Extract mentions, emoticons and links from chat messages.", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.strainer/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level regardless of config
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP gateway
    Serve {
        /// Port to listen on (use 0 for random available port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },

    /// Strain a single message and print the JSON result
    Strain {
        /// Chat message text
        message: String,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}
