//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "club-pomo")]
#[command(about = "Join a shared Pomodoro room and follow its countdown")]
#[command(version)]
pub struct Config {
    /// Real-time server endpoint
    #[arg(short, long, default_value = "ws://localhost:2567")]
    pub endpoint: String,

    /// Room to join or create
    #[arg(short, long, default_value = "club_pomo")]
    pub room: String,

    /// Remaining seconds at or below which the countdown shows cooldown
    #[arg(long, default_value = "300", value_parser = clap::value_parser!(u64).range(5..))]
    pub cooldown_threshold: u64,

    /// Length of a full cycle in seconds, used when the countdown repeats
    #[arg(short, long, default_value = "1800")]
    pub duration: u64,

    /// Serve a local JSON status endpoint on this port
    #[arg(long)]
    pub status_port: Option<u16>,

    /// Host address for the status endpoint
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the status endpoint address, if enabled
    pub fn address(&self) -> Option<String> {
        self.status_port.map(|port| format!("{}:{}", self.host, port))
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
