//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

/// Needle radius used when the countdown re-derives the needle position
pub const DEFAULT_RADIUS: f64 = 100.0;

/// Period between two countdown ticks
pub const DEFAULT_TICK_MS: u64 = 1000;

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "tick-wheel")]
#[command(about = "A drag-to-set countdown wheel served over HTTP")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Needle radius, in the same units as drag offsets
    #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
    pub radius: f64,

    /// Countdown tick period in milliseconds
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    pub tick_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Wheel settings derived from the command line
    pub fn wheel_config(&self) -> WheelConfig {
        WheelConfig {
            radius: self.radius,
            tick_interval: Duration::from_millis(self.tick_ms.max(1)),
        }
    }
}

/// Settings for one wheel control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelConfig {
    pub radius: f64,
    pub tick_interval: Duration,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
        }
    }
}
