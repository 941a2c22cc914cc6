//! Engine configuration options.

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum number of audit events to retain in memory.
    pub max_events: usize,
    /// Enable verbose logging of every event and command.
    pub verbose: bool,
    /// Print the `etf_profit=.. fut_profit=..` line at each quote termination,
    /// the format the downstream telemetry scraper consumes.
    pub print_snapshots: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_events: 100_000,
            verbose: false,
            print_snapshots: false,
        }
    }
}
