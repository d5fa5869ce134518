use serde::{self, Deserialize};
use tracing_subscriber::filter::LevelFilter;

/// Settings shared by every lambda of the crate.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct GlobalConfig {
    /// Logs every invocation at info level instead of warnings only.
    #[serde(default)]
    pub verbose_logging: bool,
}

impl GlobalConfig {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose_logging {
            LevelFilter::INFO
        } else {
            LevelFilter::WARN
        }
    }
}
