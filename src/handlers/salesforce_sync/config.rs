use std::time::Duration;

use repositories::sync_records::UnprocessedItemsRetryPolicy;
use salesforce_ddb_sync::sync::TargetTables;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default)]
    pub ddb_table: Option<String>,
    #[serde(default)]
    pub ivr_config_and_prompts_table: Option<String>,
    #[serde(default = "default_unprocessed_items_max_retries")]
    pub unprocessed_items_max_retries: u32,
    #[serde(default = "default_unprocessed_items_backoff_ms")]
    pub unprocessed_items_backoff_ms: u64,
}

impl Config {
    pub fn target_tables(&self) -> TargetTables {
        TargetTables::new(
            self.ddb_table.clone(),
            self.ivr_config_and_prompts_table.clone(),
        )
    }

    pub fn retry_policy(&self) -> UnprocessedItemsRetryPolicy {
        UnprocessedItemsRetryPolicy::new(
            self.unprocessed_items_max_retries,
            Duration::from_millis(self.unprocessed_items_backoff_ms),
        )
    }
}

fn default_unprocessed_items_max_retries() -> u32 {
    3
}

fn default_unprocessed_items_backoff_ms() -> u64 {
    50
}
