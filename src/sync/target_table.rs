use model::sync_record::{RawRecord, SourceType};

/// Tables a change notification can be mirrored into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetTables {
    /// Default destination of every record kind.
    pub primary: Option<String>,
    /// Destination of IVR prompts and configuration records.
    pub ivr_config_and_prompts: Option<String>,
}

impl TargetTables {
    pub fn new(primary: Option<String>, ivr_config_and_prompts: Option<String>) -> Self {
        Self {
            primary,
            ivr_config_and_prompts,
        }
    }

    /// Picks the table for a whole notification.
    ///
    /// Only the first record is inspected: Salesforce sends one object type per notification.
    pub fn select(&self, records: &[RawRecord]) -> Option<&str> {
        let table = match records.first().map(RawRecord::source_type) {
            Some(SourceType::IvrPromptsAndConfig) => &self.ivr_config_and_prompts,
            _ => &self.primary,
        };

        table.as_deref().filter(|table| !table.is_empty())
    }
}
