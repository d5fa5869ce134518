//! Mirrors Salesforce records into DynamoDB: normalize, batch, then write batch after batch.

pub mod batcher;
pub mod target_table;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

use model::sync_record::{normalize, NormalizedRecord, RawRecord, RecordError};
use repositories::sync_records::{
    SyncRecordsRepository, SyncRecordsRepositoryError, WriteOperation, BATCH_WRITE_LIMIT,
};

pub use batcher::chunk;
pub use target_table::TargetTables;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOperation {
    Upsert,
    Delete,
}

impl SyncOperation {
    /// Classifies the `EventTriggered` reason of a change notification.
    pub fn from_trigger(reason: &str) -> Option<Self> {
        let reason = reason.to_lowercase();
        if reason.contains("update") || reason.contains("inserted") {
            Some(Self::Upsert)
        } else if reason.contains("delete") {
            Some(Self::Delete)
        } else {
            None
        }
    }

    fn write_operation(self, record: NormalizedRecord) -> Result<WriteOperation, RecordError> {
        let key = record.key()?;
        Ok(match self {
            Self::Upsert => WriteOperation::Put(record),
            Self::Delete => WriteOperation::Delete(key),
        })
    }
}

impl Display for SyncOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upsert => write!(f, "upsert"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSummary {
    pub operation: SyncOperation,
    pub table_name: String,
    pub batches: usize,
    pub succeeded_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("no records found in the change notification")]
    NoRecords,
    #[error("no target table configured")]
    MissingTable,
    #[error("batch {batch} has an invalid record ({persisted} records already persisted): {source}")]
    InvalidRecord {
        batch: usize,
        persisted: usize,
        #[source]
        source: RecordError,
    },
    #[error("batch {batch} failed ({persisted} records already persisted): {source}")]
    Backend {
        batch: usize,
        persisted: usize,
        #[source]
        source: SyncRecordsRepositoryError,
    },
}

impl SyncError {
    /// Errors caused by the notification itself, detected before anything is written.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::NoRecords | Self::MissingTable)
    }
}

#[derive(Clone)]
pub struct SyncExecutor {
    repository: Arc<dyn SyncRecordsRepository>,
}

impl SyncExecutor {
    pub fn new(repository: Arc<dyn SyncRecordsRepository>) -> Self {
        Self { repository }
    }

    /// Writes `records` into `table_name`, one batch at a time.
    ///
    /// The first failing batch aborts the sync. Batches written before it are not rolled back.
    pub async fn execute(
        &self,
        operation: SyncOperation,
        table_name: Option<&str>,
        records: Vec<RawRecord>,
    ) -> Result<SyncSummary, SyncError> {
        if records.is_empty() {
            return Err(SyncError::NoRecords);
        }
        let table_name = table_name
            .filter(|table_name| !table_name.is_empty())
            .ok_or(SyncError::MissingTable)?;

        tracing::info!(
            %operation,
            table_name,
            records = records.len(),
            "Syncing {} records",
            records.len()
        );

        let batches = chunk(normalize(records), BATCH_WRITE_LIMIT);
        let batch_count = batches.len();
        let mut succeeded_count = 0;

        for (batch, records) in batches.into_iter().enumerate() {
            let batch_size = records.len();
            let operations = records
                .into_iter()
                .map(|record| operation.write_operation(record))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| SyncError::InvalidRecord {
                    batch,
                    persisted: succeeded_count,
                    source,
                })?;

            self.repository
                .write_batch(table_name.to_owned(), operations)
                .await
                .map_err(|source| SyncError::Backend {
                    batch,
                    persisted: succeeded_count,
                    source,
                })?;

            succeeded_count += batch_size;
            tracing::info!(
                %operation,
                table_name,
                batch,
                batch_size,
                succeeded_count,
                "Batch {}/{} written",
                batch + 1,
                batch_count
            );
        }

        Ok(SyncSummary {
            operation,
            table_name: table_name.to_owned(),
            batches: batch_count,
            succeeded_count,
        })
    }
}
