pub mod sync_records_repository_impl;

use std::time::Duration;

use async_trait::async_trait;
use model::sync_record::{NormalizedRecord, RecordKey};

#[cfg(feature = "test_mocks")]
use mockall::mock;

use crate::impl_unknown_error_trait;

/// Maximum number of write requests DynamoDB accepts in a single `BatchWriteItem` call.
pub const BATCH_WRITE_LIMIT: usize = 25;

#[derive(Debug, thiserror::Error)]
pub enum SyncRecordsRepositoryError {
    #[error("{0:#}")]
    Unknown(anyhow::Error),
    #[error("{remaining} items were left unprocessed by table {table_name}")]
    UnprocessedItems { table_name: String, remaining: usize },
}

impl_unknown_error_trait!(SyncRecordsRepositoryError);

impl From<anyhow::Error> for SyncRecordsRepositoryError {
    fn from(error: anyhow::Error) -> Self {
        SyncRecordsRepositoryError::Unknown(error)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WriteOperation {
    /// Writes the whole record, replacing any item with the same key.
    Put(NormalizedRecord),
    /// Removes the item with this key.
    Delete(RecordKey),
}

/// How `UnprocessedItems` returned by DynamoDB are resent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnprocessedItemsRetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl UnprocessedItemsRetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Exponential backoff, `attempt` starting at 1.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 1u32 << attempt.saturating_sub(1).min(10);
        self.base_delay.saturating_mul(factor)
    }
}

impl Default for UnprocessedItemsRetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(50),
        }
    }
}

#[async_trait]
pub trait SyncRecordsRepository
where
    Self: Sync + Send,
{
    /// Sends one batch write with at most [`BATCH_WRITE_LIMIT`] operations.
    async fn write_batch(
        &self,
        table_name: String,
        operations: Vec<WriteOperation>,
    ) -> Result<(), SyncRecordsRepositoryError>;
}

#[cfg(feature = "test_mocks")]
mock! {
    pub SyncRecordsRepository {}
    #[async_trait]
    impl SyncRecordsRepository for SyncRecordsRepository {
        async fn write_batch(
            &self,
            table_name: String,
            operations: Vec<WriteOperation>,
        ) -> Result<(), SyncRecordsRepositoryError>;
    }
}
