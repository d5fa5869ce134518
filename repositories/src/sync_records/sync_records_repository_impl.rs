use std::collections::HashMap;

use anyhow::anyhow;
use async_trait::async_trait;
use common::aws_clients::dynamodb::BatchWriteClient;
use rusoto_dynamodb::{BatchWriteItemInput, DeleteRequest, PutRequest, WriteRequest};

use crate::serialize::serialize_to_dynamo;

use super::{
    SyncRecordsRepository, SyncRecordsRepositoryError, UnprocessedItemsRetryPolicy,
    WriteOperation, BATCH_WRITE_LIMIT,
};

pub struct SyncRecordsRepositoryImpl<D: BatchWriteClient> {
    dynamodb_client: D,
    retry_policy: UnprocessedItemsRetryPolicy,
}

impl<D: BatchWriteClient> SyncRecordsRepositoryImpl<D> {
    pub fn new(dynamodb_client: D, retry_policy: UnprocessedItemsRetryPolicy) -> Self {
        Self {
            dynamodb_client,
            retry_policy,
        }
    }

    fn build_write_request(
        operation: WriteOperation,
    ) -> Result<WriteRequest, SyncRecordsRepositoryError> {
        match operation {
            WriteOperation::Put(record) => Ok(WriteRequest {
                put_request: Some(PutRequest {
                    item: serialize_to_dynamo::<_, SyncRecordsRepositoryError>(
                        record,
                        "Error serializing record",
                    )?,
                }),
                ..WriteRequest::default()
            }),
            WriteOperation::Delete(key) => Ok(WriteRequest {
                delete_request: Some(DeleteRequest {
                    key: serialize_to_dynamo::<_, SyncRecordsRepositoryError>(
                        key,
                        "Error serializing record key",
                    )?,
                }),
                ..WriteRequest::default()
            }),
        }
    }
}

#[async_trait]
impl<D: BatchWriteClient> SyncRecordsRepository for SyncRecordsRepositoryImpl<D> {
    async fn write_batch(
        &self,
        table_name: String,
        operations: Vec<WriteOperation>,
    ) -> Result<(), SyncRecordsRepositoryError> {
        if operations.len() > BATCH_WRITE_LIMIT {
            return Err(SyncRecordsRepositoryError::Unknown(anyhow!(
                "a batch write accepts at most {BATCH_WRITE_LIMIT} operations, got {}",
                operations.len()
            )));
        }

        let mut pending = operations
            .into_iter()
            .map(Self::build_write_request)
            .collect::<Result<Vec<WriteRequest>, SyncRecordsRepositoryError>>()?;
        let mut attempt = 0;

        while !pending.is_empty() {
            let output = self
                .dynamodb_client
                .batch_write_item(BatchWriteItemInput {
                    request_items: HashMap::from([(table_name.clone(), pending)]),
                    ..BatchWriteItemInput::default()
                })
                .await
                .map_err(|e| {
                    SyncRecordsRepositoryError::Unknown(
                        anyhow!(e).context(format!("unable to batch write into {table_name}")),
                    )
                })?;

            pending = output
                .unprocessed_items
                .and_then(|mut unprocessed| unprocessed.remove(&table_name))
                .unwrap_or_default();

            if pending.is_empty() {
                break;
            }

            if attempt >= self.retry_policy.max_retries {
                return Err(SyncRecordsRepositoryError::UnprocessedItems {
                    table_name,
                    remaining: pending.len(),
                });
            }

            attempt += 1;
            tracing::warn!(
                table_name = %table_name,
                unprocessed = pending.len(),
                attempt,
                "Resending {} unprocessed items",
                pending.len()
            );
            tokio::time::sleep(self.retry_policy.delay_for(attempt)).await;
        }

        Ok(())
    }
}
