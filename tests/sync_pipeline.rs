mod helpers;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use common::test_tools::mocks::dynamodb_client::MockBatchWriteDbClient;
use common::test_tools::salesforce::{
    dialog_state_record, named_record, voice_prompt_records, AREA_CODE_TYPE,
};
use mockall::Sequence;
use model::sync_record::RawRecord;
use repositories::sync_records::sync_records_repository_impl::SyncRecordsRepositoryImpl;
use repositories::sync_records::{SyncRecordsRepositoryError, UnprocessedItemsRetryPolicy};
use rstest::{fixture, rstest};
use rusoto_core::RusotoError;
use rusoto_dynamodb::{BatchWriteItemError, BatchWriteItemInput, BatchWriteItemOutput};
use salesforce_ddb_sync::sync::{SyncError, SyncExecutor, SyncOperation};
use serde_json::Value;

use crate::helpers::dynamodb::{put_items, requests_for, string_attribute};

const TABLE_NAME: &str = "ivr-configuration";

struct PipelineFixture {
    pub dynamodb_client: MockBatchWriteDbClient,
    pub retry_policy: UnprocessedItemsRetryPolicy,
}

#[fixture]
fn pipeline() -> PipelineFixture {
    PipelineFixture {
        dynamodb_client: MockBatchWriteDbClient::new(),
        retry_policy: UnprocessedItemsRetryPolicy::new(1, Duration::ZERO),
    }
}

impl PipelineFixture {
    fn executor(self) -> SyncExecutor {
        SyncExecutor::new(Arc::new(SyncRecordsRepositoryImpl::new(
            self.dynamodb_client,
            self.retry_policy,
        )))
    }
}

fn raw(values: Vec<Value>) -> Vec<RawRecord> {
    values
        .into_iter()
        .map(|value| serde_json::from_value(value).unwrap())
        .collect()
}

#[rstest]
#[tokio::test]
async fn voice_prompts_are_written_in_two_batches(mut pipeline: PipelineFixture) {
    let captured: Arc<Mutex<Vec<BatchWriteItemInput>>> = Arc::default();
    let sink = captured.clone();
    pipeline
        .dynamodb_client
        .expect_batch_write_item()
        .times(2)
        .returning(move |input| {
            sink.lock().unwrap().push(input);
            Ok(BatchWriteItemOutput::default())
        });

    let summary = pipeline
        .executor()
        .execute(
            SyncOperation::Upsert,
            Some(TABLE_NAME),
            raw(voice_prompt_records(26)),
        )
        .await
        .unwrap();

    assert_eq!(26, summary.succeeded_count);

    let inputs = captured.lock().unwrap();
    let first = put_items(requests_for(&inputs[0], TABLE_NAME));
    let second = put_items(requests_for(&inputs[1], TABLE_NAME));
    assert_eq!(25, first.len());
    assert_eq!(1, second.len());

    assert_eq!(string_attribute("prompt"), first[0]["Typing"]);
    assert_eq!(string_attribute("en-us#welcome_0"), first[0]["Indexing"]);
    assert_eq!(string_attribute("Retail Banking"), first[0]["Business Line"]);
    assert_eq!(string_attribute("en-us#welcome_25"), second[0]["Indexing"]);
    assert!(!first[0].contains_key("Prompt_Name__c"));
}

#[rstest]
#[tokio::test]
async fn dialog_states_keep_lex_parameters(mut pipeline: PipelineFixture) {
    let captured: Arc<Mutex<Vec<BatchWriteItemInput>>> = Arc::default();
    let sink = captured.clone();
    pipeline
        .dynamodb_client
        .expect_batch_write_item()
        .once()
        .returning(move |input| {
            sink.lock().unwrap().push(input);
            Ok(BatchWriteItemOutput::default())
        });

    pipeline
        .executor()
        .execute(
            SyncOperation::Upsert,
            Some(TABLE_NAME),
            raw(vec![dialog_state_record("MainMenu")]),
        )
        .await
        .unwrap();

    let inputs = captured.lock().unwrap();
    let items = put_items(requests_for(&inputs[0], TABLE_NAME));
    assert_eq!(string_attribute("dialogState"), items[0]["Typing"]);
    assert_eq!(string_attribute("MainMenu"), items[0]["Indexing"]);
    assert_eq!(
        string_attribute("true"),
        items[0]["x-amz-lex:allow-interrupt:*:*"]
    );
    assert!(items[0].contains_key("x-amz-lex:audio:max-length-ms:*:*"));
}

#[rstest]
#[tokio::test]
async fn failing_second_batch_keeps_the_first(mut pipeline: PipelineFixture) {
    let mut sequence = Sequence::new();
    pipeline
        .dynamodb_client
        .expect_batch_write_item()
        .once()
        .in_sequence(&mut sequence)
        .returning(|_| Ok(BatchWriteItemOutput::default()));
    pipeline
        .dynamodb_client
        .expect_batch_write_item()
        .once()
        .in_sequence(&mut sequence)
        .returning(|_| {
            Err(RusotoError::Service(
                BatchWriteItemError::ProvisionedThroughputExceeded("slow down".to_owned()),
            ))
        });

    let error = pipeline
        .executor()
        .execute(
            SyncOperation::Delete,
            Some(TABLE_NAME),
            raw(voice_prompt_records(26)),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        SyncError::Backend {
            batch: 1,
            persisted: 25,
            source: SyncRecordsRepositoryError::Unknown(_),
        }
    ));
}

#[rstest]
#[tokio::test]
async fn unprocessed_items_left_after_retries_fail_the_sync(mut pipeline: PipelineFixture) {
    pipeline
        .dynamodb_client
        .expect_batch_write_item()
        .times(2)
        .returning(|input| {
            Ok(BatchWriteItemOutput {
                unprocessed_items: Some(input.request_items),
                ..BatchWriteItemOutput::default()
            })
        });

    let error = pipeline
        .executor()
        .execute(
            SyncOperation::Delete,
            Some(TABLE_NAME),
            raw(vec![named_record(AREA_CODE_TYPE, "305")]),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        SyncError::Backend {
            batch: 0,
            persisted: 0,
            source: SyncRecordsRepositoryError::UnprocessedItems { remaining: 1, .. },
        }
    ));
}
