use serde_json::{Map, Value};

use super::{NormalizedRecord, RawRecord, SourceType, PARTITION_KEY_ATTRIBUTE, SORT_KEY_ATTRIBUTE};

const NAME_FIELD: &str = "Name";
const LANGUAGE_FIELD: &str = "Language__c";
const PROMPT_NAME_FIELD: &str = "Prompt_Name__c";

/// `(table attribute, Salesforce field)` pairs of a voice prompt.
const VOICE_PROMPT_FIELDS: &[(&str, &str)] = &[
    ("language", LANGUAGE_FIELD),
    ("Business Line", NAME_FIELD),
    ("name", PROMPT_NAME_FIELD),
    ("prompt_value", "Prompt_value__c"),
];

/// `(table attribute, Salesforce field)` pairs of a Lex dialog state.
const DIALOG_STATE_FIELDS: &[(&str, &str)] = &[
    ("dialog_name", NAME_FIELD),
    ("bot_name", "Bot_Name__c"),
    ("supported_intents", "Supported_Intents__c"),
    ("supported_contexts", "Supported_Context__c"),
    ("resolveConflict", "Resolve_Conflict__c"),
    ("required_slots", "Required_Slots__c"),
    ("optional_slots", "Optional_Slots__c"),
    ("initial_prompt_indexing", "Initial_Prompt_Indexing__c"),
    ("retry_prompt_1_indexing", "Retry_Prompt_1_Indexing__c"),
    ("retry_prompt_2_indexing", "Retry_Prompt_2_Indexing__c"),
    ("retry_prompt_3_indexing", "Retry_Prompt_3_Indexing__c"),
    ("dtmf_option_0", "DTMF_Option_0__c"),
    ("dtmf_option_1", "DTMF_Option_1__c"),
    ("dtmf_option_2", "DTMF_Option_2__c"),
    ("dtmf_option_3", "DTMF_Option_3__c"),
    ("dtmf_option_4", "DTMF_Option_4__c"),
    ("dtmf_option_5", "DTMF_Option_5__c"),
    ("dtmf_option_6", "DTMF_Option_6__c"),
    ("dtmf_option_7", "DTMF_Option_7__c"),
    ("dtmf_option_8", "DTMF_Option_8__c"),
    ("dtmf_option_9", "DTMF_Option_9__c"),
    ("x-amz-lex:allow-interrupt:*:*", "Allow_Interrupt__c"),
    ("x-amz-lex:audio:max-length-ms:*:*", "Audio_Max_Length__c"),
    ("x-amz-lex:audio:start-timeout-ms:*:*", "Audio_Start_Timeout__c"),
    ("x-amz-lex:audio:end-timeout-ms:*:*", "Audio_End_Timeout__c"),
    ("x-amz-lex:dtmf:end-timeout-ms:*:*", "DTMF_End_Timeout__c"),
    ("x-amz-lex:text:start-timeout-ms:*:*", "Text_Start_Timeout__c"),
];

/// Normalizes every record of a change notification. Never drops nor reorders records.
pub fn normalize(records: Vec<RawRecord>) -> Vec<NormalizedRecord> {
    records.into_iter().map(normalize_record).collect()
}

pub fn normalize_record(record: RawRecord) -> NormalizedRecord {
    match record.source_type() {
        SourceType::VoicePrompt => voice_prompt(record),
        SourceType::DialogState => dialog_state(record),
        SourceType::Unrecognized(api_name) => {
            tracing::warn!(
                object_type = %api_name,
                "No primary key found for record of type {:?}",
                api_name
            );
            NormalizedRecord::new(SourceType::Unrecognized(api_name), record.into_fields())
        }
        source_type => {
            let sort_key = key_component(record.get(NAME_FIELD));
            with_keys(source_type, record.into_fields(), sort_key)
        }
    }
}

fn voice_prompt(record: RawRecord) -> NormalizedRecord {
    let sort_key = key_component(record.get(LANGUAGE_FIELD))
        .zip(key_component(record.get(PROMPT_NAME_FIELD)))
        .map(|(language, name)| format!("{language}#{name}"));

    with_keys(
        SourceType::VoicePrompt,
        mapped_fields(&record, VOICE_PROMPT_FIELDS),
        sort_key,
    )
}

fn dialog_state(record: RawRecord) -> NormalizedRecord {
    let sort_key = key_component(record.get(NAME_FIELD));

    with_keys(
        SourceType::DialogState,
        mapped_fields(&record, DIALOG_STATE_FIELDS),
        sort_key,
    )
}

/// Copies the mapped fields the record carries. Absent fields stay absent, `null` is kept.
fn mapped_fields(record: &RawRecord, mapping: &[(&str, &str)]) -> Map<String, Value> {
    mapping
        .iter()
        .filter_map(|(attribute, field)| {
            record
                .get(field)
                .map(|value| ((*attribute).to_owned(), value.clone()))
        })
        .collect()
}

fn with_keys(
    source_type: SourceType,
    mut fields: Map<String, Value>,
    sort_key: Option<String>,
) -> NormalizedRecord {
    if let Some(partition_key) = source_type.partition_key() {
        fields.insert(
            PARTITION_KEY_ATTRIBUTE.to_owned(),
            Value::String(partition_key.to_owned()),
        );
    }

    match sort_key {
        Some(sort_key) => {
            fields.insert(SORT_KEY_ATTRIBUTE.to_owned(), Value::String(sort_key));
        }
        None => tracing::warn!(
            object_type = %source_type,
            "Unable to derive the {} key of a {} record",
            SORT_KEY_ATTRIBUTE,
            source_type
        ),
    }

    NormalizedRecord::new(source_type, fields)
}

fn key_component(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(value) if !value.is_empty() => Some(value.clone()),
        Value::Number(value) => Some(value.to_string()),
        Value::Bool(value) => Some(value.to_string()),
        _ => None,
    }
}
