//! Sample Salesforce change notification payloads.

use serde_json::{json, Value};

pub const VOICE_PROMPT_TYPE: &str = "Voice_Prompt__c";
pub const DIALOG_STATE_TYPE: &str = "Dialogstate__c";
pub const IVR_PROMPTS_AND_CONFIG_TYPE: &str = "IVR_Prompts_and_Config__c";
pub const AREA_CODE_TYPE: &str = "Area_Code__c";

pub const UPDATED_TRIGGER: &str = "Record Updated";
pub const INSERTED_TRIGGER: &str = "Record Inserted";
pub const DELETED_TRIGGER: &str = "Bulk Delete";

fn attributes(object_type: &str, id: &str) -> Value {
    json!({
        "type": object_type,
        "url": format!("/services/data/v58.0/sobjects/{object_type}/{id}"),
    })
}

pub fn voice_prompt_record(index: usize) -> Value {
    let id = format!("a0B5e00000{index:06}");
    json!({
        "attributes": attributes(VOICE_PROMPT_TYPE, &id),
        "Id": id,
        "Name": "Retail Banking",
        "Language__c": "en-us",
        "Prompt_Name__c": format!("welcome_{index}"),
        "Prompt_value__c": format!("Welcome to the bank, message {index}"),
    })
}

pub fn voice_prompt_records(count: usize) -> Vec<Value> {
    (0..count).map(voice_prompt_record).collect()
}

pub fn dialog_state_record(name: &str) -> Value {
    json!({
        "attributes": attributes(DIALOG_STATE_TYPE, "a0C5e000001"),
        "Name": name,
        "Bot_Name__c": "BankingBot",
        "Supported_Intents__c": "CheckBalance,TransferFunds",
        "Supported_Context__c": "authenticated",
        "Resolve_Conflict__c": true,
        "Required_Slots__c": "accountNumber",
        "Optional_Slots__c": null,
        "Initial_Prompt_Indexing__c": "en-us#main_menu",
        "Retry_Prompt_1_Indexing__c": "en-us#main_menu_retry_1",
        "Retry_Prompt_2_Indexing__c": "en-us#main_menu_retry_2",
        "Retry_Prompt_3_Indexing__c": "en-us#main_menu_retry_3",
        "DTMF_Option_0__c": "Operator",
        "DTMF_Option_1__c": "CheckBalance",
        "DTMF_Option_2__c": "TransferFunds",
        "Allow_Interrupt__c": "true",
        "Audio_Max_Length__c": 15000,
        "Audio_Start_Timeout__c": 4000,
        "Audio_End_Timeout__c": 640,
        "DTMF_End_Timeout__c": 5000,
        "Text_Start_Timeout__c": 30000,
    })
}

pub fn named_record(object_type: &str, name: &str) -> Value {
    json!({
        "attributes": attributes(object_type, "a0D5e000001"),
        "Name": name,
        "Value__c": format!("{name} value"),
    })
}

pub fn change_notification(trigger: &str, records: Vec<Value>) -> Value {
    json!({
        "EventTriggered": trigger,
        "Data": records,
    })
}
