use std::fmt;
use std::fmt::{Display, Formatter};

/// Salesforce object kinds mirrored into the IVR configuration tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceType {
    VoicePrompt,
    DialogState,
    IvrConfigurations,
    VoiceBusinessRules,
    IvrPromptsAndConfig,
    HolidayPrompt,
    AreaCode,
    /// Any other `attributes.type`. Empty when the record carries no type at all.
    Unrecognized(String),
}

impl SourceType {
    pub fn from_api_name(api_name: &str) -> Self {
        match api_name {
            "Voice_Prompt__c" => Self::VoicePrompt,
            "Dialogstate__c" => Self::DialogState,
            "IVR_Configurations__c" => Self::IvrConfigurations,
            "Voice_Business_Rules__c" => Self::VoiceBusinessRules,
            "IVR_Prompts_and_Config__c" => Self::IvrPromptsAndConfig,
            "Holiday_Prompt__c" => Self::HolidayPrompt,
            "Area_Code__c" => Self::AreaCode,
            other => Self::Unrecognized(other.to_owned()),
        }
    }

    pub fn api_name(&self) -> &str {
        match self {
            Self::VoicePrompt => "Voice_Prompt__c",
            Self::DialogState => "Dialogstate__c",
            Self::IvrConfigurations => "IVR_Configurations__c",
            Self::VoiceBusinessRules => "Voice_Business_Rules__c",
            Self::IvrPromptsAndConfig => "IVR_Prompts_and_Config__c",
            Self::HolidayPrompt => "Holiday_Prompt__c",
            Self::AreaCode => "Area_Code__c",
            Self::Unrecognized(name) => name,
        }
    }

    /// Value stored in the `Typing` attribute for records of this kind.
    pub fn partition_key(&self) -> Option<&'static str> {
        match self {
            Self::VoicePrompt => Some("prompt"),
            Self::DialogState => Some("dialogState"),
            Self::IvrConfigurations => Some("ivrConfigurations"),
            Self::VoiceBusinessRules => Some("voiceBusinessRules"),
            Self::IvrPromptsAndConfig => Some("ivrPromptsAndConfig"),
            Self::HolidayPrompt => Some("holidayPrompt"),
            Self::AreaCode => Some("areaCode"),
            Self::Unrecognized(_) => None,
        }
    }
}

impl Display for SourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}
