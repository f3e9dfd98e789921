/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Numeric meeting type codes; unlisted codes are kept as `Unknown`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum MeetingType {
    Instant,
    #[default]
    Scheduled,
    RecurringNoFixedTime,
    /// Personal meeting ID
    PersonalMeetingRoom,
    RecurringFixedTime,
    ScreenShareOnly,
    Unknown(u8),
}

impl From<MeetingType> for u8 {
    fn from(value: MeetingType) -> Self {
        match value {
            MeetingType::Instant => 1,
            MeetingType::Scheduled => 2,
            MeetingType::RecurringNoFixedTime => 3,
            MeetingType::PersonalMeetingRoom => 4,
            MeetingType::RecurringFixedTime => 8,
            MeetingType::ScreenShareOnly => 10,
            MeetingType::Unknown(code) => code,
        }
    }
}

impl From<u8> for MeetingType {
    fn from(value: u8) -> Self {
        match value {
            1 => MeetingType::Instant,
            2 => MeetingType::Scheduled,
            3 => MeetingType::RecurringNoFixedTime,
            4 => MeetingType::PersonalMeetingRoom,
            8 => MeetingType::RecurringFixedTime,
            10 => MeetingType::ScreenShareOnly,
            other => MeetingType::Unknown(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RecurrenceType {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl From<RecurrenceType> for u8 {
    fn from(value: RecurrenceType) -> Self {
        match value {
            RecurrenceType::Daily => 1,
            RecurrenceType::Weekly => 2,
            RecurrenceType::Monthly => 3,
        }
    }
}

impl TryFrom<u8> for RecurrenceType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(RecurrenceType::Daily),
            2 => Ok(RecurrenceType::Weekly),
            3 => Ok(RecurrenceType::Monthly),
            other => Err(format!("unknown recurrence type {other}")),
        }
    }
}

/// Registration approval policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ApprovalType {
    #[default]
    Automatic,
    Manual,
    NoRegistration,
}

impl From<ApprovalType> for u8 {
    fn from(value: ApprovalType) -> Self {
        match value {
            ApprovalType::Automatic => 0,
            ApprovalType::Manual => 1,
            ApprovalType::NoRegistration => 2,
        }
    }
}

impl TryFrom<u8> for ApprovalType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ApprovalType::Automatic),
            1 => Ok(ApprovalType::Manual),
            2 => Ok(ApprovalType::NoRegistration),
            other => Err(format!("unknown approval type {other}")),
        }
    }
}

/// Action for `PUT meetings/{id}/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingAction {
    End,
    Recover,
}

/// Filter for listing a user's meetings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMeetingsType {
    Scheduled,
    Live,
    Upcoming,
}

impl ListMeetingsType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListMeetingsType::Scheduled => "scheduled",
            ListMeetingsType::Live => "live",
            ListMeetingsType::Upcoming => "upcoming",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrantStatus {
    Pending,
    Approved,
    Denied,
}

impl RegistrantStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrantStatus::Pending => "pending",
            RegistrantStatus::Approved => "approved",
            RegistrantStatus::Denied => "denied",
        }
    }
}

/// Action for `PUT meetings/{id}/registrants/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrantAction {
    Approve,
    Cancel,
    Deny,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PollQuestionType {
    SingleChoice,
    MultipleChoice,
    /// Any other question kind the API reports, kept verbatim
    Unknown(String),
}

impl From<PollQuestionType> for String {
    fn from(value: PollQuestionType) -> Self {
        match value {
            PollQuestionType::SingleChoice => "single".to_string(),
            PollQuestionType::MultipleChoice => "multiple".to_string(),
            PollQuestionType::Unknown(raw) => raw,
        }
    }
}

impl From<String> for PollQuestionType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "single" => PollQuestionType::SingleChoice,
            "multiple" => PollQuestionType::MultipleChoice,
            _ => PollQuestionType::Unknown(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PollStatus {
    NotStarted,
    Started,
    Ended,
    Sharing,
    Unknown(String),
}

impl From<PollStatus> for String {
    fn from(value: PollStatus) -> Self {
        match value {
            PollStatus::NotStarted => "notstart".to_string(),
            PollStatus::Started => "started".to_string(),
            PollStatus::Ended => "ended".to_string(),
            PollStatus::Sharing => "sharing".to_string(),
            PollStatus::Unknown(raw) => raw,
        }
    }
}

impl From<String> for PollStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "notstart" => PollStatus::NotStarted,
            "started" => PollStatus::Started,
            "ended" => PollStatus::Ended,
            "sharing" => PollStatus::Sharing,
            _ => PollStatus::Unknown(value),
        }
    }
}
