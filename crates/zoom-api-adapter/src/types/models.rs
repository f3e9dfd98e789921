/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::{
    ApprovalType, MeetingType, PollQuestionType, PollStatus, RecurrenceType, RegistrantStatus,
};

/// Recurrence rule for recurring meetings.
///
/// `Recurrence::default()` is a daily rule with every optional field unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recurrence {
    #[serde(rename = "type")]
    pub recurrence_type: RecurrenceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_interval: Option<u32>,
    /// Comma separated day numbers, 1 = Sunday
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_days: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_week: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_week_day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_times: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<String>,
}

/// Meeting settings.
///
/// `MeetingSettings::default()` turns every switch off and uses automatic
/// registration approval.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingSettings {
    pub host_video: bool,
    pub participant_video: bool,
    pub cn_meeting: bool,
    pub in_meeting: bool,
    pub join_before_host: bool,
    pub mute_upon_entry: bool,
    pub watermark: bool,
    pub use_pmi: bool,
    pub approval_type: ApprovalType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_type: Option<u8>,
    /// "both", "telephony" or "voip"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    /// "local", "cloud" or "none"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_recording: Option<String>,
    pub enforce_login: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce_login_domains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_hosts: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub global_dial_in_countries: Vec<String>,
    pub registrants_email_notification: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occurrence {
    pub occurrence_id: String,
    pub start_time: String,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Full meeting object returned by create and get
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: u64,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub host_id: Option<String>,
    #[serde(default)]
    pub topic: String,
    #[serde(rename = "type", default)]
    pub meeting_type: Option<MeetingType>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub agenda: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub start_url: Option<String>,
    #[serde(default)]
    pub join_url: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub settings: Option<MeetingSettings>,
    #[serde(default)]
    pub recurrence: Option<Recurrence>,
    #[serde(default)]
    pub occurrences: Vec<Occurrence>,
}

/// Entry in a meeting list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingSummary {
    pub id: u64,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub host_id: Option<String>,
    #[serde(default)]
    pub topic: String,
    #[serde(rename = "type", default)]
    pub meeting_type: Option<MeetingType>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub join_url: Option<String>,
    #[serde(default)]
    pub agenda: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingInvitation {
    pub invitation: String,
}

/// A completed occurrence of a meeting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastMeetingInstance {
    pub uuid: String,
    #[serde(default)]
    pub start_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastMeetingDetails {
    pub uuid: String,
    pub id: u64,
    #[serde(default)]
    pub host_id: Option<String>,
    #[serde(rename = "type", default)]
    pub meeting_type: Option<MeetingType>,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub total_minutes: Option<u32>,
    #[serde(default)]
    pub participants_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub join_time: Option<String>,
    #[serde(default)]
    pub leave_time: Option<String>,
    #[serde(default)]
    pub duration: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomQuestion {
    pub title: String,
    pub value: String,
}

/// Person signed up for a meeting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registrant {
    #[serde(default)]
    pub id: Option<String>,
    pub email: String,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub org: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub purchasing_time_frame: Option<String>,
    #[serde(default)]
    pub role_in_purchase_process: Option<String>,
    #[serde(default)]
    pub no_of_employees: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub custom_questions: Vec<CustomQuestion>,
    #[serde(default)]
    pub status: Option<RegistrantStatus>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub join_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollQuestion {
    pub name: String,
    #[serde(rename = "type")]
    pub question_type: PollQuestionType,
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    pub id: String,
    #[serde(default)]
    pub status: Option<PollStatus>,
    pub title: String,
    #[serde(default)]
    pub questions: Vec<PollQuestion>,
}
