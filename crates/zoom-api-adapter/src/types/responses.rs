/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::{MeetingSummary, Participant, PastMeetingInstance, Poll, Registrant};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListMeetingsResponse {
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub page_number: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total_records: u32,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub meetings: Vec<MeetingSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListRegistrantsResponse {
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total_records: u32,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub registrants: Vec<Registrant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddRegistrantResponse {
    /// Meeting id
    pub id: u64,
    pub registrant_id: String,
    #[serde(default)]
    pub join_url: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastMeetingInstancesResponse {
    #[serde(default)]
    pub meetings: Vec<PastMeetingInstance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastMeetingParticipantsResponse {
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total_records: u32,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPollsResponse {
    #[serde(default)]
    pub total_records: u32,
    #[serde(default)]
    pub polls: Vec<Poll>,
}
