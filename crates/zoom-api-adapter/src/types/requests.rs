/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::{ListMeetingsType, MeetingAction, MeetingType, RegistrantAction, RegistrantStatus};
use super::models::{CustomQuestion, MeetingSettings, PollQuestion, Recurrence};

/// Body for `POST users/{user_id}/meetings`.
///
/// `recurrence` and `settings` left as `None` are sent as
/// `Recurrence::default()` and `MeetingSettings::default()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateMeetingRequest {
    pub topic: String,
    #[serde(rename = "type")]
    pub meeting_type: MeetingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_for: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<MeetingSettings>,
}

impl CreateMeetingRequest {
    pub fn new(topic: impl Into<String>, meeting_type: MeetingType) -> Self {
        Self {
            topic: topic.into(),
            meeting_type,
            ..Default::default()
        }
    }

    /// Fill unset optional blocks with their documented defaults
    pub fn with_defaults(mut self) -> Self {
        self.recurrence.get_or_insert_with(Recurrence::default);
        self.settings.get_or_insert_with(MeetingSettings::default);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateMeetingStatusRequest {
    pub action: MeetingAction,
}

/// Body for `POST meetings/{id}/registrants`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddRegistrantRequest {
    pub email: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchasing_time_frame: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_in_purchase_process: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_of_employees: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_questions: Vec<CustomQuestion>,
}

impl AddRegistrantRequest {
    pub fn new(email: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            ..Default::default()
        }
    }
}

/// Registrant selector; either field may identify the registrant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrantRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Body for `PUT meetings/{id}/registrants/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRegistrantStatusRequest {
    pub action: RegistrantAction,
    pub registrants: Vec<RegistrantRef>,
}

/// Body for creating or replacing a poll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollRequest {
    pub title: String,
    pub questions: Vec<PollQuestion>,
}

/// Cursor paging shared by list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub page_size: Option<u32>,
    pub next_page_token: Option<String>,
}

impl PageQuery {
    pub(crate) fn append_to(&self, query: &mut Vec<(String, String)>) {
        if let Some(size) = self.page_size {
            query.push(("page_size".to_string(), size.to_string()));
        }
        if let Some(token) = &self.next_page_token {
            query.push(("next_page_token".to_string(), token.clone()));
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListMeetingsQuery {
    pub meeting_type: Option<ListMeetingsType>,
    pub page: PageQuery,
}

impl ListMeetingsQuery {
    pub(crate) fn to_pairs(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(kind) = self.meeting_type {
            query.push(("type".to_string(), kind.as_str().to_string()));
        }
        self.page.append_to(&mut query);
        query
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRegistrantsQuery {
    pub status: Option<RegistrantStatus>,
    pub page: PageQuery,
}

impl ListRegistrantsQuery {
    pub(crate) fn to_pairs(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(status) = self.status {
            query.push(("status".to_string(), status.as_str().to_string()));
        }
        self.page.append_to(&mut query);
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_meeting_defaults_resolved() {
        let request = CreateMeetingRequest::new("Planning", MeetingType::Scheduled).with_defaults();

        assert_eq!(request.recurrence, Some(Recurrence::default()));
        assert_eq!(request.settings, Some(MeetingSettings::default()));

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], 2);
        assert_eq!(value["recurrence"]["type"], 1);
        assert!(value.get("password").is_none());
    }

    #[test]
    fn test_with_defaults_keeps_explicit_settings() {
        let settings = MeetingSettings {
            host_video: true,
            ..Default::default()
        };
        let request = CreateMeetingRequest {
            settings: Some(settings.clone()),
            ..CreateMeetingRequest::new("Review", MeetingType::Scheduled)
        }
        .with_defaults();

        assert_eq!(request.settings, Some(settings));
    }

    #[test]
    fn test_list_query_pairs() {
        let query = ListRegistrantsQuery {
            status: Some(RegistrantStatus::Pending),
            page: PageQuery {
                page_size: Some(30),
                next_page_token: None,
            },
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("status".to_string(), "pending".to_string()),
                ("page_size".to_string(), "30".to_string()),
            ]
        );
        assert!(ListMeetingsQuery::default().to_pairs().is_empty());
    }
}
