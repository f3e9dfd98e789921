/*
[INPUT]:  Meeting identifiers, user ids and meeting payloads
[OUTPUT]: Meeting objects, listings and invitations
[POS]:    HTTP layer - meeting CRUD endpoints
[UPDATE]: When adding new meeting endpoints or changing payloads
*/

use crate::http::{ApiRequest, Result, ZoomClient, encode_segment};
use crate::types::{
    CreateMeetingRequest, ListMeetingsQuery, ListMeetingsResponse, Meeting, MeetingAction,
    MeetingInvitation, UpdateMeetingStatusRequest,
};

impl ZoomClient {
    /// Create a meeting for a user (`"me"` for the token owner)
    ///
    /// POST users/{user_id}/meetings
    pub async fn create_meeting(&self, user_id: &str, request: CreateMeetingRequest) -> Result<Meeting> {
        let endpoint = format!("users/{}/meetings", encode_segment(user_id));
        let request = ApiRequest::post_json(endpoint, &request.with_defaults())?;
        self.execute_json(&request).await
    }

    /// GET meetings/{meeting_id}
    pub async fn get_meeting(&self, meeting_id: u64) -> Result<Meeting> {
        let request = ApiRequest::get(format!("meetings/{meeting_id}"));
        self.execute_json(&request).await
    }

    /// List a user's meetings
    ///
    /// GET users/{user_id}/meetings?type={type}&page_size={n}&next_page_token={token}
    pub async fn list_meetings(
        &self,
        user_id: &str,
        query: &ListMeetingsQuery,
    ) -> Result<ListMeetingsResponse> {
        let endpoint = format!("users/{}/meetings", encode_segment(user_id));
        let request = ApiRequest::get(endpoint).with_query(query.to_pairs());
        self.execute_json(&request).await
    }

    /// DELETE meetings/{meeting_id}
    pub async fn delete_meeting(&self, meeting_id: u64) -> Result<()> {
        let request = ApiRequest::delete(format!("meetings/{meeting_id}"));
        self.execute_unit(&request).await
    }

    /// GET meetings/{meeting_id}/invitation
    pub async fn get_meeting_invitation(&self, meeting_id: u64) -> Result<MeetingInvitation> {
        let request = ApiRequest::get(format!("meetings/{meeting_id}/invitation"));
        self.execute_json(&request).await
    }

    /// End a live meeting or recover a deleted one
    ///
    /// PUT meetings/{meeting_id}/status
    pub async fn update_meeting_status(&self, meeting_id: u64, action: MeetingAction) -> Result<()> {
        let body = UpdateMeetingStatusRequest { action };
        let request = ApiRequest::put_json(format!("meetings/{meeting_id}/status"), &body)?;
        self.execute_unit(&request).await
    }
}
