/*
[INPUT]:  Meeting ids, poll ids and poll definitions
[OUTPUT]: Poll objects and poll listings
[POS]:    HTTP layer - meeting poll endpoints
[UPDATE]: When adding new poll endpoints or question types
*/

use crate::http::{ApiRequest, Result, ZoomClient, encode_segment};
use crate::types::{ListPollsResponse, Poll, PollRequest};

impl ZoomClient {
    /// POST meetings/{meeting_id}/polls
    pub async fn create_meeting_poll(&self, meeting_id: u64, poll: &PollRequest) -> Result<Poll> {
        let request = ApiRequest::post_json(format!("meetings/{meeting_id}/polls"), poll)?;
        self.execute_json(&request).await
    }

    /// GET meetings/{meeting_id}/polls/{poll_id}
    pub async fn get_meeting_poll(&self, meeting_id: u64, poll_id: &str) -> Result<Poll> {
        let request = ApiRequest::get(poll_path(meeting_id, poll_id));
        self.execute_json(&request).await
    }

    /// GET meetings/{meeting_id}/polls
    pub async fn list_meeting_polls(&self, meeting_id: u64) -> Result<ListPollsResponse> {
        let request = ApiRequest::get(format!("meetings/{meeting_id}/polls"));
        self.execute_json(&request).await
    }

    /// Replace a poll's title and questions
    ///
    /// PUT meetings/{meeting_id}/polls/{poll_id}
    pub async fn update_meeting_poll(
        &self,
        meeting_id: u64,
        poll_id: &str,
        poll: &PollRequest,
    ) -> Result<()> {
        let request = ApiRequest::put_json(poll_path(meeting_id, poll_id), poll)?;
        self.execute_unit(&request).await
    }

    /// DELETE meetings/{meeting_id}/polls/{poll_id}
    pub async fn delete_meeting_poll(&self, meeting_id: u64, poll_id: &str) -> Result<()> {
        let request = ApiRequest::delete(poll_path(meeting_id, poll_id));
        self.execute_unit(&request).await
    }
}

fn poll_path(meeting_id: u64, poll_id: &str) -> String {
    format!("meetings/{meeting_id}/polls/{}", encode_segment(poll_id))
}
