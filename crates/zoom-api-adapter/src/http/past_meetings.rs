/*
[INPUT]:  Meeting ids and past meeting instance UUIDs
[OUTPUT]: Completed meeting instances, details and participants
[POS]:    HTTP layer - past meeting report endpoints
[UPDATE]: When adding new past meeting endpoints
*/

use crate::http::{ApiRequest, Result, ZoomClient, encode_meeting_uuid};
use crate::types::{
    PageQuery, PastMeetingDetails, PastMeetingInstancesResponse, PastMeetingParticipantsResponse,
};

impl ZoomClient {
    /// List completed instances of a (possibly recurring) meeting
    ///
    /// GET past_meetings/{meeting_id}/instances
    pub async fn list_past_meeting_instances(
        &self,
        meeting_id: u64,
    ) -> Result<PastMeetingInstancesResponse> {
        let request = ApiRequest::get(format!("past_meetings/{meeting_id}/instances"));
        self.execute_json(&request).await
    }

    /// GET past_meetings/{meeting_uuid}
    pub async fn get_past_meeting(&self, meeting_uuid: &str) -> Result<PastMeetingDetails> {
        let endpoint = format!("past_meetings/{}", encode_meeting_uuid(meeting_uuid));
        self.execute_json(&ApiRequest::get(endpoint)).await
    }

    /// GET past_meetings/{meeting_uuid}/participants
    pub async fn list_past_meeting_participants(
        &self,
        meeting_uuid: &str,
        page: &PageQuery,
    ) -> Result<PastMeetingParticipantsResponse> {
        let endpoint = format!(
            "past_meetings/{}/participants",
            encode_meeting_uuid(meeting_uuid)
        );
        let mut query = Vec::new();
        page.append_to(&mut query);
        let request = ApiRequest::get(endpoint).with_query(query);
        self.execute_json(&request).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::auth::MockTokenSigner;
    use crate::http::{ClientConfig, ZoomClient};
    use crate::types::PageQuery;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ZoomClient {
        ZoomClient::with_signer(
            &server.uri(),
            Arc::new(MockTokenSigner::new("tok")),
            ClientConfig::default(),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_list_past_meeting_instances() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "meetings": [
                {"uuid": "Bznyg8KZTdCVbQxvS/oZ7w==", "start_time": "2024-03-01T09:00:00Z"},
                {"uuid": "3wYG1hwnTpqZ3ZwJ2MPjSg==", "start_time": "2024-03-08T09:00:00Z"}
            ]
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/past_meetings/987654321/instances"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .list_past_meeting_instances(987_654_321)
            .await
            .expect("list_past_meeting_instances failed");

        assert_eq!(response.meetings.len(), 2);
        assert_eq!(response.meetings[0].uuid, "Bznyg8KZTdCVbQxvS/oZ7w==");
    }

    #[tokio::test]
    async fn test_list_participants_double_encodes_slash_uuid() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "page_count": 1,
            "page_size": 30,
            "total_records": 1,
            "next_page_token": "",
            "participants": [
                {"id": "30R7kT7bTIKSNUFEuH_Qlg", "name": "Ada Lovelace", "user_email": "ada@example.com", "duration": 3540}
            ]
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/past_meetings/%252FajXp112QmuoKj4854875%253D%253D/participants"))
            .and(query_param("page_size", "30"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let page = PageQuery {
            page_size: Some(30),
            next_page_token: None,
        };
        let response = client_for(&server)
            .list_past_meeting_participants("/ajXp112QmuoKj4854875==", &page)
            .await
            .expect("list_past_meeting_participants failed");

        assert_eq!(response.total_records, 1);
        assert_eq!(response.participants[0].name, "Ada Lovelace");
        assert_eq!(response.participants[0].duration, Some(3540));
    }

    #[tokio::test]
    async fn test_get_past_meeting() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/past_meetings/3wYG1hwnTpqZ3ZwJ2MPjSg%3D%3D"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "uuid": "3wYG1hwnTpqZ3ZwJ2MPjSg==",
                "id": 987654321,
                "topic": "Weekly sync",
                "type": 8,
                "participants_count": 7,
                "total_minutes": 312
            })))
            .expect(1)
            .mount(&server)
            .await;

        let details = client_for(&server)
            .get_past_meeting("3wYG1hwnTpqZ3ZwJ2MPjSg==")
            .await
            .expect("get_past_meeting failed");

        assert_eq!(details.id, 987_654_321);
        assert_eq!(details.participants_count, Some(7));
    }
}
