/*
[INPUT]:  Meeting ids, registrant details and status changes
[OUTPUT]: Registration confirmations and registrant listings
[POS]:    HTTP layer - meeting registrant endpoints
[UPDATE]: When adding new registrant endpoints or fields
*/

use crate::http::{ApiRequest, Result, ZoomClient};
use crate::types::{
    AddRegistrantRequest, AddRegistrantResponse, ListRegistrantsQuery, ListRegistrantsResponse,
    UpdateRegistrantStatusRequest,
};

impl ZoomClient {
    /// Register a participant for a meeting
    ///
    /// POST meetings/{meeting_id}/registrants
    pub async fn add_meeting_registrant(
        &self,
        meeting_id: u64,
        registrant: &AddRegistrantRequest,
    ) -> Result<AddRegistrantResponse> {
        let request = ApiRequest::post_json(format!("meetings/{meeting_id}/registrants"), registrant)?;
        self.execute_json(&request).await
    }

    /// GET meetings/{meeting_id}/registrants?status={status}
    pub async fn list_meeting_registrants(
        &self,
        meeting_id: u64,
        query: &ListRegistrantsQuery,
    ) -> Result<ListRegistrantsResponse> {
        let request = ApiRequest::get(format!("meetings/{meeting_id}/registrants"))
            .with_query(query.to_pairs());
        self.execute_json(&request).await
    }

    /// Approve, deny or cancel registrants
    ///
    /// PUT meetings/{meeting_id}/registrants/status
    pub async fn update_registrant_status(
        &self,
        meeting_id: u64,
        update: &UpdateRegistrantStatusRequest,
    ) -> Result<()> {
        let request =
            ApiRequest::put_json(format!("meetings/{meeting_id}/registrants/status"), update)?;
        self.execute_unit(&request).await
    }
}
