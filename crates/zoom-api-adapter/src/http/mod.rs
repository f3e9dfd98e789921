/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod meetings;
pub mod past_meetings;
pub mod polls;
pub mod registrants;
pub mod request;

pub use error::{ErrorKind, Result, ZoomError};
pub use request::{ApiRequest, encode_meeting_uuid};
pub(crate) use request::encode_segment;

pub use client::{ApiConfig, ClientConfig, DEFAULT_BASE_URL, ZoomClient};
