/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Zoom adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    AuthManager,
    Credential,
    JwtSigner,
    MockTokenSigner,
    SigningError,
    TokenSigner,
};

// Re-export commonly used types from http
pub use http::{
    ApiConfig,
    ApiRequest,
    ClientConfig,
    ErrorKind,
    Result,
    ZoomClient,
    ZoomError,
};

// Re-export all types
pub use types::*;
