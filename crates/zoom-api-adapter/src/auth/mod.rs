/*
[INPUT]:  API key/secret and token requests from the HTTP pipeline
[OUTPUT]: Signed bearer credentials and signing errors
[POS]:    Auth layer - handles Zoom API authentication
[UPDATE]: When auth flow or signing method changes
*/

pub mod jwt;
pub mod manager;
pub mod signer;

pub use jwt::{Claims, JwtSigner, TOKEN_TTL_SECONDS};
pub use manager::{AuthManager, IssuedToken};
pub use signer::{Credential, MockTokenSigner, SigningError, TokenSigner};
