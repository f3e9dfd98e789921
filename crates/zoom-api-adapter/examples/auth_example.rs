/*
[INPUT]:  API key and secret
[OUTPUT]: Signed HS256 token and cached credential state
[POS]:    Examples - token signing demonstration
[UPDATE]: When auth flow changes
*/

use std::sync::Arc;

use zoom_api_adapter::*;

/// Example: token signing and caching
///
/// No network access is needed; tokens are signed locally.
fn main() {
    println!("=== Zoom Authentication Example ===\n");

    let signer = JwtSigner::new("example-key", "example-secret");
    println!("Signer: {:?}", signer);

    match signer.sign() {
        Ok(credential) => {
            println!("✓ Token signed, expires at {}", credential.expires_at);
            println!("  {}", credential.token);
        }
        Err(e) => {
            eprintln!("✗ Signing failed: {}", e);
            return;
        }
    }

    let auth_manager = AuthManager::new(Arc::new(signer));
    println!("\nCached credential expired? {}", auth_manager.is_expired());

    match auth_manager.ensure_token() {
        Ok(issued) => println!("✓ Token generation {} cached", issued.generation),
        Err(e) => println!("✗ Error: {}", e),
    }
    println!("Cached credential expired? {}", auth_manager.is_expired());

    // An empty secret is rejected before any request is made
    match JwtSigner::new("example-key", "").sign() {
        Ok(_) => println!("✗ Unexpectedly signed with an empty secret"),
        Err(e) => println!("\n✓ Empty secret rejected: {}", e),
    }

    println!("\n✓ Authentication example complete");
}
