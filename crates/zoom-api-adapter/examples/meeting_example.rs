/*
[INPUT]:  ZOOM_API_KEY / ZOOM_API_SECRET environment variables
[OUTPUT]: Scheduled meeting, its invitation, and the host's meeting list
[POS]:    Examples - meeting lifecycle walkthrough
[UPDATE]: When meeting endpoints change
*/

use zoom_api_adapter::*;

/// Example: create, inspect and delete a meeting
///
/// Requires real API credentials; every step prints its outcome.
#[tokio::main]
async fn main() {
    println!("=== Zoom Meeting Example ===\n");

    let (Ok(key), Ok(secret)) = (std::env::var("ZOOM_API_KEY"), std::env::var("ZOOM_API_SECRET"))
    else {
        eprintln!("Set ZOOM_API_KEY and ZOOM_API_SECRET to run this example");
        return;
    };

    let client = match ZoomClient::new(ApiConfig::new(key, secret)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created for {}\n", client.base_url());

    let request = CreateMeetingRequest {
        start_time: Some("2030-01-15T10:00:00Z".to_string()),
        duration: Some(30),
        agenda: Some("Walkthrough of the adapter".to_string()),
        ..CreateMeetingRequest::new("Adapter demo", MeetingType::Scheduled)
    };

    println!("Creating meeting...");
    let meeting = match client.create_meeting("me", request).await {
        Ok(m) => {
            println!("✓ Meeting {} created: {:?}", m.id, m.join_url);
            m
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };

    println!("\nFetching invitation...");
    match client.get_meeting_invitation(meeting.id).await {
        Ok(invitation) => println!("✓ Invitation:\n{}", invitation.invitation),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nListing upcoming meetings...");
    let query = ListMeetingsQuery {
        meeting_type: Some(ListMeetingsType::Upcoming),
        ..Default::default()
    };
    match client.list_meetings("me", &query).await {
        Ok(list) => println!("✓ {} upcoming meeting(s)", list.total_records),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nDeleting meeting {}...", meeting.id);
    match client.delete_meeting(meeting.id).await {
        Ok(()) => println!("✓ Deleted"),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Meeting example complete");
}
