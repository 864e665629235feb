//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::{print_cmd_info, print_cmd_success};
use std::error::Error;

/// Fetches one quote, prints it, and optionally toggles its like state.
///
/// # Arguments
/// * `session` - Session data from setup
/// * `like` - Toggle the like state of the fetched quote
///
/// # Returns
/// * `Ok(())` - A quote was fetched
/// * `Err` - The fetch failed; the activity log has the reason
pub async fn run_headless_mode(mut session: SessionData, like: bool) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.endpoint);

    let controller = &mut session.controller;
    let fetched = controller.fetch_random_quote().await;

    if fetched && like {
        controller.toggle_like();
    }

    // Event log: print displayable events to console
    for event in controller.activity_logs().iter().filter(|e| e.should_display()) {
        println!("{}", event);
    }

    let Some(quote) = controller.current_quote().filter(|_| fetched) else {
        return Err(Box::from("Failed to fetch a quote."));
    };
    println!("\n{}\n", quote);

    if like {
        if controller.is_current_quote_liked() {
            print_cmd_success!("Liked", "{} quote(s) saved", controller.liked_quotes().len());
        } else {
            print_cmd_info!("Unliked", "{} quote(s) saved", controller.liked_quotes().len());
        }
    }

    print_session_exit_success();
    Ok(())
}
