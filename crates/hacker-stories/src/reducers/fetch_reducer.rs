//! Fetch Reducer
//!
//! Drives the `FetchStatus` state machine.

use crate::actions::FetchAction;
use crate::domain_models::FetchStatus;

pub fn reduce_fetch(state: FetchStatus, action: &FetchAction) -> FetchStatus {
    match action {
        FetchAction::Started => {
            if state.is_loading() {
                log::debug!("Fetch started while another fetch is loading");
            }
            FetchStatus::Loading
        }
        FetchAction::Succeeded => {
            if !state.is_loading() {
                log::warn!("Fetch succeeded without being started (was {:?})", state);
            }
            FetchStatus::Loaded
        }
        FetchAction::Failed(reason) => {
            log::error!("Failed to fetch stories: {}", reason);
            FetchStatus::Failed(reason.clone())
        }
    }
}
