//! Boundary between the transport and the lookup logic
//!
//! Lets the lookup be driven without an HTTP server. Errors pass through
//! unchanged.

use crate::controller::SongController;
use crate::entity::{SongRequest, SongResponse};
use crate::error::Result;

/// Finds a song with the given query parameters
pub async fn find_song(controller: &SongController, query: &SongRequest) -> Result<SongResponse> {
    controller.execute_query(query).await
}
