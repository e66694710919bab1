//! Query controller
//!
//! Owns the id-versus-name decision. A query made only of ASCII decimal
//! digits is always an id lookup, even when some title is all digits;
//! anything else is a name lookup.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::entity::{SongRequest, SongResponse};
use crate::error::{Result, SongFinderError};
use crate::repository::SongRepository;

static ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("id pattern is a valid regex"));

/// Which repository lookup a query resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Id,
    Name,
}

/// Classify a query string
pub fn classify(query: &str) -> QueryKind {
    if ID_PATTERN.is_match(query) {
        QueryKind::Id
    } else {
        QueryKind::Name
    }
}

/// Dispatches song queries to the repository
#[derive(Clone)]
pub struct SongController {
    repository: SongRepository,
}

impl SongController {
    pub fn new(repository: SongRepository) -> Self {
        Self { repository }
    }

    /// Finds a song with the given query parameters
    pub async fn execute_query(&self, request: &SongRequest) -> Result<SongResponse> {
        let query = request.name();

        let found = match classify(query) {
            QueryKind::Id => match query.parse::<i64>() {
                Ok(song_id) => self.repository.find_by_id(song_id).await?,
                Err(_) => {
                    // All digits but out of i64 range: no stored id can match
                    debug!(query, "numeric query exceeds id range");
                    None
                }
            },
            QueryKind::Name => self.repository.find_by_name(query).await?,
        };

        let document = found.ok_or_else(|| SongFinderError::not_found(query))?;
        Ok(SongResponse::try_from(&document)?)
    }
}
