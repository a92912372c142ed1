pub mod format;
pub mod league;
pub mod tft;

use crate::error::AppError;
use serde::Serialize;
use tracing::warn;

/// Riot caps match-id pages at 100.
pub const MAX_MATCH_IDS: usize = 100;

/// A slice of a player's match history. `start` is 1-based: 1 is the most
/// recent match, and 0 is treated the same as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchWindow {
    pub start: usize,
    pub count: usize,
}

impl MatchWindow {
    pub fn new(start: usize, count: usize) -> Self {
        MatchWindow { start, count }
    }

    pub fn recent(count: usize) -> Self {
        MatchWindow { start: 1, count }
    }

    pub fn offset(&self) -> usize {
        self.start.saturating_sub(1)
    }

    /// Ids to request upstream for this window, starting at `offset()`.
    pub fn page_size(&self) -> usize {
        self.count.min(MAX_MATCH_IDS)
    }
}

/// Result of normalizing one match in a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MatchSlot<T> {
    Ok(T),
    Failed { match_id: String, error: String },
}

impl<T> MatchSlot<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, MatchSlot::Ok(_))
    }

    pub fn ok(&self) -> Option<&T> {
        match self {
            MatchSlot::Ok(value) => Some(value),
            MatchSlot::Failed { .. } => None,
        }
    }
}

/// Fetches and normalizes the matches of `ids` that fall inside `window`,
/// in order. A failed fetch or normalization marks its own slot and the
/// batch carries on.
pub fn normalize_batch<M, T, F, N>(
    ids: &[String],
    window: MatchWindow,
    mut fetch: F,
    mut normalize: N,
) -> Vec<MatchSlot<T>>
where
    F: FnMut(&str) -> Result<Option<M>, AppError>,
    N: FnMut(&M) -> Result<T, AppError>,
{
    ids.iter()
        .skip(window.offset())
        .take(window.count)
        .map(|match_id| {
            let outcome = fetch(match_id).and_then(|raw| match raw {
                Some(raw) => normalize(&raw),
                None => Err(AppError::MatchNotFound(match_id.clone())),
            });

            match outcome {
                Ok(stats) => MatchSlot::Ok(stats),
                Err(e) => {
                    warn!(match_id = match_id.as_str(), error = %e, "skipping match");
                    MatchSlot::Failed {
                        match_id: match_id.clone(),
                        error: e.to_string(),
                    }
                }
            }
        })
        .collect()
}
