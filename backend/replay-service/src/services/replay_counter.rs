//! In-memory replay section counting.
//!
//! Tracks, per video, how many times each declared time-range section has
//! been replayed. Counts only ever increase and live for the process
//! lifetime; there is no persistence and no cleanup.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::models::ReplaySection;

/// Identity of a trackable section, scoped within one video.
///
/// A structured key rather than a `videoId_start_end` string, so a videoId
/// containing delimiters can never collide with another section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionKey {
    pub start_time: i64,
    pub end_time: i64,
}

impl From<ReplaySection> for SectionKey {
    fn from(section: ReplaySection) -> Self {
        Self {
            start_time: section.start_time,
            end_time: section.end_time,
        }
    }
}

/// Registry of replay counts keyed by video and section.
///
/// Clones share the same underlying registry, so one instance created at
/// startup can be handed to every request handler.
#[derive(Default, Clone)]
pub struct ReplayCounter {
    // video_id -> section -> replay count
    inner: Arc<RwLock<HashMap<String, HashMap<SectionKey, u64>>>>,
}

impl ReplayCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a video's replayed sections. Permitted once per video.
    ///
    /// The whole batch is validated before any count is written; a failed
    /// batch leaves the registry untouched. The write lock spans the
    /// uniqueness check and the insert, so two concurrent registrations for
    /// the same video cannot both succeed.
    pub async fn register_replays(
        &self,
        video_id: &str,
        duration: i64,
        sections: &[ReplaySection],
    ) -> Result<()> {
        let mut registry = self.inner.write().await;

        if video_id.is_empty() || sections.is_empty() || registry.contains_key(video_id) {
            return Err(AppError::ValidationError("Invalid replay request".into()));
        }

        validate_sections(duration, sections)?;

        let counts = registry.entry(video_id.to_string()).or_default();
        for section in sections {
            *counts.entry(SectionKey::from(*section)).or_insert(0) += 1;
        }

        info!(
            "Registered {} replay sections for video {}",
            sections.len(),
            video_id
        );

        Ok(())
    }

    /// Bump the count for one section, creating the video and section
    /// entries if absent. Returns the new count.
    ///
    /// No range validation happens here: the caller is trusted to name a
    /// section that may or may not have been registered.
    pub async fn increment_replay_count(
        &self,
        video_id: &str,
        start_time: i64,
        end_time: i64,
    ) -> u64 {
        let mut registry = self.inner.write().await;

        let count = registry
            .entry(video_id.to_string())
            .or_default()
            .entry(SectionKey {
                start_time,
                end_time,
            })
            .or_insert(0);
        *count += 1;

        debug!(
            "Replay count for video {} section [{}, {}) is now {}",
            video_id, start_time, end_time, *count
        );

        *count
    }

    /// Current count for a section; 0 when the video or section is unknown.
    pub async fn replay_count(&self, video_id: &str, start_time: i64, end_time: i64) -> u64 {
        let registry = self.inner.read().await;

        registry
            .get(video_id)
            .and_then(|counts| {
                counts.get(&SectionKey {
                    start_time,
                    end_time,
                })
            })
            .copied()
            .unwrap_or(0)
    }
}

/// Check every section of a registration batch against the declared video
/// duration (minutes). Returns the first violation found.
fn validate_sections(duration: i64, sections: &[ReplaySection]) -> Result<()> {
    let duration_in_seconds = duration * 60;
    let mut seen = HashSet::with_capacity(sections.len());

    for section in sections {
        if section.start_time < 0 || section.end_time <= 0 {
            return Err(AppError::ValidationError(
                "Invalid replay section: startTime and endTime must be greater than 0".into(),
            ));
        }

        if !seen.insert((section.start_time, section.end_time)) {
            return Err(AppError::ValidationError(
                "Invalid replay section: Duplicate section found".into(),
            ));
        }

        if section.start_time >= section.end_time
            || section.start_time >= duration_in_seconds
            || section.end_time > duration_in_seconds
        {
            return Err(AppError::ValidationError(
                "Invalid replay section: startTime and endTime must be within the duration, and endTime must be greater than 0".into(),
            ));
        }
    }

    Ok(())
}
