use serde::{Deserialize, Serialize};

/// A replayed time range `[startTime, endTime)` within a video, in whole
/// seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaySection {
    pub start_time: i64,
    pub end_time: i64,
}

/// Body of `POST /video-details`. `duration` is the video length in minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackReplayRequest {
    pub video_id: String,
    pub duration: i64,
    pub replayed_sections: Vec<ReplaySection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackReplayResponse {
    pub message: String,
    pub video_id: String,
    pub replayed_sections: Vec<ReplaySection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncreaseReplayResponse {
    pub message: String,
    pub video_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayCountResponse {
    pub replay_count: u64,
}

/// Query parameters identifying a section. Times arrive as text and are
/// parsed by the handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionQuery {
    pub video_id: String,
    pub start_time: String,
    pub end_time: String,
}
