//! HTTP handlers for the replay service.
//!
//! Thin translation layer between the wire format and [`ReplayCounter`];
//! all counting rules live in the service.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::models::{
    IncreaseReplayResponse, ReplayCountResponse, SectionQuery, TrackReplayRequest,
    TrackReplayResponse,
};
use crate::services::ReplayCounter;

/// Register a video's replayed sections
pub async fn track_replay(
    counter: web::Data<ReplayCounter>,
    payload: web::Json<TrackReplayRequest>,
) -> Result<HttpResponse, AppError> {
    counter
        .register_replays(
            &payload.video_id,
            payload.duration,
            &payload.replayed_sections,
        )
        .await?;

    Ok(HttpResponse::Ok().json(TrackReplayResponse {
        message: "Replay tracked successfully".to_string(),
        video_id: payload.video_id.clone(),
        replayed_sections: payload.replayed_sections.clone(),
    }))
}

/// Increase the replay count of a single section
pub async fn increase_replay_count(
    counter: web::Data<ReplayCounter>,
    query: web::Query<SectionQuery>,
) -> Result<HttpResponse, AppError> {
    let (start_time, end_time) = parse_section_times(&query)?;

    counter
        .increment_replay_count(&query.video_id, start_time, end_time)
        .await;

    Ok(HttpResponse::Ok().json(IncreaseReplayResponse {
        message: "Replay count increased successfully".to_string(),
        video_id: query.video_id.clone(),
    }))
}

/// Read the replay count of a single section
pub async fn get_replay_count(
    counter: web::Data<ReplayCounter>,
    query: web::Query<SectionQuery>,
) -> Result<HttpResponse, AppError> {
    // A section whose times are not integers can never have been recorded;
    // reads never fail, so such a query resolves to zero.
    let replay_count = match parse_section_times(&query) {
        Ok((start_time, end_time)) => {
            counter
                .replay_count(&query.video_id, start_time, end_time)
                .await
        }
        Err(_) => 0,
    };

    Ok(HttpResponse::Ok().json(ReplayCountResponse { replay_count }))
}

fn parse_section_times(query: &SectionQuery) -> Result<(i64, i64), AppError> {
    match (
        query.start_time.parse::<i64>(),
        query.end_time.parse::<i64>(),
    ) {
        (Ok(start_time), Ok(end_time)) => Ok((start_time, end_time)),
        _ => Err(AppError::ValidationError(
            "Invalid replay section: startTime and endTime must be valid integers".to_string(),
        )),
    }
}

/// Configure routes for the replay service
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/video-details", web::post().to(track_replay))
        .route(
            "/increase-replay-count",
            web::post().to(increase_replay_count),
        )
        .route("/replay-count", web::get().to(get_replay_count));
}
