//! HTTP handlers for the list resource.
//!
//! # Responsibility
//! - Decode path ids and JSON bodies.
//! - Delegate to `ListService` and wrap results in the `Results` envelope.
//!
//! # Invariants
//! - Bodies are decoded as JSON whatever the `Content-Type` header says.
//! - Update reports a missing target before any body problem.

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use listd_core::{List, ListDraft, ListId};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

pub async fn health() -> Json<Envelope<HealthStatus>> {
    Json(Envelope::new(HealthStatus { status: "ok" }))
}

/// `GET /list`
pub async fn list_lists(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<List>>>, ApiError> {
    let lists = state
        .with_list_service(|service| Ok(service.list_lists()?))
        .await?;
    Ok(Json(Envelope::new(lists)))
}

/// `POST /list`
pub async fn create_list(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Envelope<List>>), ApiError> {
    let draft = decode_draft(&body)?;
    let list = state
        .with_list_service(move |service| Ok(service.create_list(&draft)?))
        .await?;
    Ok((StatusCode::CREATED, Json(Envelope::new(list))))
}

/// `GET /list/{id}`
pub async fn get_list(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Envelope<List>>, ApiError> {
    let id = parse_list_id(&raw_id)?;
    let list = state
        .with_list_service(move |service| Ok(service.get_list(id)?))
        .await?;
    Ok(Json(Envelope::new(list)))
}

/// `PUT /list/{id}`
pub async fn update_list(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<Envelope<List>>, ApiError> {
    let id = parse_list_id(&raw_id)?;
    let draft = decode_draft(&body);
    let list = state
        .with_list_service(move |service| match draft {
            Ok(draft) => Ok(service.update_list(id, &draft)?),
            Err(err) => {
                service.ensure_exists(id)?;
                Err(err)
            }
        })
        .await?;
    Ok(Json(Envelope::new(list)))
}

/// `DELETE /list/{id}`
pub async fn delete_list(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_list_id(&raw_id)?;
    state
        .with_list_service(move |service| Ok(service.delete_list(id)?))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

fn decode_draft(body: &[u8]) -> Result<ListDraft, ApiError> {
    serde_json::from_slice(body)
        .map_err(|err| ApiError::BadRequest(format!("invalid JSON body: {err}")))
}

fn parse_list_id(raw: &str) -> Result<ListId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid list id `{raw}`")))
}

#[cfg(test)]
mod tests {
    use super::{decode_draft, parse_list_id};
    use crate::error::ApiError;

    #[test]
    fn parse_list_id_accepts_integers_only() {
        assert_eq!(parse_list_id("12").unwrap(), 12);
        assert_eq!(parse_list_id("0").unwrap(), 0);
        assert!(matches!(parse_list_id("abc"), Err(ApiError::BadRequest(_))));
        assert!(matches!(parse_list_id("1.5"), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn decode_draft_rejects_malformed_json_and_empty_body() {
        assert_eq!(decode_draft(br#"{"Name":"Foo"}"#).unwrap().name, "Foo");
        assert!(matches!(decode_draft(b"{"), Err(ApiError::BadRequest(_))));
        assert!(matches!(decode_draft(b""), Err(ApiError::BadRequest(_))));
    }
}
