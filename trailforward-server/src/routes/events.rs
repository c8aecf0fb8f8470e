//! Event record endpoints
//!
//! `POST /events` takes JSON or an HTML form body. Form submissions, and the
//! per-item delete forms posting to `/events/{id}/delete`, are answered with a
//! redirect back to the edit page.

use axum::{
    Form, Json, Router,
    extract::{FromRequest, Path, Request, State},
    http::{StatusCode, header},
    response::{IntoResponse, Redirect, Response},
    routing::{delete, get, post},
};
use tracing::{info, warn};
use trailforward_core::store::RecordStore;
use trailforward_core::{CoreError, EventRecord, NewEvent};

use crate::routes::AppError;
use crate::routes::pages::EDIT_EVENTS_PATH;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/{id}", delete(delete_event))
        .route("/events/{id}/delete", post(delete_event_form))
}

/// A `NewEvent` from either a JSON or a urlencoded form body.
pub struct EventPayload {
    event: NewEvent,
    from_form: bool,
}

impl<S: Send + Sync> FromRequest<S> for EventPayload {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let from_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        let event = if from_form {
            let Form(event) = Form::<NewEvent>::from_request(req, state).await?;
            event
        } else {
            let Json(event) = Json::<NewEvent>::from_request(req, state).await?;
            event
        };

        Ok(EventPayload { event, from_form })
    }
}

/// GET /events - List every event
async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<EventRecord>>, AppError> {
    let events = state.records.list().await?;
    Ok(Json(events))
}

/// POST /events - Create an event
async fn create_event(State(state): State<AppState>, payload: EventPayload) -> Result<Response, AppError> {
    let EventPayload { event, from_form } = payload;
    info!(name = %event.name, date = %event.date, "Adding new event");
    state.records.create(&event).await?;

    if from_form {
        Ok(Redirect::to(EDIT_EVENTS_PATH).into_response())
    } else {
        Ok(StatusCode::CREATED.into_response())
    }
}

/// DELETE /events/{id} - Delete an event
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    info!(id, "Deleting event");
    state.records.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /events/{id}/delete - Delete from the edit page's form
///
/// An id that is already gone redirects like a successful delete, so a
/// stale page shows the current board.
async fn delete_event_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    info!(id, "Deleting event");
    match state.records.delete(id).await {
        Ok(()) => {}
        Err(CoreError::NotFound(_)) => warn!(id, "Event already gone from the store"),
        Err(e) => return Err(e.into()),
    }
    Ok(Redirect::to(EDIT_EVENTS_PATH))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};

    use crate::routes::test_support::{body_string, send, test_app};

    fn post_form(body: &str) -> Request<Body> {
        Request::post("/events")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_event(json: &str) -> Request<Body> {
        Request::post("/events")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_list_delete_round() {
        let dir = tempfile::tempdir().unwrap();
        let (app, _) = test_app(dir.path());

        let created = send(
            &app,
            post_event(r#"{"eventName":"Trail day","eventDate":"2030-03-02T10:00","eventLocation":"North gate"}"#),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);

        let listed = send(&app, Request::get("/events").body(Body::empty()).unwrap()).await;
        assert_eq!(listed.status(), StatusCode::OK);
        let body = body_string(listed).await;
        assert!(body.contains(r#""id":1"#), "got {body}");
        assert!(body.contains(r#""date":"2030-03-02T10:00:00Z""#), "got {body}");

        let deleted = send(&app, Request::delete("/events/1").body(Body::empty()).unwrap()).await;
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

        let again = send(&app, Request::delete("/events/1").body(Body::empty()).unwrap()).await;
        assert_eq!(again.status(), StatusCode::NOT_FOUND);
        assert!(body_string(again).await.contains("Event not found"));
    }

    #[tokio::test]
    async fn test_create_rejects_bad_dates() {
        let dir = tempfile::tempdir().unwrap();
        let (app, records) = test_app(dir.path());

        let response = send(
            &app,
            post_event(r#"{"name":"Picnic","date":"whenever","location":"Park"}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(body["error"].as_str().unwrap().contains("Invalid event date"), "got {body}");
        assert!(trailforward_core::store::RecordStore::list(records.as_ref()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_form_bad_date_is_json_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let (app, _) = test_app(dir.path());

        let response = send(&app, post_form("eventName=Hike&eventDate=soon&eventLocation=Park")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_form_post_creates_and_redirects_to_edit_page() {
        let dir = tempfile::tempdir().unwrap();
        let (app, records) = test_app(dir.path());

        let response = send(
            &app,
            post_form("eventName=Hike&eventDate=2030-01-01T10%3A00&eventLocation=Park"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/edit-events");

        let stored = trailforward_core::store::RecordStore::list(records.as_ref()).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Hike");
        assert_eq!(stored[0].location, "Park");
        assert_eq!(stored[0].date.to_rfc3339(), "2030-01-01T10:00:00+00:00");
    }

    #[tokio::test]
    async fn test_delete_form_removes_and_redirects() {
        let dir = tempfile::tempdir().unwrap();
        let (app, records) = test_app(dir.path());
        send(
            &app,
            post_event(r#"{"name":"Picnic","date":"2030-06-01","location":"Park"}"#),
        )
        .await;

        let response = send(&app, Request::post("/events/1/delete").body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/edit-events");
        assert!(trailforward_core::store::RecordStore::list(records.as_ref()).await.unwrap().is_empty());

        // A second press on a stale page still lands back on the board
        let again = send(&app, Request::post("/events/1/delete").body(Body::empty()).unwrap()).await;
        assert_eq!(again.status(), StatusCode::SEE_OTHER);
    }
}
