//! Gallery listing endpoint

use axum::{Json, Router, extract::State, routing::get};
use trailforward_core::store::ImageStore;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/gallery-images", get(list_images))
}

/// GET /gallery-images - List gallery image URLs
async fn list_images(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let images = state.images.list().await?;
    Ok(Json(images))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};

    use crate::routes::test_support::{body_string, send, test_app};

    fn get_images() -> Request<Body> {
        Request::get("/gallery-images").body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_lists_gallery_images() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("gallery")).unwrap();
        std::fs::write(dir.path().join("gallery").join("falls.jpg"), b"x").unwrap();

        let (app, _) = test_app(dir.path());
        let response = send(&app, get_images()).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"["/images/gallery/falls.jpg"]"#);
    }

    #[tokio::test]
    async fn test_empty_gallery_is_not_found_and_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let (app, _) = test_app(dir.path());

        let missing = send(&app, get_images()).await;
        assert_eq!(missing.status(), StatusCode::INTERNAL_SERVER_ERROR);

        std::fs::create_dir(dir.path().join("gallery")).unwrap();
        let empty = send(&app, get_images()).await;
        assert_eq!(empty.status(), StatusCode::NOT_FOUND);
    }
}
