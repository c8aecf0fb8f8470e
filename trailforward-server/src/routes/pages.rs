//! Server-rendered pages
//!
//! Each page is a [`Document`] skeleton filled in by the same board and
//! gallery controllers the CLI uses, then serialized to HTML.

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, header},
    response::Html,
    routing::get,
};
use chrono::Utc;
use trailforward_core::constants::{GALLERY_CONTROLS_ID, GALLERY_ID, PAST_LIST_ID, UPCOMING_LIST_ID};
use trailforward_core::events::EventBoard;
use trailforward_core::gallery::GalleryViewer;
use trailforward_core::maps::Platform;
use trailforward_core::ui::{Document, Element, Node};

use crate::state::AppState;

/// Board with delete buttons and the add-event form.
pub const EDIT_EVENTS_PATH: &str = "/edit-events";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/calendar", get(calendar))
        .route(EDIT_EVENTS_PATH, get(edit_events))
}

/// GET / - Home page with the photo gallery
async fn home(State(state): State<AppState>) -> Html<String> {
    let mut doc = layout(
        "Trail Forward",
        vec![
            Element::new("section")
                .with_class("gallery")
                .with_child(Element::new("div").with_id(GALLERY_ID))
                .with_child(Element::new("nav").with_id(GALLERY_CONTROLS_ID))
                .into(),
        ],
    );

    let mut viewer = GalleryViewer::new(state.images.clone(), state.config.gallery_window);
    viewer.load(&mut doc).await;

    Html(page_html(&doc))
}

/// GET /calendar - Upcoming and past events
async fn calendar(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    let doc = layout(
        "Events - Trail Forward",
        vec![
            events_section("Upcoming Events", UPCOMING_LIST_ID),
            events_section("Past Events", PAST_LIST_ID),
        ],
    );

    Html(page_html(&board_page(&state, doc, false, &headers).await))
}

/// GET /edit-events - Editable board plus the add-event form
async fn edit_events(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    let doc = layout(
        "Edit Events - Trail Forward",
        vec![
            add_event_form(),
            events_section("Upcoming Events", UPCOMING_LIST_ID),
            events_section("Past Events", PAST_LIST_ID),
        ],
    );

    Html(page_html(&board_page(&state, doc, true, &headers).await))
}

/// Load the board into `doc`, with map links for the requesting platform.
async fn board_page(state: &AppState, mut doc: Document, editable: bool, headers: &HeaderMap) -> Document {
    let platform = headers
        .get(header::USER_AGENT)
        .and_then(|ua| ua.to_str().ok())
        .map(Platform::from_user_agent)
        .unwrap_or_default();

    let context = state.config.board_context(editable, platform);
    let mut board = EventBoard::new(state.records.clone(), context);
    board.load(&mut doc, Utc::now()).await;
    doc
}

fn add_event_form() -> Node {
    let field = |label: &str, name: &str, kind: &str| -> Node {
        Element::new("label")
            .with_text(label)
            .with_child(
                Element::new("input")
                    .with_attr("type", kind)
                    .with_attr("name", name)
                    .with_attr("required", "required"),
            )
            .into()
    };

    Element::new("section")
        .with_class("add-event")
        .with_child(Element::new("h2").with_text("Add Event"))
        .with_child(
            Element::new("form")
                .with_id("event-form")
                .with_attr("method", "post")
                .with_attr("action", "/events")
                .with_children([
                    field("Name", "eventName", "text"),
                    field("Date", "eventDate", "datetime-local"),
                    field("Location", "eventLocation", "text"),
                    Element::new("button").with_attr("type", "submit").with_text("Add Event").into(),
                ]),
        )
        .into()
}

fn events_section(title: &str, list_id: &str) -> Node {
    Element::new("section")
        .with_class("events")
        .with_child(Element::new("h2").with_text(title))
        .with_child(Element::new("ul").with_id(list_id))
        .into()
}

fn layout(title: &str, content: Vec<Node>) -> Document {
    let head = Element::new("head")
        .with_child(Element::new("meta").with_attr("charset", "utf-8"))
        .with_child(
            Element::new("meta")
                .with_attr("name", "viewport")
                .with_attr("content", "width=device-width, initial-scale=1"),
        )
        .with_child(Element::new("title").with_text(title))
        .with_child(
            Element::new("link")
                .with_attr("rel", "stylesheet")
                .with_attr("href", "/css/styles.css"),
        );

    let nav = Element::new("nav").with_id("main-nav").with_children([
        Element::new("a").with_attr("href", "/").with_text("Home").into(),
        Element::new("a").with_attr("href", "/calendar").with_text("Events").into(),
        Element::new("a").with_attr("href", EDIT_EVENTS_PATH).with_text("Edit Events").into(),
    ]);

    let body = Element::new("body")
        .with_child(Element::new("header").with_child(nav))
        .with_child(Element::new("main").with_children(content));

    Document::new(
        Element::new("html")
            .with_attr("lang", "en")
            .with_child(head)
            .with_child(body),
    )
}

fn page_html(doc: &Document) -> String {
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}
