use anyhow::Result;
use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use trailforward_core::events::{BoardContext, CreateOutcome, EventBoard, EventForm};
use trailforward_core::store::RecordStore;

use super::board_document;
use crate::render::render_board;

pub async fn run<S: RecordStore>(store: S, context: BoardContext, form: EventForm, now: DateTime<Utc>) -> Result<()> {
    println!("{}", add(store, context, form, now).await?);
    Ok(())
}

async fn add<S: RecordStore>(store: S, context: BoardContext, mut form: EventForm, now: DateTime<Utc>) -> Result<String> {
    let name = form.name.clone();
    let mut doc = board_document();
    let mut board = EventBoard::new(store, context);

    match board.create(&mut doc, &mut form, now).await {
        CreateOutcome::Created => Ok(format!(
            "{} Added {}\n\n{}",
            "✓".green(),
            name.bold(),
            render_board(&doc)
        )),
        CreateOutcome::Failed => anyhow::bail!("Failed to add event '{}'", form.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::Arc;
    use trailforward_core::store::MemoryStore;

    fn form(date: &str) -> EventForm {
        EventForm {
            name: "Creek cleanup".to_string(),
            date: date.to_string(),
            location: "Mill Creek".to_string(),
        }
    }

    #[tokio::test]
    async fn test_added_event_shows_on_refetched_board() {
        let store = Arc::new(MemoryStore::new());
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();

        let out = add(store.clone(), BoardContext::default(), form("2030-04-12T09:30"), now)
            .await
            .unwrap();

        assert!(out.contains("Added"));
        assert!(out.find("Creek cleanup").unwrap() < out.find("Past events").unwrap());
        assert_eq!(store.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_unparseable_date_fails_without_storing() {
        let store = Arc::new(MemoryStore::new());
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();

        let err = add(store.clone(), BoardContext::default(), form("next tuesday"), now)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Creek cleanup"));
        assert!(store.list().await.unwrap().is_empty());
    }
}
