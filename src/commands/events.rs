use anyhow::Result;
use chrono::{DateTime, Utc};
use trailforward_core::events::{BoardContext, EventBoard};
use trailforward_core::store::RecordStore;

use super::board_document;
use crate::render::render_board;

pub async fn run<S: RecordStore>(store: S, context: BoardContext, now: DateTime<Utc>) -> Result<()> {
    println!("{}", board(store, context, now).await);
    Ok(())
}

async fn board<S: RecordStore>(store: S, context: BoardContext, now: DateTime<Utc>) -> String {
    let mut doc = board_document();
    let mut board = EventBoard::new(store, context);
    board.load(&mut doc, now).await;
    render_board(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use trailforward_core::EventRecord;
    use trailforward_core::store::MemoryStore;

    #[tokio::test]
    async fn test_board_splits_around_now() {
        let store = MemoryStore::with_records(vec![
            EventRecord {
                id: 1,
                name: "Seed swap".to_string(),
                date: Utc.with_ymd_and_hms(2031, 3, 1, 10, 0, 0).unwrap(),
                location: "Library".to_string(),
            },
            EventRecord {
                id: 2,
                name: "Frost walk".to_string(),
                date: Utc.with_ymd_and_hms(2029, 1, 5, 10, 0, 0).unwrap(),
                location: "Ridge".to_string(),
            },
        ]);
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();

        let out = board(store, BoardContext::default(), now).await;

        let past = out.find("Past events").unwrap();
        assert!(out.find("Seed swap").unwrap() < past);
        assert!(out.find("Frost walk").unwrap() > past);
        assert!(!out.contains("[delete]"));
    }
}
