use anyhow::Result;
use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use trailforward_core::events::{BoardContext, DeleteOutcome, EventBoard};
use trailforward_core::store::RecordStore;

use super::board_document;
use crate::render::render_board;

pub async fn run<S: RecordStore>(store: S, context: BoardContext, id: i64, now: DateTime<Utc>) -> Result<()> {
    println!("{}", delete(store, context, id, now).await?);
    Ok(())
}

/// Load the editable board, then press the item's delete button. An id
/// that is not on the board is deleted from the store directly.
async fn delete<S: RecordStore>(store: S, context: BoardContext, id: i64, now: DateTime<Utc>) -> Result<String> {
    let mut doc = board_document();
    let mut board = EventBoard::new(store, BoardContext { editable: true, ..context });
    board.load(&mut doc, now).await;

    let outcome = match doc.click(&format!("delete-{id}")) {
        Some(action) => board.dispatch(&mut doc, action).await,
        None => Some(board.delete(&mut doc, id).await),
    };

    match outcome {
        Some(DeleteOutcome::Removed) => Ok(format!("{} Deleted event {id}\n\n{}", "✓".green(), render_board(&doc))),
        Some(DeleteOutcome::NotRendered) => Ok(format!(
            "{} Event {id} was not on the board",
            "!".yellow()
        )),
        Some(DeleteOutcome::Missing) => anyhow::bail!("Event {id} not found"),
        Some(DeleteOutcome::Failed) | None => anyhow::bail!("Failed to delete event {id}"),
    }
}
