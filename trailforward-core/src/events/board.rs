//! The events board: fetches records, categorizes them and keeps the
//! upcoming/past lists of a surface in sync as events are added and deleted.

use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};

use super::categorize::{CategorizedView, Partition, categorize};
use super::render::{placeholder, render_partition};
use crate::constants::{DEFAULT_DATE_FORMAT, PAST_LIST_ID, UPCOMING_LIST_ID};
use crate::error::{CoreError, CoreResult};
use crate::event::{NewEvent, parse_event_date};
use crate::maps::{MapLinkPolicy, Platform};
use crate::store::RecordStore;
use crate::ui::{Action, Surface};

/// How the board renders for the current visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardContext {
    /// Show delete buttons.
    pub editable: bool,
    pub platform: Platform,
    pub map_links: MapLinkPolicy,
    pub date_format: String,
}

impl Default for BoardContext {
    fn default() -> Self {
        BoardContext {
            editable: false,
            platform: Platform::Desktop,
            map_links: MapLinkPolicy::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Raw values of the "add event" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub name: String,
    pub date: String,
    pub location: String,
}

impl EventForm {
    pub fn to_new_event(&self) -> CoreResult<NewEvent> {
        Ok(NewEvent {
            name: self.name.trim().to_string(),
            date: parse_event_date(&self.date)?,
            location: self.location.trim().to_string(),
        })
    }

    pub fn reset(&mut self) {
        *self = EventForm::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Stored, board refetched and re-rendered, form reset.
    Created,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Deleted and its item removed from the surface.
    Removed,
    /// Deleted, but no rendered item carried its id.
    NotRendered,
    /// The store had no such record and nothing on the surface carried it.
    Missing,
    /// The store refused; the item stays.
    Failed,
}

pub struct EventBoard<S> {
    store: S,
    context: BoardContext,
    view: CategorizedView,
}

fn region(partition: Partition) -> &'static str {
    match partition {
        Partition::Upcoming => UPCOMING_LIST_ID,
        Partition::Past => PAST_LIST_ID,
    }
}

impl<S: RecordStore> EventBoard<S> {
    pub fn new(store: S, context: BoardContext) -> Self {
        EventBoard {
            store,
            context,
            view: CategorizedView::default(),
        }
    }

    pub fn view(&self) -> &CategorizedView {
        &self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch all records, categorize them around `now` and render both lists.
    ///
    /// A failed fetch renders an empty board.
    pub async fn load<U: Surface + ?Sized>(&mut self, surface: &mut U, now: DateTime<Utc>) {
        let records = match self.store.list().await {
            Ok(records) => Some(records),
            Err(e) => {
                error!(error = %e, "Error fetching events");
                None
            }
        };

        debug!(count = records.as_ref().map_or(0, Vec::len), "Fetched events");
        self.view = categorize(records, now);
        self.render(surface);
    }

    /// Rebuild both lists from the current view.
    pub fn render<U: Surface + ?Sized>(&self, surface: &mut U) {
        for partition in [Partition::Upcoming, Partition::Past] {
            let children = render_partition(self.view.partition(partition), partition, &self.context);
            if !surface.replace_children(region(partition), children) {
                error!(region = region(partition), "Events list element not found");
            }
        }
    }

    /// Submit the form. On success the board is refetched and re-rendered
    /// and the form is reset; on failure the form keeps its values.
    pub async fn create<U: Surface + ?Sized>(
        &mut self,
        surface: &mut U,
        form: &mut EventForm,
        now: DateTime<Utc>,
    ) -> CreateOutcome {
        let event = match form.to_new_event() {
            Ok(event) => event,
            Err(e) => {
                error!(error = %e, "Error adding event");
                return CreateOutcome::Failed;
            }
        };

        info!(name = %event.name, date = %event.date, "Adding new event");
        if let Err(e) = self.store.create(&event).await {
            error!(error = %e, "Error adding event");
            return CreateOutcome::Failed;
        }

        self.load(surface, now).await;
        form.reset();
        CreateOutcome::Created
    }

    /// Delete an event and remove its item from the surface, without a
    /// refetch. A list left empty shows its placeholder.
    pub async fn delete<U: Surface + ?Sized>(&mut self, surface: &mut U, id: i64) -> DeleteOutcome {
        info!(id, "Deleting event");

        let mut missing = false;
        match self.store.delete(id).await {
            Ok(()) => {}
            Err(CoreError::NotFound(_)) => {
                warn!(id, "Event already gone from the store, removing stale item");
                missing = true;
            }
            Err(e) => {
                error!(id, error = %e, "Error deleting event");
                return DeleteOutcome::Failed;
            }
        }

        let partition = self.view.remove(id).map(|(partition, _)| partition);

        let outcome = if surface.remove(&id.to_string()).is_some() {
            DeleteOutcome::Removed
        } else if missing {
            DeleteOutcome::Missing
        } else {
            warn!(id, "Event item not found for deletion");
            DeleteOutcome::NotRendered
        };

        if let Some(partition) = partition
            && self.view.partition(partition).is_empty()
        {
            surface.replace_children(region(partition), vec![placeholder(partition).into()]);
        }

        outcome
    }

    /// Route a click action to the board. Other actions are ignored.
    pub async fn dispatch<U: Surface + ?Sized>(&mut self, surface: &mut U, action: Action) -> Option<DeleteOutcome> {
        match action {
            Action::DeleteEvent(id) => Some(self.delete(surface, id).await),
            Action::Gallery(_) => None,
        }
    }
}
