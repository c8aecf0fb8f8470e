//! Element descriptions for the events board.

use std::fmt::Write;

use chrono::{DateTime, Local, Utc};
use tracing::warn;

use super::board::BoardContext;
use super::categorize::Partition;
use crate::constants::{DEFAULT_DATE_FORMAT, NO_PAST_EVENTS, NO_UPCOMING_EVENTS};
use crate::event::EventRecord;
use crate::ui::{Action, Element, Node};

/// List item for one event, identified by the event id.
pub fn render_event_item(event: &EventRecord, context: &BoardContext) -> Element {
    let href = context.map_links.link_for(context.platform, &event.location);
    let label = date_label(event.date, &context.date_format);

    let item = Element::new("li")
        .with_id(event.id.to_string())
        .with_class("event-item")
        .with_child(Element::new("a").with_attr("href", href).with_text(event.name.as_str()))
        .with_text(format!(" - {label}"));

    if context.editable {
        // The form lets the button work on pages without client script
        item.with_child(
            Element::new("form")
                .with_class("delete-form")
                .with_attr("method", "post")
                .with_attr("action", format!("/events/{}/delete", event.id))
                .with_child(
                    Element::new("button")
                        .with_id(format!("delete-{}", event.id))
                        .with_class("delete-button")
                        .with_attr("type", "submit")
                        .on_click(Action::DeleteEvent(event.id))
                        .with_text("Delete"),
                ),
        )
    } else {
        item
    }
}

/// Children of a partition's list: one item per event, or the placeholder.
pub fn render_partition(events: &[EventRecord], partition: Partition, context: &BoardContext) -> Vec<Node> {
    if events.is_empty() {
        return vec![placeholder(partition).into()];
    }
    events
        .iter()
        .map(|event| render_event_item(event, context).into())
        .collect()
}

/// Local date/time label. An invalid format falls back to the default one.
fn date_label(date: DateTime<Utc>, format: &str) -> String {
    let local = date.with_timezone(&Local);
    let mut label = String::new();
    if write!(label, "{}", local.format(format)).is_err() {
        warn!(format, "Invalid date format, using default");
        label = local.format(DEFAULT_DATE_FORMAT).to_string();
    }
    label
}

pub(crate) fn placeholder(partition: Partition) -> Element {
    let message = match partition {
        Partition::Upcoming => NO_UPCOMING_EVENTS,
        Partition::Past => NO_PAST_EVENTS,
    };
    Element::new("li").with_class("placeholder").with_text(message)
}
