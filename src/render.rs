//! Terminal rendering of board and gallery documents.
//!
//! The board and gallery controllers draw into a [`Document`]; this module
//! turns the parts of it the CLI cares about into colored lines.

use owo_colors::OwoColorize;
use trailforward_core::constants::{GALLERY_ID, PAST_LIST_ID, UPCOMING_LIST_ID};
use trailforward_core::ui::{Document, Element, Node};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Element {
    fn render(&self) -> String {
        if self.has_class("event-item") {
            render_event_item(self)
        } else if self.has_class("gallery-image") {
            render_gallery_image(self)
        } else {
            self.text_content().dimmed().to_string()
        }
    }
}

fn render_event_item(item: &Element) -> String {
    let id = item.id().unwrap_or("?");
    let link = item.child_elements().find(|el| el.tag == "a");
    let name = link.map(Element::text_content).unwrap_or_default();
    let href = link.and_then(|el| el.attr("href")).unwrap_or_default();

    let label: String = item
        .children
        .iter()
        .filter_map(|node| match node {
            Node::Text(text) => Some(text.as_str()),
            Node::Element(_) => None,
        })
        .collect();
    let label = label.trim_start_matches(" - ").trim();

    let mut line = format!("{} {} {}", format!("#{id}").dimmed(), name.bold(), label);
    if !href.is_empty() {
        line.push_str(&format!("  {}", href.dimmed()));
    }
    let deletable = item
        .child_elements()
        .any(|el| el.has_class("delete-button") || el.child_elements().any(|b| b.has_class("delete-button")));
    if deletable {
        line.push_str(&format!("  {}", "[delete]".red()));
    }
    line
}

fn render_gallery_image(img: &Element) -> String {
    let index = img.attr("data-index").unwrap_or("?");
    let src = img.attr("src").unwrap_or_default();

    if img.has_class("active") {
        format!("{} {}", "▶".green(), format!("[{index}] {src}").green().bold())
    } else {
        format!("  {}", format!("[{index}] {src}").dimmed())
    }
}

fn render_list(doc: &Document, list_id: &str, title: &str, lines: &mut Vec<String>) {
    lines.push(title.bold().to_string());
    if let Some(list) = doc.get(list_id) {
        lines.extend(list.child_elements().map(|item| format!("  {}", item.render())));
    }
}

/// Both event lists, upcoming first.
pub fn render_board(doc: &Document) -> String {
    let mut lines = Vec::new();
    render_list(doc, UPCOMING_LIST_ID, "Upcoming events", &mut lines);
    lines.push(String::new());
    render_list(doc, PAST_LIST_ID, "Past events", &mut lines);
    lines.join("\n")
}

/// The visible gallery window, active image marked.
pub fn render_gallery(doc: &Document) -> String {
    let images: Vec<String> = doc
        .get(GALLERY_ID)
        .map(|gallery| gallery.child_elements().map(Render::render).collect())
        .unwrap_or_default();

    if images.is_empty() {
        return "No gallery images".dimmed().to_string();
    }
    images.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use trailforward_core::ui::Surface;

    fn board_doc(upcoming: Vec<Node>, past: Vec<Node>) -> Document {
        let mut doc = crate::commands::board_document();
        doc.replace_children(UPCOMING_LIST_ID, upcoming);
        doc.replace_children(PAST_LIST_ID, past);
        doc
    }

    #[test]
    fn test_event_item_shows_name_date_and_link() {
        let item = Element::new("li")
            .with_id("4")
            .with_class("event-item")
            .with_child(Element::new("a").with_attr("href", "geo:0,0?q=Mill%20Pond").with_text("Pond survey"))
            .with_text(" - 6/2/2031, 8:00:00 AM");

        let line = item.render();

        assert!(line.contains("#4"));
        assert!(line.contains("Pond survey"));
        assert!(line.contains("6/2/2031, 8:00:00 AM"));
        assert!(!line.contains(" - 6/2"));
        assert!(line.contains("geo:0,0?q=Mill%20Pond"));
        assert!(!line.contains("[delete]"));
    }

    #[test]
    fn test_editable_item_is_marked_deletable() {
        let item = Element::new("li")
            .with_id("4")
            .with_class("event-item")
            .with_child(Element::new("a").with_text("Pond survey"))
            .with_child(Element::new("button").with_class("delete-button").with_text("Delete"));

        assert!(item.render().contains("[delete]"));
    }

    #[test]
    fn test_board_rendered_delete_form_is_marked_deletable() {
        let context = trailforward_core::events::BoardContext {
            editable: true,
            ..Default::default()
        };
        let event = trailforward_core::EventRecord {
            id: 5,
            name: "Lantern walk".to_string(),
            date: chrono::Utc::now(),
            location: "Old mill".to_string(),
        };

        let line = trailforward_core::events::render_event_item(&event, &context).render();

        assert!(line.contains("[delete]"));
        assert!(!line.contains("Delete"));
    }

    #[test]
    fn test_board_lists_both_partitions_in_order() {
        let doc = board_doc(
            vec![Element::new("li").with_class("placeholder").with_text("No upcoming events found.").into()],
            vec![
                Element::new("li")
                    .with_id("1")
                    .with_class("event-item")
                    .with_child(Element::new("a").with_text("Winter count"))
                    .into(),
            ],
        );

        let out = render_board(&doc);
        let upcoming = out.find("Upcoming events").unwrap();
        let placeholder = out.find("No upcoming events found.").unwrap();
        let past = out.find("Past events").unwrap();
        let winter = out.find("Winter count").unwrap();

        assert!(upcoming < placeholder && placeholder < past && past < winter);
    }

    #[test]
    fn test_gallery_marks_active_image() {
        let mut doc = crate::commands::gallery_document();
        doc.replace_children(
            GALLERY_ID,
            vec![
                Element::new("img")
                    .with_attr("class", "gallery-image")
                    .with_attr("src", "/images/gallery/a.jpg")
                    .with_attr("data-index", "0")
                    .into(),
                Element::new("img")
                    .with_attr("class", "gallery-image active")
                    .with_attr("src", "/images/gallery/b.jpg")
                    .with_attr("data-index", "1")
                    .into(),
            ],
        );

        let out = render_gallery(&doc);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(!lines[0].contains('▶'));
        assert!(lines[1].contains('▶'));
        assert!(lines[1].contains("[1] /images/gallery/b.jpg"));
    }

    #[test]
    fn test_empty_gallery_has_message() {
        let doc = crate::commands::gallery_document();
        assert!(render_gallery(&doc).contains("No gallery images"));
    }
}
