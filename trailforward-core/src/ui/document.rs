use super::element::{Action, Element, Node};
use super::html;
use super::surface::Surface;

/// In-memory surface rooted at a single element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Document { root }
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.root.find(id)
    }

    /// Simulate a click: returns the action subscribed on `id`.
    ///
    /// Disabled elements swallow clicks.
    pub fn click(&self, id: &str) -> Option<Action> {
        let element = self.get(id)?;
        if element.attr("disabled").is_some() {
            return None;
        }
        element.on_click
    }

    pub fn to_html(&self) -> String {
        html::to_html(&Node::Element(self.root.clone()))
    }
}

impl Surface for Document {
    fn replace_children(&mut self, parent_id: &str, children: Vec<Node>) -> bool {
        match self.root.find_mut(parent_id) {
            Some(parent) => {
                parent.children = children;
                true
            }
            None => false,
        }
    }

    fn append_child(&mut self, parent_id: &str, child: Node) -> bool {
        match self.root.find_mut(parent_id) {
            Some(parent) => {
                parent.children.push(child);
                true
            }
            None => false,
        }
    }

    fn prepend_child(&mut self, parent_id: &str, child: Node) -> bool {
        match self.root.find_mut(parent_id) {
            Some(parent) => {
                parent.children.insert(0, child);
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: &str) -> Option<Element> {
        self.root.remove_descendant(id)
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> bool {
        match self.root.find_mut(id) {
            Some(el) => {
                el.attributes.insert(name.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }

    fn remove_attribute(&mut self, id: &str, name: &str) -> bool {
        match self.root.find_mut(id) {
            Some(el) => {
                el.attributes.remove(name);
                true
            }
            None => false,
        }
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        match self.root.find_mut(id) {
            Some(el) => {
                el.children = vec![Node::Text(text.to_string())];
                true
            }
            None => false,
        }
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.get(id).and_then(|el| el.attr(name)).map(str::to_string)
    }

    fn child_ids(&self, parent_id: &str) -> Vec<String> {
        self.get(parent_id)
            .map(|parent| {
                parent
                    .child_elements()
                    .filter_map(|el| el.id().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        Document::new(
            Element::new("main")
                .with_id("root")
                .with_child(Element::new("ul").with_id("list")),
        )
    }

    #[test]
    fn test_insert_and_remove_by_id() {
        let mut doc = doc();

        assert!(doc.append_child("list", Element::new("li").with_id("b").into()));
        assert!(doc.prepend_child("list", Element::new("li").with_id("a").into()));
        assert_eq!(doc.child_ids("list"), vec!["a", "b"]);

        assert_eq!(doc.remove("a").unwrap().id(), Some("a"));
        assert!(doc.remove("a").is_none());
        assert_eq!(doc.child_ids("list"), vec!["b"]);

        assert!(!doc.append_child("nowhere", Node::text("x")));
    }

    #[test]
    fn test_attribute_and_text_mutation() {
        let mut doc = doc();

        assert!(doc.set_attribute("list", "class", "events"));
        assert_eq!(doc.attribute("list", "class").as_deref(), Some("events"));
        assert!(doc.remove_attribute("list", "class"));
        assert_eq!(doc.attribute("list", "class"), None);

        assert!(doc.set_text("list", "empty"));
        assert_eq!(doc.get("list").unwrap().text_content(), "empty");
        assert!(!doc.set_text("missing", "x"));
    }

    #[test]
    fn test_click_respects_disabled() {
        let mut doc = doc();
        doc.append_child(
            "list",
            Element::new("button")
                .with_id("del")
                .on_click(Action::DeleteEvent(4))
                .into(),
        );

        assert_eq!(doc.click("del"), Some(Action::DeleteEvent(4)));
        doc.set_attribute("del", "disabled", "disabled");
        assert_eq!(doc.click("del"), None);
        assert_eq!(doc.click("list"), None);
    }
}
