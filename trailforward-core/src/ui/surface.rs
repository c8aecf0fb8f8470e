use super::element::{Element, Node};

/// A live UI tree that element descriptions are applied to.
///
/// Every mutation addresses its target by element id and reports whether
/// the target was found; a miss is never a panic.
pub trait Surface {
    /// Replace all children of `parent_id`.
    fn replace_children(&mut self, parent_id: &str, children: Vec<Node>) -> bool;

    fn append_child(&mut self, parent_id: &str, child: Node) -> bool;

    fn prepend_child(&mut self, parent_id: &str, child: Node) -> bool;

    /// Detach the element with `id`, returning it.
    fn remove(&mut self, id: &str) -> Option<Element>;

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> bool;

    fn remove_attribute(&mut self, id: &str, name: &str) -> bool;

    /// Replace the children of `id` with a single text node.
    fn set_text(&mut self, id: &str, text: &str) -> bool;

    fn attribute(&self, id: &str, name: &str) -> Option<String>;

    /// Ids of the element children of `parent_id`, in order.
    fn child_ids(&self, parent_id: &str) -> Vec<String>;
}
