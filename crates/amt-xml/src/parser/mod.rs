pub use roxmltree::*;

use tracing::trace;

use crate::XmlError;

pub fn parse(xml: &str) -> Result<Document<'_>, XmlError> {
    Ok(roxmltree::Document::parse(xml)?)
}

/// Drives parsing of one node into a value.
///
/// `visit_node` receives the node itself; `visit_children` receives its
/// element and text children. Both are called by [`NodeDeserializer`].
pub trait XmlVisitor<'a> {
    type Value;

    fn visit_node(&mut self, _node: Node<'a, 'a>) -> Result<(), XmlError> {
        Ok(())
    }

    fn visit_children(
        &mut self,
        _children: impl Iterator<Item = Node<'a, 'a>>,
    ) -> Result<(), XmlError> {
        Ok(())
    }

    fn finish(self) -> Result<Self::Value, XmlError>;
}

pub trait XmlDeserialize<'a>: Sized {
    type Visitor: XmlVisitor<'a, Value = Self>;

    fn visitor() -> Self::Visitor;

    fn from_node(node: Node<'a, 'a>) -> Result<Self, XmlError> {
        NodeDeserializer::new(node).deserialize(Self::visitor())
    }

    fn from_children(children: impl Iterator<Item = Node<'a, 'a>>) -> Result<Self, XmlError> {
        let mut visitor = Self::visitor();
        visitor.visit_children(children)?;
        visitor.finish()
    }
}

pub struct NodeDeserializer<'a> {
    root: Node<'a, 'a>,
}

impl<'a> NodeDeserializer<'a> {
    pub fn new(root: Node<'a, 'a>) -> Self {
        Self { root }
    }

    /// Drive any visitor over the subtree rooted at `self.root`
    pub fn deserialize<V>(self, mut visitor: V) -> Result<V::Value, XmlError>
    where
        V: XmlVisitor<'a>,
    {
        trace!(tag_name = self.root.tag_name().name(), "deserializing node");
        visitor.visit_node(self.root)?;
        visitor.visit_children(
            self.root
                .children()
                .filter(|child| child.is_element() || child.is_text()),
        )?;
        visitor.finish()
    }
}

/// First element child of `node` whose local name is `name`, any namespace.
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == name)
}

/// First element descendant of `node` (excluding itself) whose local name is `name`.
pub fn find_descendant<'a, 'input>(
    node: Node<'a, 'input>,
    name: &str,
) -> Option<Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .find(|child| child.is_element() && child.tag_name().name() == name)
}

/// First element child of `node`, skipping whitespace and comments.
pub fn first_element_child<'a, 'input>(node: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    node.children().find(Node::is_element)
}

/// Trimmed text of the named child, or an empty string when absent.
pub fn child_text(node: Node<'_, '_>, name: &str) -> String {
    find_child(node, name)
        .and_then(|child| child.text())
        .map(|text| text.trim().to_owned())
        .unwrap_or_default()
}
