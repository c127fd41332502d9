//! Document access for the widget.
//!
//! Rendering never touches a global document: callers hand in a
//! [`RenderTarget`], which in a browser wraps the live DOM and in tests or
//! static post-processing is the in-memory [`memory::Document`].

pub mod memory;

/// The document operations the menu renderer and canonical link injector need.
pub trait RenderTarget {
    /// Opaque handle to a node owned by the target.
    type Node: Copy + Eq + std::fmt::Debug;

    /// Elements carrying `class`, in document order.
    fn containers(&self, class: &str) -> Vec<Self::Node>;

    /// First descendant of `node` carrying `class`, depth first.
    fn find_descendant(&self, node: Self::Node, class: &str) -> Option<Self::Node>;

    fn create_element(&mut self, tag: &str) -> Self::Node;

    fn create_text(&mut self, text: &str) -> Self::Node;

    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);

    fn add_class(&mut self, node: Self::Node, class: &str);

    fn append_child(&mut self, parent: Self::Node, child: Self::Node);

    /// Inserts `children`, in order, before the current first child of `parent`.
    fn prepend_children(&mut self, parent: Self::Node, children: &[Self::Node]);

    /// Detached, structurally identical copy of `node` and its subtree.
    fn deep_clone(&mut self, node: Self::Node) -> Self::Node;

    fn head(&self) -> Self::Node;

    /// `<link>` element in the head whose `rel` attribute equals `rel`.
    fn find_link(&self, rel: &str) -> Option<Self::Node>;
}
