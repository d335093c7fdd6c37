// src/tree.rs - Minimal view over an externally supplied syntax tree

/// Zero-based source position (row, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub row: usize,
    pub column: usize,
}

impl Point {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Read-only view of one node in a concrete syntax tree.
///
/// The tree itself is owned by the parsing engine; implementations hand out
/// transient, non-owning references for the duration of one query. The
/// indentation resolver and outline walk are written against this trait so
/// they can be exercised with hand-built trees in tests, with
/// [`tree_sitter::Node`] as the production implementation.
pub trait SyntaxNode: Clone {
    /// Grammar production tag, e.g. `"model_body"`. Anonymous token nodes
    /// carry their own text as the tag (`"}"`).
    fn kind(&self) -> &str;

    fn parent(&self) -> Option<Self>;

    /// Child occupying the given named role, e.g. `"name"`.
    fn child_by_field(&self, field: &str) -> Option<Self>;

    fn named_children(&self) -> Vec<Self>;

    fn start_position(&self) -> Point;
    fn end_position(&self) -> Point;
    fn start_byte(&self) -> usize;
    fn end_byte(&self) -> usize;

    fn is_root(&self) -> bool {
        self.parent().is_none()
    }
}

impl SyntaxNode for tree_sitter::Node<'_> {
    fn kind(&self) -> &str {
        tree_sitter::Node::kind(self)
    }

    fn parent(&self) -> Option<Self> {
        tree_sitter::Node::parent(self)
    }

    fn child_by_field(&self, field: &str) -> Option<Self> {
        self.child_by_field_name(field)
    }

    fn named_children(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        tree_sitter::Node::named_children(self, &mut cursor).collect()
    }

    fn start_position(&self) -> Point {
        let p = tree_sitter::Node::start_position(self);
        Point::new(p.row, p.column)
    }

    fn end_position(&self) -> Point {
        let p = tree_sitter::Node::end_position(self);
        Point::new(p.row, p.column)
    }

    fn start_byte(&self) -> usize {
        tree_sitter::Node::start_byte(self)
    }

    fn end_byte(&self) -> usize {
        tree_sitter::Node::end_byte(self)
    }
}
