// src/outline.rs - Declaration outline for navigation

use crate::syntax::kinds;
use crate::tree::{Point, SyntaxNode};

/// Declaration categories surfaced in the outline view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Alias,
    Enum,
    Interface,
    Model,
    Operation,
    Scalar,
    Union,
}

impl DeclKind {
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            kinds::ALIAS_STATEMENT => Some(Self::Alias),
            kinds::ENUM_STATEMENT => Some(Self::Enum),
            kinds::INTERFACE_STATEMENT => Some(Self::Interface),
            kinds::MODEL_STATEMENT => Some(Self::Model),
            kinds::OPERATION_STATEMENT => Some(Self::Operation),
            kinds::SCALAR_STATEMENT => Some(Self::Scalar),
            kinds::UNION_STATEMENT => Some(Self::Union),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Alias => "Alias",
            Self::Enum => "Enum",
            Self::Interface => "Interface",
            Self::Model => "Model",
            Self::Operation => "Operation",
            Self::Scalar => "Scalar",
            Self::Union => "Union",
        }
    }
}

/// One declaration in the document: its category, name, and start position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub kind: DeclKind,
    pub name: String,
    pub position: Point,
}

/// Collect every declaration in the tree, at any nesting depth, in source
/// order.
///
/// Declarations with a missing or out-of-range `name` field are skipped; a
/// partially edited tree yields a partial outline, never an error.
pub fn document_outline<N: SyntaxNode>(root: &N, source: &str) -> Vec<OutlineEntry> {
    let mut entries = Vec::new();
    collect(root, source, &mut entries);
    entries
}

fn collect<N: SyntaxNode>(node: &N, source: &str, entries: &mut Vec<OutlineEntry>) {
    if let Some(kind) = DeclKind::from_kind(node.kind())
        && let Some(entry) = entry_for(node, kind, source)
    {
        entries.push(entry);
    }
    for child in node.named_children() {
        collect(&child, source, entries);
    }
}

fn entry_for<N: SyntaxNode>(node: &N, kind: DeclKind, source: &str) -> Option<OutlineEntry> {
    let name_node = node.child_by_field("name")?;
    let name = source.get(name_node.start_byte()..name_node.end_byte())?;
    Some(OutlineEntry {
        kind,
        name: name.to_string(),
        position: node.start_position(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kind_covers_declarations() {
        assert_eq!(DeclKind::from_kind("model_statement"), Some(DeclKind::Model));
        assert_eq!(DeclKind::from_kind("op_statement"), None);
        assert_eq!(DeclKind::from_kind("model_body"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(DeclKind::Alias.label(), "Alias");
        assert_eq!(DeclKind::Operation.label(), "Operation");
        assert_eq!(DeclKind::Union.label(), "Union");
    }
}
