// Common test utilities: hand-built syntax trees for exercising the
// indentation resolver and outline walk without a grammar engine.

use std::rc::Rc;

use tspedit::tree::{Point, SyntaxNode};

/// Declarative spec for one node; [`NodeSpec::build`] turns a spec tree into
/// a navigable [`FakeNode`] arena.
#[derive(Debug, Clone)]
pub struct NodeSpec {
    kind: &'static str,
    start: (usize, usize),
    end: (usize, usize),
    field: Option<&'static str>,
    children: Vec<NodeSpec>,
}

/// Start a node spec covering `start..end` as (row, column) pairs.
#[allow(dead_code)]
pub fn node(kind: &'static str, start: (usize, usize), end: (usize, usize)) -> NodeSpec {
    NodeSpec {
        kind,
        start,
        end,
        field: None,
        children: Vec::new(),
    }
}

impl NodeSpec {
    /// Mark the role this node occupies in its parent ("name").
    #[allow(dead_code)]
    pub fn field(mut self, name: &'static str) -> Self {
        self.field = Some(name);
        self
    }

    #[allow(dead_code)]
    pub fn child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }

    /// Materialize the spec tree; `source` is used to derive byte offsets
    /// from the (row, column) positions.
    #[allow(dead_code)]
    pub fn build(self, source: &str) -> FakeNode {
        let mut arena = TreeArena { nodes: Vec::new() };
        let root = insert(&mut arena, &self, None, source);
        FakeNode {
            arena: Rc::new(arena),
            index: root,
        }
    }
}

struct NodeData {
    kind: &'static str,
    start: Point,
    end: Point,
    start_byte: usize,
    end_byte: usize,
    field: Option<&'static str>,
    parent: Option<usize>,
    children: Vec<usize>,
}

pub struct TreeArena {
    nodes: Vec<NodeData>,
}

fn insert(arena: &mut TreeArena, spec: &NodeSpec, parent: Option<usize>, source: &str) -> usize {
    let index = arena.nodes.len();
    arena.nodes.push(NodeData {
        kind: spec.kind,
        start: Point::new(spec.start.0, spec.start.1),
        end: Point::new(spec.end.0, spec.end.1),
        start_byte: byte_at(source, spec.start),
        end_byte: byte_at(source, spec.end),
        field: spec.field,
        parent,
        children: Vec::new(),
    });
    for child in &spec.children {
        let child_index = insert(arena, child, Some(index), source);
        arena.nodes[index].children.push(child_index);
    }
    index
}

fn byte_at(source: &str, (row, column): (usize, usize)) -> usize {
    let mut offset = 0;
    for (i, line) in source.split_inclusive('\n').enumerate() {
        if i == row {
            return offset + column;
        }
        offset += line.len();
    }
    offset + column
}

/// Arena-backed node handle implementing [`SyntaxNode`].
#[derive(Clone)]
pub struct FakeNode {
    arena: Rc<TreeArena>,
    index: usize,
}

impl FakeNode {
    fn data(&self) -> &NodeData {
        &self.arena.nodes[self.index]
    }

    fn at(&self, index: usize) -> FakeNode {
        FakeNode {
            arena: Rc::clone(&self.arena),
            index,
        }
    }

    /// First node of the given kind, depth-first.
    #[allow(dead_code)]
    pub fn find(&self, kind: &str) -> Option<FakeNode> {
        if self.data().kind == kind {
            return Some(self.clone());
        }
        self.data()
            .children
            .iter()
            .find_map(|&child| self.at(child).find(kind))
    }

    /// Every node of the given kind, depth-first.
    #[allow(dead_code)]
    pub fn find_all(&self, kind: &str) -> Vec<FakeNode> {
        let mut found = Vec::new();
        self.collect_kind(kind, &mut found);
        found
    }

    fn collect_kind(&self, kind: &str, found: &mut Vec<FakeNode>) {
        if self.data().kind == kind {
            found.push(self.clone());
        }
        for &child in &self.data().children {
            self.at(child).collect_kind(kind, found);
        }
    }
}

impl SyntaxNode for FakeNode {
    fn kind(&self) -> &str {
        self.data().kind
    }

    fn parent(&self) -> Option<Self> {
        self.data().parent.map(|parent| self.at(parent))
    }

    fn child_by_field(&self, field: &str) -> Option<Self> {
        self.data()
            .children
            .iter()
            .map(|&child| self.at(child))
            .find(|child| child.data().field == Some(field))
    }

    fn named_children(&self) -> Vec<Self> {
        self.data()
            .children
            .iter()
            .map(|&child| self.at(child))
            .filter(|child| {
                child
                    .data()
                    .kind
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_alphabetic())
            })
            .collect()
    }

    fn start_position(&self) -> Point {
        self.data().start
    }

    fn end_position(&self) -> Point {
        self.data().end
    }

    fn start_byte(&self) -> usize {
        self.data().start_byte
    }

    fn end_byte(&self) -> usize {
        self.data().end_byte
    }
}
