// src/indent/mod.rs - Structural indentation resolution

mod rules;

use log::trace;
use ropey::RopeSlice;

use crate::config::IndentConfig;
use crate::tree::SyntaxNode;

/// Reference point an indentation decision is computed against.
///
/// Indentation is always expressed relative to an anchor, never as a
/// free-standing column, so re-indenting stays stable under nested
/// reformatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentAnchor {
    /// Baseline is the current leading-whitespace width of the given line.
    LineStart(usize),
    /// Baseline is a fixed column on the anchor node's own line.
    Column(usize),
}

/// Output of resolving one line: an anchor plus a signed column offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentDecision {
    pub anchor: IndentAnchor,
    pub offset: isize,
}

impl IndentDecision {
    /// Leave the line exactly where it is.
    pub fn no_change(row: usize) -> Self {
        Self {
            anchor: IndentAnchor::LineStart(row),
            offset: 0,
        }
    }

    /// Materialize the decision into a target column against the current
    /// buffer contents.
    pub fn column(&self, text: RopeSlice<'_>, config: &IndentConfig) -> usize {
        let base = match self.anchor {
            IndentAnchor::LineStart(row) => line_indent(text, row, config),
            IndentAnchor::Column(column) => column,
        };
        (base as isize + self.offset).max(0) as usize
    }
}

/// Resolve the indentation for `row`, given the syntax node at (or
/// enclosing) that line's first non-whitespace position.
///
/// Purely functional: reads the tree and the current line indentation of
/// ancestors, mutates nothing, and never fails. A stale or parentless node
/// degrades to "leave the line as-is".
pub fn resolve<N: SyntaxNode>(
    node: &N,
    row: usize,
    text: RopeSlice<'_>,
    config: &IndentConfig,
) -> IndentDecision {
    let node = hoist_to_line_anchor(node.clone());
    let input = rules::RuleInput {
        node: &node,
        row,
        text,
        config,
    };
    let decision = rules::apply(&input);
    trace!("indent row {} ({}): {:?}", row, node.kind(), decision);
    decision
}

/// [`resolve`], materialized into a column count.
pub fn resolve_column<N: SyntaxNode>(
    node: &N,
    row: usize,
    text: RopeSlice<'_>,
    config: &IndentConfig,
) -> usize {
    resolve(node, row, text, config).column(text, config)
}

/// Hosts usually hand over the smallest node at the line start; the rules
/// match against the highest node beginning at that same position, stopping
/// below the document root.
fn hoist_to_line_anchor<N: SyntaxNode>(mut node: N) -> N {
    while let Some(parent) = node.parent() {
        if parent.parent().is_some() && parent.start_position() == node.start_position() {
            node = parent;
        } else {
            break;
        }
    }
    node
}

/// Leading-whitespace width of a line in columns. Tabs in existing text
/// measure as one indent step; rows past the end of the buffer measure 0.
pub fn line_indent(text: RopeSlice<'_>, row: usize, config: &IndentConfig) -> usize {
    if row >= text.len_lines() {
        return 0;
    }
    let mut columns = 0;
    for ch in text.line(row).chars() {
        match ch {
            ' ' => columns += 1,
            '\t' => columns += config.indent_width,
            _ => break,
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use ropey::Rope;

    #[test]
    fn test_line_indent() {
        let config = IndentConfig::default();
        let rope = Rope::from_str("model Foo {\n  bar: string;\n\t\tdeep\n");
        assert_eq!(line_indent(rope.slice(..), 0, &config), 0);
        assert_eq!(line_indent(rope.slice(..), 1, &config), 2);
        assert_eq!(line_indent(rope.slice(..), 2, &config), 4); // two tabs at width 2
    }

    #[test]
    fn test_line_indent_out_of_range() {
        let config = IndentConfig::default();
        let rope = Rope::from_str("a\n");
        assert_eq!(line_indent(rope.slice(..), 99, &config), 0);
    }

    #[test]
    fn test_decision_column_line_start() {
        let config = IndentConfig::default();
        let rope = Rope::from_str("    anchored\nnext\n");
        let decision = IndentDecision {
            anchor: IndentAnchor::LineStart(0),
            offset: 2,
        };
        assert_eq!(decision.column(rope.slice(..), &config), 6);
    }

    #[test]
    fn test_decision_column_absolute() {
        let config = IndentConfig::default();
        let rope = Rope::from_str("x\n");
        let decision = IndentDecision {
            anchor: IndentAnchor::Column(3),
            offset: -1,
        };
        assert_eq!(decision.column(rope.slice(..), &config), 2);
    }

    #[test]
    fn test_decision_column_never_negative() {
        let config = IndentConfig::default();
        let rope = Rope::from_str("x\n");
        let decision = IndentDecision {
            anchor: IndentAnchor::Column(0),
            offset: -5,
        };
        assert_eq!(decision.column(rope.slice(..), &config), 0);
    }

    #[test]
    fn test_no_change_tracks_current_indent() {
        let config = IndentConfig::default();
        let rope = Rope::from_str("   keep\n");
        let decision = IndentDecision::no_change(0);
        assert_eq!(decision.column(rope.slice(..), &config), 3);
    }
}
