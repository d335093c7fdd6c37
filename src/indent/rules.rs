// src/indent/rules.rs - Ordered indentation rule table

use ropey::RopeSlice;

use super::{line_indent, IndentAnchor, IndentDecision};
use crate::config::IndentConfig;
use crate::syntax::kinds;
use crate::tree::SyntaxNode;

pub(super) struct RuleInput<'a, N> {
    pub node: &'a N,
    pub row: usize,
    pub text: RopeSlice<'a>,
    pub config: &'a IndentConfig,
}

/// First match wins. Specific structural patterns (closing delimiters,
/// comment markers) must stay ahead of the general container-body pattern or
/// indentation degenerates to the default.
pub(super) fn apply<N: SyntaxNode>(input: &RuleInput<'_, N>) -> IndentDecision {
    top_level(input)
        .or_else(|| closing_delimiter(input))
        .or_else(|| comment_continuation(input))
        .or_else(|| comment_interior(input))
        .or_else(|| container_body(input))
        .or_else(|| string_continuation(input))
        .unwrap_or_else(|| fallback(input))
}

/// Top-level constructs are never indented. Only applies when the caret is
/// on the node's own first line; lines inside a multi-line token fall
/// through to the comment and string rules.
fn top_level<N: SyntaxNode>(input: &RuleInput<'_, N>) -> Option<IndentDecision> {
    if input.row != input.node.start_position().row {
        return None;
    }
    let parent = input.node.parent()?;
    if !parent.is_root() {
        return None;
    }
    Some(IndentDecision {
        anchor: IndentAnchor::Column(parent.start_position().column),
        offset: 0,
    })
}

/// Closing delimiters align with the line of the construct they close, not
/// with their siblings.
fn closing_delimiter<N: SyntaxNode>(input: &RuleInput<'_, N>) -> Option<IndentDecision> {
    if !kinds::is_closing_delimiter(input.node.kind()) {
        return None;
    }
    let parent = input.node.parent()?;
    Some(IndentDecision {
        anchor: IndentAnchor::LineStart(parent.start_position().row),
        offset: 0,
    })
}

/// A continuation line of a block comment that begins with `*` lines its
/// marker up under the first `*` of the opening `/*`.
fn comment_continuation<N: SyntaxNode>(input: &RuleInput<'_, N>) -> Option<IndentDecision> {
    let comment = enclosing_comment(input.node)?;
    if comment.kind() != kinds::BLOCK_COMMENT {
        return None;
    }
    if input.row <= comment.start_position().row {
        return None;
    }
    if first_nonblank(input.text, input.row) != Some('*') {
        return None;
    }
    Some(IndentDecision {
        anchor: IndentAnchor::Column(comment.start_position().column + 2),
        offset: -1,
    })
}

/// Comment prose without a marker keeps the previous line's indentation.
fn comment_interior<N: SyntaxNode>(input: &RuleInput<'_, N>) -> Option<IndentDecision> {
    let comment = enclosing_comment(input.node)?;
    if input.row <= comment.start_position().row {
        return None;
    }
    Some(IndentDecision {
        anchor: IndentAnchor::LineStart(input.row - 1),
        offset: 0,
    })
}

/// Members of a body construct indent one step past the line that opened
/// the construct.
fn container_body<N: SyntaxNode>(input: &RuleInput<'_, N>) -> Option<IndentDecision> {
    let parent = input.node.parent()?;
    if !kinds::is_indented_body(parent.kind()) {
        return None;
    }
    Some(IndentDecision {
        anchor: IndentAnchor::LineStart(parent.start_position().row),
        offset: input.config.indent_width as isize,
    })
}

/// Lines of a triple-quoted string, including the closing delimiter's line,
/// sit at whichever is greater: the indentation the default rule would give
/// the literal, or the current indentation of the line holding the closing
/// delimiter. The max keeps a dedented closing delimiter from pulling the
/// contents left, without ever suggesting less than where it sits.
fn string_continuation<N: SyntaxNode>(input: &RuleInput<'_, N>) -> Option<IndentDecision> {
    let found = ancestor_or_self(input.node, |kind| {
        kind == kinds::TRIPLE_QUOTED_STRING_FRAGMENT || kind == kinds::TRIPLE_QUOTED_STRING
    })?;
    let literal = if found.kind() == kinds::TRIPLE_QUOTED_STRING_FRAGMENT {
        found.parent().unwrap_or_else(|| found.clone())
    } else {
        found.clone()
    };
    if input.row <= literal.start_position().row {
        return None;
    }
    let closing = line_indent(input.text, found.end_position().row, input.config);
    let baseline = line_indent(input.text, literal.start_position().row, input.config);
    Some(IndentDecision {
        anchor: IndentAnchor::Column(closing.max(baseline)),
        offset: 0,
    })
}

/// Unrecognized shapes anchor to the parent's line; a parentless node (a
/// malformed or partial tree) leaves the line untouched.
fn fallback<N: SyntaxNode>(input: &RuleInput<'_, N>) -> IndentDecision {
    match input.node.parent() {
        Some(parent) => IndentDecision {
            anchor: IndentAnchor::LineStart(parent.start_position().row),
            offset: 0,
        },
        None => IndentDecision::no_change(input.row),
    }
}

fn enclosing_comment<N: SyntaxNode>(node: &N) -> Option<N> {
    ancestor_or_self(node, kinds::is_comment)
}

fn ancestor_or_self<N: SyntaxNode>(node: &N, pred: impl Fn(&str) -> bool) -> Option<N> {
    let mut current = Some(node.clone());
    while let Some(n) = current {
        if pred(n.kind()) {
            return Some(n);
        }
        current = n.parent();
    }
    None
}

fn first_nonblank(text: RopeSlice<'_>, row: usize) -> Option<char> {
    if row >= text.len_lines() {
        return None;
    }
    text.line(row).chars().find(|c| !c.is_whitespace())
}
