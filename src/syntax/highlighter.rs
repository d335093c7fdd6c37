use log::{debug, trace};
use std::collections::HashMap;
use tree_sitter::{Parser, Query, Tree};

use crate::error::SupportError;
use crate::syntax::{LanguageConfig, QueryLoader};

/// Closed set of semantic highlight categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    Comment,
    Keyword,
    String,
    Constant,
    Type,
    Function,
    Property,
    Bracket,
    Delimiter,
    Decorator,
    Namespace,
    Directive,
    Warning,
}

impl HighlightKind {
    /// Map a query capture name onto the closed category set. Dotted
    /// refinements (`constant.builtin`) fall back to their head segment;
    /// unknown captures map to `None` and are skipped.
    pub fn from_capture(name: &str) -> Option<Self> {
        match name {
            "keyword.directive" => return Some(Self::Directive),
            "punctuation.bracket" => return Some(Self::Bracket),
            "punctuation.delimiter" => return Some(Self::Delimiter),
            _ => {}
        }
        match name.split('.').next().unwrap_or(name) {
            "comment" => Some(Self::Comment),
            "keyword" => Some(Self::Keyword),
            "string" => Some(Self::String),
            "constant" | "number" | "boolean" => Some(Self::Constant),
            "type" => Some(Self::Type),
            "function" | "method" => Some(Self::Function),
            "property" | "field" => Some(Self::Property),
            "attribute" | "decorator" => Some(Self::Decorator),
            "namespace" | "module" => Some(Self::Namespace),
            "warning" => Some(Self::Warning),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HighlightToken {
    pub start: usize,
    pub end: usize,
    pub kind: HighlightKind,
}

pub struct SyntaxHighlighter {
    parser: Parser,
    tree: Option<Tree>,
    language_config: LanguageConfig,
    highlights: HashMap<usize, Vec<HighlightToken>>, // line -> tokens
    query_loader: QueryLoader,
}

impl std::fmt::Debug for SyntaxHighlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxHighlighter")
            .field("tree", &self.tree)
            .field("language_config", &self.language_config)
            .field("highlights", &self.highlights)
            .field("query_loader", &self.query_loader)
            .finish_non_exhaustive()
    }
}

impl SyntaxHighlighter {
    /// Activation entry point. Fails when the host has not registered a
    /// compiled grammar, when the grammar's ABI is incompatible, or when the
    /// grammar rejects the highlight query; after a successful activation
    /// everything downstream degrades gracefully instead of erroring.
    pub fn new(language_config: LanguageConfig) -> Result<Self, SupportError> {
        let grammar = language_config.grammar.ok_or_else(|| {
            SupportError::GrammarUnavailable(
                "no compiled grammar registered for TypeSpec".to_string(),
            )
        })?;

        let mut parser = Parser::new();
        parser.set_language(grammar())?;

        let mut query_loader = QueryLoader::new();
        query_loader.load_query(
            grammar(),
            language_config.highlight_query_path.as_deref(),
            language_config.highlight_query_fallback,
        )?;

        Ok(Self {
            parser,
            tree: None,
            language_config,
            highlights: HashMap::new(),
            query_loader,
        })
    }

    pub fn parse(&mut self, text: &str) {
        self.tree = self.parser.parse(text, None);
        self.update_highlights(text);
    }

    /// Incremental re-parse after a buffer edit.
    pub fn update_parse(&mut self, text: &str, edit: tree_sitter::InputEdit) {
        if let Some(tree) = &mut self.tree {
            tree.edit(&edit);
            self.tree = self.parser.parse(text, Some(tree));
        } else {
            self.parse(text);
            return;
        }
        self.update_highlights(text);
    }

    fn update_highlights(&mut self, text: &str) {
        self.highlights.clear();

        let Some(tree) = self.tree.as_ref() else {
            return;
        };
        let Some(grammar) = self.language_config.grammar else {
            return;
        };

        match self.query_loader.load_query(
            grammar(),
            self.language_config.highlight_query_path.as_deref(),
            self.language_config.highlight_query_fallback,
        ) {
            Ok(query) => Self::apply_query(&mut self.highlights, text, tree, &query),
            Err(e) => debug!("highlight query unavailable: {}", e),
        }

        // Sort tokens by start position
        for tokens in self.highlights.values_mut() {
            tokens.sort_by_key(|t| t.start);
        }
    }

    fn apply_query(
        highlights: &mut HashMap<usize, Vec<HighlightToken>>,
        text: &str,
        tree: &Tree,
        query: &Query,
    ) {
        let mut cursor = tree_sitter::QueryCursor::new();
        let captures = cursor.captures(query, tree.root_node(), text.as_bytes());

        for (mat, _) in captures {
            for capture in mat.captures {
                let capture_name = &query.capture_names()[capture.index as usize];
                let Some(kind) = HighlightKind::from_capture(capture_name) else {
                    trace!("unmapped capture: {}", capture_name);
                    continue;
                };
                let start = capture.node.start_byte();
                let end = capture.node.end_byte();
                let line = text[..start].chars().filter(|&c| c == '\n').count();

                highlights
                    .entry(line)
                    .or_default()
                    .push(HighlightToken { start, end, kind });
            }
        }
    }

    pub fn line_highlights(&self, line: usize) -> Option<&Vec<HighlightToken>> {
        self.highlights.get(&line)
    }

    pub fn tree(&self) -> Option<&Tree> {
        self.tree.as_ref()
    }
}
