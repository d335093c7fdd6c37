pub mod cache;
pub mod highlighter;
pub mod kinds;
pub mod language;
pub mod query_loader;

pub use highlighter::{HighlightKind, HighlightToken, SyntaxHighlighter};
pub use language::{language_for_path, typespec_language};
pub use query_loader::QueryLoader;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageId {
    TypeSpec,
}

/// Per-language wiring: the injected grammar and the highlight query sources.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    pub id: LanguageId,
    /// Compiled grammar, registered by the host editor. `None` until the
    /// host injects it; activation fails while it is missing.
    pub grammar: Option<fn() -> tree_sitter::Language>,
    /// Runtime override for the highlight query file.
    pub highlight_query_path: Option<String>,
    /// Embedded query used when no runtime file is present.
    pub highlight_query_fallback: &'static str,
}

impl LanguageConfig {
    /// Register the compiled grammar for this language.
    pub fn with_grammar(mut self, grammar: fn() -> tree_sitter::Language) -> Self {
        self.grammar = Some(grammar);
        self
    }
}
