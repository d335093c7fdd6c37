use std::path::Path;

use crate::syntax::{LanguageConfig, LanguageId};

/// The one registered language. The compiled TypeSpec grammar is supplied by
/// the host editor through [`LanguageConfig::with_grammar`]; until then the
/// config carries only the query sources.
pub fn typespec_language() -> LanguageConfig {
    LanguageConfig {
        id: LanguageId::TypeSpec,
        grammar: None,
        highlight_query_path: Some("queries/typespec/highlights.scm".to_string()),
        highlight_query_fallback: include_str!("../../queries/typespec/highlights.scm"),
    }
}

/// File-type dispatch: `.tsp` files route to TypeSpec, everything else to
/// no language.
pub fn language_for_path(path: &Path) -> Option<LanguageConfig> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("tsp") => Some(typespec_language()),
        _ => None,
    }
}
