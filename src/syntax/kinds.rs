// src/syntax/kinds.rs - Node-type tags of the tree-sitter-typespec grammar
//
// The indentation rule table and the outline walk are coupled to these exact
// strings and must be updated in lock-step with any grammar version change.

pub const SOURCE_FILE: &str = "source_file";

pub const LINE_COMMENT: &str = "line_comment";
pub const BLOCK_COMMENT: &str = "block_comment";

pub const TRIPLE_QUOTED_STRING: &str = "triple_quoted_string_literal";
pub const TRIPLE_QUOTED_STRING_FRAGMENT: &str = "triple_quoted_string_fragment";

/// Closing delimiters align with the line of the construct they close.
pub const CLOSING_DELIMITERS: &[&str] = &["}", "]", ")"];

/// Body constructs whose members indent one step past the construct's line.
pub const INDENTED_BODIES: &[&str] = &[
    "model_body",
    "enum_body",
    "interface_body",
    "union_body",
    "namespace_body",
    "arguments",
    "object_value",
    "tuple_value",
];

// Declaration statements surfaced in the outline.
pub const ALIAS_STATEMENT: &str = "alias_statement";
pub const ENUM_STATEMENT: &str = "enum_statement";
pub const INTERFACE_STATEMENT: &str = "interface_statement";
pub const MODEL_STATEMENT: &str = "model_statement";
pub const OPERATION_STATEMENT: &str = "operation_statement";
pub const SCALAR_STATEMENT: &str = "scalar_statement";
pub const UNION_STATEMENT: &str = "union_statement";

pub fn is_comment(kind: &str) -> bool {
    kind == LINE_COMMENT || kind == BLOCK_COMMENT
}

pub fn is_closing_delimiter(kind: &str) -> bool {
    CLOSING_DELIMITERS.contains(&kind)
}

pub fn is_indented_body(kind: &str) -> bool {
    INDENTED_BODIES.contains(&kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closing_delimiters() {
        assert!(is_closing_delimiter("}"));
        assert!(is_closing_delimiter("]"));
        assert!(is_closing_delimiter(")"));
        assert!(!is_closing_delimiter("{"));
        assert!(!is_closing_delimiter("model_body"));
    }

    #[test]
    fn test_indented_bodies_cover_spec_constructs() {
        for kind in ["model_body", "enum_body", "interface_body", "union_body"] {
            assert!(is_indented_body(kind), "{} should indent members", kind);
        }
        assert!(!is_indented_body("source_file"));
    }
}
