//! Grammars registered by [`GrammarRegistry::with_builtins`](super::GrammarRegistry::with_builtins).
//!
//! Rust's nested block comments and Python's docstrings are scanned with the same
//! flat rules as every other language: the first `*/` closes a block comment and a
//! docstring is a STRING span.
//!
//! Rust has no `'` string delimiter, since it would also open on every lifetime. A
//! char literal holding a double quote, such as `'"'`, therefore opens a `"` string
//! that runs to the next `"` and hides any comment in between. Every later `"` then
//! flips between code and string for the rest of the file.

use lazy_static::lazy_static;

use super::{CommentGrammar, StringDelimiter};

const JS_DECLARATIONS: &[&str] = &[
    "function",
    "class",
    "interface",
    "type",
    "enum",
    "namespace",
    "module",
    "declare",
    "abstract",
    "export",
    "default",
    "const",
    "let",
    "var",
    "async",
    "static",
    "public",
    "private",
    "protected",
    "readonly",
    "get",
    "set",
];

const JS_STATEMENTS: &[&str] = &[
    "return", "if", "else", "for", "while", "do", "switch", "case", "break", "continue",
    "throw", "try", "catch", "finally", "await", "yield", "new", "delete", "typeof", "void",
    "this", "super", "import",
];

const C_DECLARATIONS: &[&str] = &[
    "struct", "union", "enum", "typedef", "static", "extern", "const", "inline", "void",
    "int", "char", "long", "short", "unsigned", "signed", "float", "double", "class",
    "namespace", "template", "public", "private", "protected", "virtual",
];

const C_STATEMENTS: &[&str] = &[
    "return", "if", "else", "for", "while", "do", "switch", "case", "break", "continue",
    "goto", "default",
];

lazy_static! {
    pub static ref BUILTIN_GRAMMARS: Vec<CommentGrammar> = vec![
        javascript("javascript", &["js", "jsx", "mjs", "cjs"]),
        javascript("typescript", &["ts", "tsx", "mts", "cts"]),
        CommentGrammar::new("rust")
            .with_extensions(&["rs"])
            .with_line_comments(&["//"])
            .with_block_comment("/*", "*/")
            .with_string(StringDelimiter::multiline("\""))
            .with_declaration_keywords(&[
                "pub", "fn", "struct", "enum", "trait", "impl", "type", "const", "static",
                "mod", "use", "unsafe", "async", "extern", "macro_rules",
            ])
            .with_statement_keywords(&[
                "return", "if", "else", "for", "while", "loop", "match", "break", "continue",
                "let", "self",
            ]),
        CommentGrammar::new("c")
            .with_extensions(&["c", "h"])
            .with_line_comments(&["//"])
            .with_block_comment("/*", "*/")
            .with_string(StringDelimiter::quoted("\""))
            .with_string(StringDelimiter::quoted("'"))
            .with_declaration_keywords(C_DECLARATIONS)
            .with_statement_keywords(C_STATEMENTS),
        CommentGrammar::new("cpp")
            .with_extensions(&["cpp", "cc", "cxx", "hpp", "hxx", "hh"])
            .with_line_comments(&["//"])
            .with_block_comment("/*", "*/")
            .with_string(StringDelimiter::quoted("\""))
            .with_string(StringDelimiter::quoted("'"))
            .with_declaration_keywords(C_DECLARATIONS)
            .with_statement_keywords(C_STATEMENTS),
        CommentGrammar::new("java")
            .with_extensions(&["java"])
            .with_line_comments(&["//"])
            .with_block_comment("/*", "*/")
            .with_string(StringDelimiter::multiline("\"\"\""))
            .with_string(StringDelimiter::quoted("\""))
            .with_string(StringDelimiter::quoted("'"))
            .with_declaration_keywords(&[
                "public", "private", "protected", "static", "final", "abstract", "class",
                "interface", "enum", "record", "void", "synchronized", "native",
            ])
            .with_statement_keywords(&[
                "return", "if", "else", "for", "while", "do", "switch", "case", "break",
                "continue", "throw", "try", "catch", "finally", "new", "this", "super",
            ]),
        CommentGrammar::new("go")
            .with_extensions(&["go"])
            .with_line_comments(&["//"])
            .with_block_comment("/*", "*/")
            .with_string(StringDelimiter::quoted("\""))
            .with_string(StringDelimiter::quoted("'"))
            .with_string(StringDelimiter::raw("`"))
            .with_declaration_keywords(&["func", "type", "var", "const", "package", "import"])
            .with_statement_keywords(&[
                "return", "if", "else", "for", "switch", "case", "break", "continue", "go",
                "defer", "select", "goto", "fallthrough",
            ]),
        CommentGrammar::new("python")
            .with_extensions(&["py", "pyi"])
            .with_line_comments(&["#"])
            .with_string(StringDelimiter::multiline("\"\"\""))
            .with_string(StringDelimiter::multiline("'''"))
            .with_string(StringDelimiter::quoted("\""))
            .with_string(StringDelimiter::quoted("'"))
            .with_declaration_keywords(&["def", "class", "async"])
            .with_statement_keywords(&[
                "return", "if", "elif", "else", "for", "while", "try", "except", "finally",
                "with", "raise", "pass", "break", "continue", "import", "from",
            ]),
        CommentGrammar::new("shell")
            .with_extensions(&["sh", "bash", "zsh"])
            .with_line_comments(&["#"])
            .with_string(StringDelimiter::multiline("\""))
            .with_string(StringDelimiter::raw("'"))
            .with_declaration_keywords(&["function", "export", "readonly", "local"])
            .with_statement_keywords(&[
                "if", "then", "else", "elif", "fi", "for", "while", "do", "done", "case",
                "esac", "return", "exit",
            ]),
    ];
}

fn javascript(language: &str, extensions: &[&str]) -> CommentGrammar {
    CommentGrammar::new(language)
        .with_extensions(extensions)
        .with_line_comments(&["//"])
        .with_block_comment("/*", "*/")
        .with_string(StringDelimiter::quoted("\""))
        .with_string(StringDelimiter::quoted("'"))
        .with_string(StringDelimiter::multiline("`"))
        .with_declaration_keywords(JS_DECLARATIONS)
        .with_statement_keywords(JS_STATEMENTS)
}
