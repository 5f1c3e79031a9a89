//! Document fixtures lowered through `TreeBuilder`.
//!
//! Each fixture renders a small program and records exactly one cursor mark
//! with [`cursor`]. The mark always sits between two whitespace tokens of
//! the same parent, so the enclosing node is unambiguous.

use flowmodel::GeneratorConfig;
use flowmodel::Position;
use flowmodel::central::{ConnectorIndex, LocalIndex};
use flowmodel::ide::Analysis;
use flowmodel::model::Item;
use flowmodel::semantic::{FunctionSymbol, SemanticSnapshot, TypeSymbol};
use flowmodel::syntax::{Document, SyntaxKind, TreeBuilder};

/// A document, its cursor and the semantic facts about it.
pub struct Fixture {
    pub document: Document,
    pub cursor: Position,
    pub semantic: SemanticSnapshot,
}

impl Fixture {
    /// Render a source file whose members are produced by `members`.
    pub fn build(members: impl FnOnce(&mut TreeBuilder)) -> Self {
        let mut b = TreeBuilder::new();
        b.start_node(SyntaxKind::SOURCE_FILE);
        members(&mut b);
        b.ws("\n").finish_node();

        let (root, marks) = b.finish();
        assert_eq!(marks.len(), 1, "fixture must mark exactly one cursor");
        let document = Document::new("main.bal", root);
        let cursor = document.line_index().line_col(marks[0]);
        Self {
            document,
            cursor,
            semantic: SemanticSnapshot::new(),
        }
    }

    /// Bind the `nth` function, method or resource (document order) to a
    /// function symbol with the given return type.
    pub fn bind_function(&mut self, nth: usize, return_type: Option<TypeSymbol>) -> &mut Self {
        let node = self
            .document
            .root()
            .descendants()
            .filter(|n| n.kind().is_function_like())
            .nth(nth)
            .unwrap_or_else(|| panic!("no function-like node #{nth}"));
        let name = node
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind() == SyntaxKind::IDENT)
            .map(|t| t.text().to_string())
            .unwrap_or_default();
        self.semantic.bind(&node, FunctionSymbol::new(name, return_type));
        self
    }

    pub fn analysis<'a>(&'a self, env: &'a TestEnv) -> Analysis<'a> {
        Analysis::new(
            &self.document,
            &self.semantic,
            &env.lookup,
            &env.local_index,
            &env.config,
        )
    }

    /// Available nodes at the fixture's cursor.
    pub fn available_nodes(&self, env: &TestEnv) -> Vec<Item> {
        self.analysis(env)
            .available_nodes(self.cursor)
            .expect("cursor lies inside the document")
    }
}

/// Process-scoped collaborators.
pub struct TestEnv {
    pub lookup: ConnectorIndex,
    pub local_index: LocalIndex,
    pub config: GeneratorConfig,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self {
            lookup: ConnectorIndex::new(),
            local_index: LocalIndex::default(),
            config: GeneratorConfig::default(),
        }
    }
}

// =============================================================================
// TREE SHAPES
// =============================================================================

/// Record the cursor inside the current node.
pub fn cursor(b: &mut TreeBuilder) {
    b.ws("\n        ").mark().ws(" ");
}

/// `function <name>() [returns <ty>] { <body> }`
pub fn function(
    b: &mut TreeBuilder,
    name: &str,
    returns: Option<&str>,
    body: impl FnOnce(&mut TreeBuilder),
) {
    definition(b, SyntaxKind::FUNCTION_DEFINITION, &[(SyntaxKind::FUNCTION_KW, "function")], name, returns, body);
}

/// `class <name> { <members> }`
pub fn class(b: &mut TreeBuilder, name: &str, members: impl FnOnce(&mut TreeBuilder)) {
    b.ws("\n")
        .start_node(SyntaxKind::CLASS_DEFINITION)
        .token(SyntaxKind::CLASS_KW, "class")
        .ws(" ")
        .token(SyntaxKind::IDENT, name)
        .ws(" ")
        .token(SyntaxKind::L_BRACE, "{");
    members(b);
    b.ws("\n").token(SyntaxKind::R_BRACE, "}").finish_node();
}

/// `function <name>() ...` inside a class
pub fn method(
    b: &mut TreeBuilder,
    name: &str,
    returns: Option<&str>,
    body: impl FnOnce(&mut TreeBuilder),
) {
    definition(b, SyntaxKind::OBJECT_METHOD_DEFINITION, &[(SyntaxKind::FUNCTION_KW, "function")], name, returns, body);
}

/// `service / on ep { <members> }`
pub fn service(b: &mut TreeBuilder, members: impl FnOnce(&mut TreeBuilder)) {
    b.ws("\n")
        .start_node(SyntaxKind::SERVICE_DECLARATION)
        .token(SyntaxKind::SERVICE_KW, "service")
        .ws(" ")
        .token(SyntaxKind::SLASH, "/")
        .ws(" ")
        .token(SyntaxKind::ON_KW, "on")
        .ws(" ")
        .token(SyntaxKind::IDENT, "ep")
        .ws(" ")
        .token(SyntaxKind::L_BRACE, "{");
    members(b);
    b.ws("\n").token(SyntaxKind::R_BRACE, "}").finish_node();
}

/// `resource function get <name>() ...` inside a service
pub fn resource(
    b: &mut TreeBuilder,
    name: &str,
    returns: Option<&str>,
    body: impl FnOnce(&mut TreeBuilder),
) {
    definition(
        b,
        SyntaxKind::RESOURCE_ACCESSOR_DEFINITION,
        &[(SyntaxKind::RESOURCE_KW, "resource"), (SyntaxKind::FUNCTION_KW, "function")],
        name,
        returns,
        body,
    );
}

fn definition(
    b: &mut TreeBuilder,
    kind: SyntaxKind,
    keywords: &[(SyntaxKind, &str)],
    name: &str,
    returns: Option<&str>,
    body: impl FnOnce(&mut TreeBuilder),
) {
    b.ws("\n").start_node(kind);
    for (keyword, text) in keywords {
        b.token(*keyword, text).ws(" ");
    }
    b.token(SyntaxKind::IDENT, name)
        .start_node(SyntaxKind::FUNCTION_SIGNATURE)
        .token(SyntaxKind::L_PAREN, "(")
        .token(SyntaxKind::R_PAREN, ")");
    if let Some(ty) = returns {
        b.ws(" ")
            .token(SyntaxKind::RETURNS_KW, "returns")
            .ws(" ")
            .start_node(SyntaxKind::RETURN_TYPE_DESCRIPTOR)
            .token(SyntaxKind::IDENT, ty)
            .finish_node();
    }
    b.finish_node()
        .ws(" ")
        .start_node(SyntaxKind::FUNCTION_BODY_BLOCK)
        .token(SyntaxKind::L_BRACE, "{");
    body(b);
    b.ws("\n").token(SyntaxKind::R_BRACE, "}").finish_node().finish_node();
}

/// `<keyword> cond { <body> }` as a node of `kind`, e.g. a while loop.
pub fn block(
    b: &mut TreeBuilder,
    kind: SyntaxKind,
    keyword: SyntaxKind,
    text: &str,
    body: impl FnOnce(&mut TreeBuilder),
) {
    b.ws("\n    ")
        .start_node(kind)
        .token(keyword, text)
        .ws(" ")
        .start_node(SyntaxKind::NAME_REFERENCE)
        .token(SyntaxKind::IDENT, "cond")
        .finish_node()
        .ws(" ");
    braces(b, body);
    b.finish_node();
}

/// `if cond { <then> } else { <otherwise> }`
pub fn if_else(
    b: &mut TreeBuilder,
    then: impl FnOnce(&mut TreeBuilder),
    otherwise: impl FnOnce(&mut TreeBuilder),
) {
    b.ws("\n    ")
        .start_node(SyntaxKind::IF_ELSE_STATEMENT)
        .token(SyntaxKind::IF_KW, "if")
        .ws(" ")
        .token(SyntaxKind::IDENT, "cond")
        .ws(" ");
    braces(b, then);
    b.ws(" ")
        .start_node(SyntaxKind::ELSE_BLOCK)
        .token(SyntaxKind::ELSE_KW, "else")
        .ws(" ");
    braces(b, otherwise);
    b.finish_node().finish_node();
}

/// `do { <body> } on fail { <handler> }`
pub fn do_on_fail(
    b: &mut TreeBuilder,
    body: impl FnOnce(&mut TreeBuilder),
    handler: impl FnOnce(&mut TreeBuilder),
) {
    b.ws("\n    ")
        .start_node(SyntaxKind::DO_STATEMENT)
        .token(SyntaxKind::DO_KW, "do")
        .ws(" ");
    braces(b, body);
    b.ws(" ")
        .start_node(SyntaxKind::ON_FAIL_CLAUSE)
        .token(SyntaxKind::ON_KW, "on")
        .ws(" ")
        .token(SyntaxKind::FAIL_KW, "fail")
        .ws(" ");
    braces(b, handler);
    b.finish_node().finish_node();
}

/// `int x = 1;`
pub fn statement(b: &mut TreeBuilder) {
    b.ws("\n    ")
        .start_node(SyntaxKind::LOCAL_VARIABLE_DECLARATION)
        .start_node(SyntaxKind::TYPED_BINDING_PATTERN)
        .token(SyntaxKind::IDENT, "int")
        .ws(" ")
        .token(SyntaxKind::IDENT, "x")
        .finish_node()
        .ws(" ")
        .token(SyntaxKind::EQ, "=")
        .ws(" ")
        .start_node(SyntaxKind::LITERAL)
        .token(SyntaxKind::INTEGER, "1")
        .finish_node()
        .token(SyntaxKind::SEMICOLON, ";")
        .finish_node();
}

/// A statement whose first token carries the cursor, e.g. `|foo();`.
pub fn statement_with_cursor(b: &mut TreeBuilder) {
    b.ws("\n    ")
        .start_node(SyntaxKind::CALL_STATEMENT)
        .start_node(SyntaxKind::FUNCTION_CALL)
        .token(SyntaxKind::IDENT, "fo")
        .mark()
        .token(SyntaxKind::IDENT, "o")
        .token(SyntaxKind::L_PAREN, "(")
        .token(SyntaxKind::R_PAREN, ")")
        .finish_node()
        .token(SyntaxKind::SEMICOLON, ";")
        .finish_node();
}

fn braces(b: &mut TreeBuilder, body: impl FnOnce(&mut TreeBuilder)) {
    b.start_node(SyntaxKind::BLOCK_STATEMENT)
        .token(SyntaxKind::L_BRACE, "{");
    body(b);
    b.ws("\n    ").token(SyntaxKind::R_BRACE, "}").finish_node();
}
