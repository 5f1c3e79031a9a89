//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all node and token kinds an external frontend can lower
//! into our tree. Only the structural node kinds drive diagram decisions; the
//! token kinds exist so lowered trees stay lossless.

/// All syntax kinds (tokens and nodes)
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (definitions, statements, clauses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,   // identifier
    INTEGER, // 42
    STRING,  // "hello"

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,     // {
    R_BRACE,     // }
    L_PAREN,     // (
    R_PAREN,     // )
    L_BRACKET,   // [
    R_BRACKET,   // ]
    SEMICOLON,   // ;
    COLON,       // :
    COMMA,       // ,
    DOT,         // .
    EQ,          // =
    QUESTION,    // ?
    RIGHT_ARROW, // ->
    SLASH,       // /
    LT,          // <
    GT,          // >

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    // Declarations
    IMPORT_KW,
    FUNCTION_KW,
    RESOURCE_KW,
    REMOTE_KW,
    ISOLATED_KW,
    PUBLIC_KW,
    FINAL_KW,
    CONFIGURABLE_KW,
    CLIENT_KW,
    CLASS_KW,
    SERVICE_KW,
    RETURNS_KW,

    // Statements
    RETURN_KW,
    IF_KW,
    ELSE_KW,
    WHILE_KW,
    FOREACH_KW,
    IN_KW,
    MATCH_KW,
    LOCK_KW,
    TRANSACTION_KW,
    DO_KW,
    ON_KW,
    FAIL_KW,
    BREAK_KW,
    CONTINUE_KW,
    PANIC_KW,

    // Expressions
    CHECK_KW,
    NEW_KW,
    TRUE_KW,
    FALSE_KW,

    // =========================================================================
    // NODES - module level
    // =========================================================================
    SOURCE_FILE,
    IMPORT_DECLARATION,
    MODULE_VARIABLE_DECLARATION,
    FUNCTION_DEFINITION,
    CLASS_DEFINITION,
    SERVICE_DECLARATION,
    OBJECT_METHOD_DEFINITION,
    RESOURCE_ACCESSOR_DEFINITION,

    // =========================================================================
    // NODES - signatures
    // =========================================================================
    FUNCTION_SIGNATURE,
    PARAMETER,
    RETURN_TYPE_DESCRIPTOR,
    TYPE_DESCRIPTOR,
    TYPED_BINDING_PATTERN,

    // =========================================================================
    // NODES - bodies and statements
    // =========================================================================
    FUNCTION_BODY_BLOCK,
    BLOCK_STATEMENT,
    LOCAL_VARIABLE_DECLARATION,
    ASSIGNMENT_STATEMENT,
    CALL_STATEMENT,
    ACTION_STATEMENT,
    RETURN_STATEMENT,
    BREAK_STATEMENT,
    CONTINUE_STATEMENT,
    FAIL_STATEMENT,
    PANIC_STATEMENT,
    WHILE_STATEMENT,
    FOREACH_STATEMENT,
    IF_ELSE_STATEMENT,
    ELSE_BLOCK,
    LOCK_STATEMENT,
    TRANSACTION_STATEMENT,
    MATCH_STATEMENT,
    MATCH_CLAUSE,
    DO_STATEMENT,
    ON_FAIL_CLAUSE,

    // =========================================================================
    // NODES - expressions
    // =========================================================================
    NAME_REFERENCE,
    QUALIFIED_NAME_REFERENCE,
    FUNCTION_CALL,
    REMOTE_METHOD_CALL_ACTION,
    IMPLICIT_NEW_EXPRESSION,
    LITERAL,
    BINARY_EXPRESSION,

    /// Anything the frontend could not lower
    ERROR,

    // Must be last
    #[doc(hidden)]
    __LAST,
}

/// How a construct enclosing the cursor shapes the insertable nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    /// Loop bodies: default nodes plus `break`/`continue`.
    Iterating,
    /// Conditional, lock, transaction, match, do and on-fail blocks.
    Branching,
    /// Keep walking outward.
    Other,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::IMPORT_KW as u16) && (self as u16) <= (Self::FALSE_KW as u16)
    }

    /// Check if this is a token kind rather than a node kind
    pub fn is_token(self) -> bool {
        (self as u16) < (Self::SOURCE_FILE as u16)
    }

    /// Classify an enclosing construct for the available-nodes walk.
    ///
    /// No wildcard arm: a new kind must be placed here explicitly.
    pub fn construct(self) -> Construct {
        match self {
            Self::WHILE_STATEMENT | Self::FOREACH_STATEMENT => Construct::Iterating,

            Self::IF_ELSE_STATEMENT
            | Self::LOCK_STATEMENT
            | Self::TRANSACTION_STATEMENT
            | Self::MATCH_STATEMENT
            | Self::DO_STATEMENT
            | Self::ON_FAIL_CLAUSE => Construct::Branching,

            // Module level and signatures
            Self::SOURCE_FILE
            | Self::IMPORT_DECLARATION
            | Self::MODULE_VARIABLE_DECLARATION
            | Self::FUNCTION_DEFINITION
            | Self::CLASS_DEFINITION
            | Self::SERVICE_DECLARATION
            | Self::OBJECT_METHOD_DEFINITION
            | Self::RESOURCE_ACCESSOR_DEFINITION
            | Self::FUNCTION_SIGNATURE
            | Self::PARAMETER
            | Self::RETURN_TYPE_DESCRIPTOR
            | Self::TYPE_DESCRIPTOR
            | Self::TYPED_BINDING_PATTERN => Construct::Other,

            // Bodies, plain statements and clauses walked through
            Self::FUNCTION_BODY_BLOCK
            | Self::BLOCK_STATEMENT
            | Self::LOCAL_VARIABLE_DECLARATION
            | Self::ASSIGNMENT_STATEMENT
            | Self::CALL_STATEMENT
            | Self::ACTION_STATEMENT
            | Self::RETURN_STATEMENT
            | Self::BREAK_STATEMENT
            | Self::CONTINUE_STATEMENT
            | Self::FAIL_STATEMENT
            | Self::PANIC_STATEMENT
            | Self::ELSE_BLOCK
            | Self::MATCH_CLAUSE => Construct::Other,

            // Expressions
            Self::NAME_REFERENCE
            | Self::QUALIFIED_NAME_REFERENCE
            | Self::FUNCTION_CALL
            | Self::REMOTE_METHOD_CALL_ACTION
            | Self::IMPLICIT_NEW_EXPRESSION
            | Self::LITERAL
            | Self::BINARY_EXPRESSION
            | Self::ERROR => Construct::Other,

            // Tokens never enclose anything
            Self::WHITESPACE
            | Self::LINE_COMMENT
            | Self::IDENT
            | Self::INTEGER
            | Self::STRING
            | Self::L_BRACE
            | Self::R_BRACE
            | Self::L_PAREN
            | Self::R_PAREN
            | Self::L_BRACKET
            | Self::R_BRACKET
            | Self::SEMICOLON
            | Self::COLON
            | Self::COMMA
            | Self::DOT
            | Self::EQ
            | Self::QUESTION
            | Self::RIGHT_ARROW
            | Self::SLASH
            | Self::LT
            | Self::GT
            | Self::IMPORT_KW
            | Self::FUNCTION_KW
            | Self::RESOURCE_KW
            | Self::REMOTE_KW
            | Self::ISOLATED_KW
            | Self::PUBLIC_KW
            | Self::FINAL_KW
            | Self::CONFIGURABLE_KW
            | Self::CLIENT_KW
            | Self::CLASS_KW
            | Self::SERVICE_KW
            | Self::RETURNS_KW
            | Self::RETURN_KW
            | Self::IF_KW
            | Self::ELSE_KW
            | Self::WHILE_KW
            | Self::FOREACH_KW
            | Self::IN_KW
            | Self::MATCH_KW
            | Self::LOCK_KW
            | Self::TRANSACTION_KW
            | Self::DO_KW
            | Self::ON_KW
            | Self::FAIL_KW
            | Self::BREAK_KW
            | Self::CONTINUE_KW
            | Self::PANIC_KW
            | Self::CHECK_KW
            | Self::NEW_KW
            | Self::TRUE_KW
            | Self::FALSE_KW
            | Self::__LAST => Construct::Other,
        }
    }

    /// Definitions that own a return type (functions, methods, resources)
    pub fn is_function_like(self) -> bool {
        matches!(
            self,
            Self::FUNCTION_DEFINITION
                | Self::OBJECT_METHOD_DEFINITION
                | Self::RESOURCE_ACCESSOR_DEFINITION
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FlowLanguage {}

impl rowan::Language for FlowLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<FlowLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<FlowLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<FlowLanguage>;
