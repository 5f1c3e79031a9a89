//! Insertable diagram node kinds.

use serde::{Deserialize, Serialize};

/// Every kind of node the diagram palette can offer.
///
/// The set is closed. `ERROR_HANDLER` and the concurrency kinds are part of
/// the wire vocabulary but are not offered yet (see [`NodeKind::is_reserved`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    // Statements
    Variable,
    Assign,
    Function,
    DataMapper,

    // Control
    If,
    Match,
    While,
    Foreach,
    Return,
    Break,
    Continue,
    Stop,

    // Error handling
    ErrorHandler,
    Fail,
    Panic,

    // Concurrency
    Transaction,
    Commit,
    Rollback,
    Retry,
    Lock,
    Start,

    // Connections
    NewConnection,
    ActionCall,
}

impl NodeKind {
    /// Default palette label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Variable => "Declare Variable",
            Self::Assign => "Assign",
            Self::Function => "Function Call",
            Self::DataMapper => "Data Mapper",
            Self::If => "If",
            Self::Match => "Match",
            Self::While => "While",
            Self::Foreach => "Foreach",
            Self::Return => "Return",
            Self::Break => "Break",
            Self::Continue => "Continue",
            Self::Stop => "Stop",
            Self::ErrorHandler => "Error Handler",
            Self::Fail => "Fail",
            Self::Panic => "Panic",
            Self::Transaction => "Transaction",
            Self::Commit => "Commit",
            Self::Rollback => "Rollback",
            Self::Retry => "Retry",
            Self::Lock => "Lock",
            Self::Start => "Start",
            Self::NewConnection => "New Connection",
            Self::ActionCall => "Action Call",
        }
    }

    /// Default palette description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Variable => "New variable with type",
            Self::Assign => "Assign a value to a variable",
            Self::Function => "Call a function",
            Self::DataMapper => "Map data from multiple variables to a record type",
            Self::If => "Add conditional branch to the integration flow.",
            Self::Match => "Switches the data flow based on the value of an expression.",
            Self::While => "Loop over a block of code.",
            Self::Foreach => "Iterate over a block of code.",
            Self::Return => "Value of the function's return expression.",
            Self::Break => "Break out of the loop",
            Self::Continue => "Skip the current iteration and continue with the next one",
            Self::Stop => "Stop the execution of the flow",
            Self::ErrorHandler => "Catch and handle errors",
            Self::Fail => "Fail the execution",
            Self::Panic => "Panic and stop the execution",
            Self::Transaction => "Handle transaction.",
            Self::Commit => "Commit transaction",
            Self::Rollback => "Rollback transaction",
            Self::Retry => "Retry block.",
            Self::Lock => "Allow to access mutable states safely",
            Self::Start => "Execute a function or a method invocation in a new strand",
            Self::NewConnection => "Create a new connection",
            Self::ActionCall => "Call an action of a connection",
        }
    }

    /// Kinds in the vocabulary that the palette does not offer yet.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            Self::ErrorHandler
                | Self::Transaction
                | Self::Commit
                | Self::Rollback
                | Self::Retry
                | Self::Lock
                | Self::Start
        )
    }
}
