//! Recognizing connection-typed symbols.

use std::fmt;

use crate::semantic::{ModuleId, Symbol, TypeReference, VariableSymbol};

/// A visible variable whose declared type is a client class.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ConnectionCandidate<'s> {
    pub variable: &'s VariableSymbol,
    pub type_reference: &'s TypeReference,
    pub module: &'s ModuleId,
}

/// Why a symbol is not a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NotAConnection {
    NotAVariable,
    NotAClient,
    MissingModule,
}

impl fmt::Display for NotAConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotAVariable => "not a variable",
            Self::NotAClient => "type is not a client class",
            Self::MissingModule => "client class has no module",
        })
    }
}

impl<'s> ConnectionCandidate<'s> {
    /// Narrow symbol → variable → type reference → client class → module.
    pub fn from_symbol(symbol: &'s Symbol) -> Result<Self, NotAConnection> {
        let variable = symbol.as_variable().ok_or(NotAConnection::NotAVariable)?;
        let (type_reference, class) = variable.client_class().ok_or(NotAConnection::NotAClient)?;
        let module = class.module.as_ref().ok_or(NotAConnection::MissingModule)?;
        Ok(Self {
            variable,
            type_reference,
            module,
        })
    }

    pub fn name(&self) -> &str {
        &self.variable.name
    }
}
