//! Visible clients and variables at a cursor position.

use serde::Serialize;

use super::Analysis;
use super::connections::ConnectionCandidate;
use crate::base::Position;
use crate::error::FlowModelError;
use crate::model::{Client, ClientBuilder};
use crate::semantic::VariableScope;

/// Connection-typed variables visible at `position`, in declaration order.
pub fn visible_clients(
    analysis: &Analysis<'_>,
    position: Position,
) -> Result<Vec<Client>, FlowModelError> {
    analysis.offset_of(position)?;
    let line_index = analysis.document().line_index();

    let mut builder = ClientBuilder::new();
    let clients = analysis
        .semantic_model()
        .visible_symbols(analysis.document(), position)
        .iter()
        .filter_map(|symbol| ConnectionCandidate::from_symbol(symbol).ok())
        .map(|candidate| {
            builder
                .variable_symbol(candidate.variable, line_index)
                .kind(&candidate.variable.type_descriptor.signature())
                .scope(candidate.variable.scope.into())
                .build()
        })
        .collect();
    Ok(clients)
}

/// A visible variable and its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleVariable {
    pub name: String,
    pub type_signature: String,
}

/// Visible variables sharing a declaration scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableCategory {
    pub name: String,
    pub variables: Vec<VisibleVariable>,
}

const VARIABLE_GROUPS: [(VariableScope, &str); 4] = [
    (VariableScope::Local, "Local Variables"),
    (VariableScope::Object, "Object Fields"),
    (VariableScope::Module, "Module Variables"),
    (VariableScope::Configurable, "Configurable Variables"),
];

/// Variables visible at `position`, grouped by scope. Empty groups are omitted.
pub fn visible_variable_types(
    analysis: &Analysis<'_>,
    position: Position,
) -> Result<Vec<VariableCategory>, FlowModelError> {
    analysis.offset_of(position)?;
    let symbols = analysis
        .semantic_model()
        .visible_symbols(analysis.document(), position);

    let categories = VARIABLE_GROUPS
        .iter()
        .filter_map(|(scope, name)| {
            let variables: Vec<_> = symbols
                .iter()
                .filter_map(|symbol| symbol.as_variable())
                .filter(|variable| variable.scope == *scope)
                .map(|variable| VisibleVariable {
                    name: variable.name.to_string(),
                    type_signature: variable.type_descriptor.signature(),
                })
                .collect();
            (!variables.is_empty()).then(|| VariableCategory {
                name: name.to_string(),
                variables,
            })
        })
        .collect();
    Ok(categories)
}
