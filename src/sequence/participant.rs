//! Participants and the naming cache that deduplicates them.

use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashMap, FxHasher};
use serde::Serialize;

use crate::base::LineRange;
use crate::semantic::{SemanticModel, Symbol};
use crate::syntax::{Document, SyntaxKind, SyntaxNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipantKind {
    /// A function the flow calls
    Function,
    /// A client the flow sends messages through
    Endpoint,
}

impl ParticipantKind {
    /// Functions and client-typed variables can take part; nothing else can.
    pub fn of(symbol: &Symbol) -> Option<Self> {
        match symbol {
            Symbol::Function(_) => Some(Self::Function),
            Symbol::Variable(variable) if variable.client_class().is_some() => Some(Self::Endpoint),
            Symbol::Variable(_) | Symbol::Class(_) | Symbol::Module(_) => None,
        }
    }
}

/// One lifeline of a sequence diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub kind: ParticipantKind,
    pub module_name: String,
    /// Declaration site, when it lies in the current document
    pub location: Option<LineRange>,
    /// Participant that first referenced this one
    pub source_id: String,
}

/// Assigns participant ids for one document.
///
/// Ids are cached by display name: asking twice for the same name returns
/// the first id without resolving again.
pub struct ParticipantManager<'a> {
    semantic_model: &'a dyn SemanticModel,
    document: &'a Document,
    cache: FxHashMap<String, String>,
    participants: Vec<Participant>,
}

impl<'a> ParticipantManager<'a> {
    pub fn new(semantic_model: &'a dyn SemanticModel, document: &'a Document) -> Self {
        Self {
            semantic_model,
            document,
            cache: FxHashMap::default(),
            participants: Vec::new(),
        }
    }

    /// Id of the participant a name reference resolves to. Plain and
    /// module-qualified references to the same name share one id.
    ///
    /// Returns `None` when the name does not resolve to something that can
    /// be a participant.
    pub fn participant_id(&mut self, name: &SyntaxNode, source_id: &str) -> Option<String> {
        let key = referenced_name(name);
        if let Some(id) = self.cache.get(&key) {
            tracing::trace!(name = %key, "participant cache hit");
            return Some(id.clone());
        }

        let symbol = self.semantic_model.symbol(name)?;
        symbol.location()?;
        let module_name = symbol.module()?.name.to_string();
        let id = self.generate_participant(&symbol, source_id, &module_name)?;
        self.cache.entry(key).or_insert_with(|| id.clone());
        Some(id)
    }

    /// Record a new participant for `symbol` and cache its id by name.
    pub fn generate_participant(
        &mut self,
        symbol: &Symbol,
        source_id: &str,
        module_name: &str,
    ) -> Option<String> {
        let kind = ParticipantKind::of(symbol)?;
        let name = symbol.name()?.to_string();
        let root_range = self.document.root().text_range();
        let location = symbol
            .location()
            .filter(|range| root_range.contains_range(*range))
            .map(|range| self.document.line_index().line_range(range));

        let mut hasher = FxHasher::default();
        (module_name, name.as_str(), location).hash(&mut hasher);
        let id = hasher.finish().to_string();

        self.participants.push(Participant {
            id: id.clone(),
            name: name.clone(),
            kind,
            module_name: module_name.to_string(),
            location,
            source_id: source_id.to_string(),
        });
        self.cache.entry(name).or_insert_with(|| id.clone());
        Some(id)
    }

    /// Participants in discovery order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn into_participants(self) -> Vec<Participant> {
        self.participants
    }
}

/// The identifier a name reference points at: the last identifier token,
/// so `orders:helper` and `helper` share a cache entry.
fn referenced_name(name: &SyntaxNode) -> String {
    name.descendants_with_tokens()
        .filter_map(|element| element.into_token())
        .filter(|token| token.kind() == SyntaxKind::IDENT)
        .last()
        .map(|token| token.text().to_string())
        .unwrap_or_else(|| name.text().to_string().trim().to_string())
}
