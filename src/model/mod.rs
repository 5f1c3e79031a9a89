//! Diagram model types: palette entries, categories and clients.
//!
//! Everything here is created fresh per request and serialized with serde;
//! nothing is shared between requests.

mod category;
mod client;
mod node;
mod node_kind;

pub use category::{Category, CategoryBuilder, CategoryName, Item};
pub use client::{Client, ClientBuilder, ClientKind, ClientScope};
pub use node::{AvailableNode, Codedata, Metadata};
pub use node_kind::NodeKind;
