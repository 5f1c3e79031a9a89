//! Sequence diagram support.
//!
//! A sequence diagram shows the functions and endpoints a flow talks to as
//! participants. [`ParticipantManager`] assigns each one a stable id and
//! reuses it for every later reference with the same name.

mod participant;

pub use participant::{Participant, ParticipantKind, ParticipantManager};
