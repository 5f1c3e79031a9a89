//! Sequence diagram tests
