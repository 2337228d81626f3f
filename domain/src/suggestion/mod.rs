//! Suggestion domain

pub mod entities;

pub use entities::Suggestion;
