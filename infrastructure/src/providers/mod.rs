//! Generative-model provider adapters

pub mod gemini;
