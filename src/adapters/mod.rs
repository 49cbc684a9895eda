// Adapters layer: concrete implementations for external systems (http surface, sentiment lexicon).

pub mod http;
pub mod lexicon;
