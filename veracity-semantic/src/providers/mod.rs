//! Similarity provider implementations.

mod lexical;
#[cfg(feature = "embeddings")]
mod neural;

pub use lexical::LexicalOverlapProvider;
#[cfg(feature = "embeddings")]
pub use neural::NeuralProvider;
