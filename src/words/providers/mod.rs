//! Word-association provider implementations

#[cfg(feature = "datamuse")]
pub mod datamuse;
pub mod fixed;

#[cfg(feature = "datamuse")]
pub use datamuse::DatamuseProvider;
pub use fixed::StaticProvider;
