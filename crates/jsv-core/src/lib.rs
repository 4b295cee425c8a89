//! # jsv-core — Foundational Types for the Validation Engine
//!
//! This crate holds the data structures every other `jsv-*` crate is built
//! on. It knows nothing about keywords or validation algorithms; it only
//! provides the containers and value types those algorithms exchange.
//!
//! ## Key Design Principles
//!
//! 1. **Frozen/thawed pairs.** [`Dictionary`] is an immutable name→value
//!    mapping; [`DictionaryBuilder`] is its mutable staging area. Freezing
//!    copies, so a snapshot never observes later builder mutations.
//!
//! 2. **`CanonicalBytes` newtype.** All digest computation flows through
//!    [`CanonicalBytes::new()`], which normalises integral floats and emits
//!    RFC 8785 bytes. Two semantically equal constraint values therefore
//!    always hash to the same [`ContentDigest`].
//!
//! 3. **Findings are data, misuse is an error.** Validation findings are
//!    [`ProcessingMessage`]s appended to a [`ProcessingReport`]; builder
//!    misuse is a [`ConfigurationError`] returned at the call site.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `jsv-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod bundle;
pub mod canonical;
pub mod dictionary;
pub mod digest;
pub mod error;
pub mod json;
pub mod message;
pub mod node;
pub mod pointer;
pub mod report;

// Re-export primary types for ergonomic imports.
pub use bundle::MessageBundle;
pub use canonical::CanonicalBytes;
pub use dictionary::{Dictionary, DictionaryBuilder};
pub use digest::{sha256_digest, ContentDigest};
pub use error::{CanonicalizationError, ConfigurationError};
pub use message::{LogLevel, ProcessingMessage};
pub use node::NodeType;
pub use pointer::JsonPointer;
pub use report::ProcessingReport;
