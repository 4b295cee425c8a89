//! # jsv-library — Keyword Registry and Validator Cache
//!
//! A schema is a bag of named keywords. For every keyword the engine needs
//! three independent behaviours, each behind a one-method capability trait
//! and looked up by name:
//!
//! - [`SyntaxChecker`]: is the keyword's value well-formed in a schema?
//! - [`Digester`]: what is the canonical form of the constraint it imposes?
//! - [`KeywordValidator`] (built by a [`ValidatorFactory`]): does an
//!   instance satisfy the constraint?
//!
//! A [`Keyword`] bundles the three. A [`LibraryBuilder`] collects keywords
//! and [`FormatAttribute`]s; freezing it yields an immutable [`Library`] that
//! can be shared by any number of concurrent validation runs.
//!
//! ## Validator Reuse
//!
//! Each frozen library owns a [`ValidatorCache`] keyed on
//! `(keyword, digest)`. Constraint values that digest identically share one
//! validator instance, which is only correct because a digester guarantees
//! that equal digests mean equal validation behaviour. Factories receive the
//! digest value, never the raw schema member, so they cannot depend on
//! anything the digest dropped.
//!
//! ## Crate Policy
//!
//! - Depends only on `jsv-core` internally.
//! - Builder misuse returns [`ConfigurationError`]; nothing here panics.
//!
//! [`ConfigurationError`]: jsv_core::ConfigurationError

pub mod cache;
pub mod error;
pub mod format;
pub mod keyword;
pub mod library;

pub use cache::{CacheStats, ValidatorCache};
pub use error::{BuildError, DigestError, KeywordError};
pub use format::FormatAttribute;
pub use keyword::digest::{Digester, SchemaDigest, SimpleDigester};
pub use keyword::syntax::{SyntaxChecker, SyntaxContext, TypeOnlySyntaxChecker};
pub use keyword::validator::{FullData, KeywordValidator, ValidationContext, ValidatorFactory};
pub use keyword::{Keyword, KeywordBuilder};
pub use library::{Library, LibraryBuilder};
