//! # jsv-keywords — Common Keywords and Formats
//!
//! Keyword definitions that are the same in every schema draft the engine
//! targets, and the format attributes the `format` keyword dispatches to.
//!
//! | keyword | applies to | digest |
//! |---------|------------|--------|
//! | `type` | any | sorted type names |
//! | `enum` | any | elements ordered by canonical bytes |
//! | `minimum`, `maximum` | numbers | value |
//! | `minLength`, `maxLength` | strings | value |
//! | `minItems`, `maxItems` | arrays | value |
//! | `pattern` | strings | value |
//! | `required` | objects | sorted names |
//! | `properties` | objects | sorted member names |
//! | `items` | arrays | shape |
//! | `format` | per attribute | value |
//!
//! [`default_library`] is built once per process and shared; callers that
//! want a variant thaw it, edit the builder, and freeze their own.
//!
//! ## Crate Policy
//!
//! - Keywords are plain functions returning [`Keyword`]; nothing here holds
//!   mutable state.
//! - Each keyword ignores instances of types it does not constrain.

pub mod enumeration;
pub mod format;
pub mod formats;
pub mod helpers;
pub mod items;
pub mod numeric;
pub mod object;
pub mod pattern;
pub mod sizes;
pub mod types;

use std::sync::OnceLock;

use jsv_core::ConfigurationError;
use jsv_library::{Keyword, Library, LibraryBuilder};

pub use formats::{common_formats, StringFormat};

/// Every common keyword, in name order.
pub fn common_keywords() -> Result<Vec<Keyword>, ConfigurationError> {
    [
        enumeration::keyword(),
        format::keyword(),
        items::keyword(),
        numeric::maximum(),
        sizes::max_items(),
        sizes::max_length(),
        numeric::minimum(),
        sizes::min_items(),
        sizes::min_length(),
        pattern::keyword(),
        object::properties(),
        object::required(),
        types::keyword(),
    ]
    .into_iter()
    .collect()
}

/// A builder preloaded with every common keyword and format.
pub fn common_builder() -> Result<LibraryBuilder, ConfigurationError> {
    let mut builder = LibraryBuilder::new();
    for keyword in common_keywords()? {
        builder.add_keyword(keyword);
    }
    for (name, attribute) in common_formats() {
        builder.add_format_attribute(name, Some(attribute))?;
    }
    Ok(builder)
}

/// A fresh library with every common keyword and format.
pub fn common_library() -> Result<Library, ConfigurationError> {
    common_builder().map(|builder| builder.freeze())
}

static DEFAULT_LIBRARY: OnceLock<Library> = OnceLock::new();

/// The process-wide common library.
///
/// Falls back to an empty library, logging the cause, in the event that a
/// built-in definition is rejected.
pub fn default_library() -> &'static Library {
    DEFAULT_LIBRARY.get_or_init(|| {
        common_library().unwrap_or_else(|err| {
            tracing::error!(error = %err, "built-in keyword definitions rejected");
            Library::default()
        })
    })
}
