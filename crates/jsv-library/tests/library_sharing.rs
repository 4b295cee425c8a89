//! A frozen library shared across threads: lookups, cache reuse, and
//! isolation from builders derived from it.

use std::sync::Arc;

use jsv_core::{ConfigurationError, NodeType, ProcessingReport};
use jsv_library::{
    FormatAttribute, FullData, Keyword, KeywordValidator, Library, LibraryBuilder,
    ValidationContext,
};
use serde_json::{json, Value};

struct Noop;

impl KeywordValidator for Noop {
    fn validate(&self, _: &dyn ValidationContext, _: &FullData<'_>, _: &mut ProcessingReport) {}
}

struct NonEmpty;

impl FormatAttribute for NonEmpty {
    fn supported_types(&self) -> &[NodeType] {
        &[NodeType::String]
    }

    fn is_valid(&self, instance: &Value) -> bool {
        instance.as_str().is_some_and(|s| !s.is_empty())
    }
}

fn sample_library() -> Library {
    let mut builder = LibraryBuilder::new();
    for name in ["maxItems", "minItems"] {
        builder.add_keyword(
            Keyword::builder(name)
                .with_type_only_syntax_checker(&[NodeType::Integer])
                .with_simple_digester()
                .with_validator(|_: &Value| Ok(Noop))
                .build()
                .unwrap(),
        );
    }
    builder
        .add_format_attribute("non-empty", Some(Arc::new(NonEmpty)))
        .unwrap();
    builder.freeze()
}

#[test]
fn shared_library_builds_each_constraint_once() {
    let lib = sample_library();
    std::thread::scope(|s| {
        for i in 0..6 {
            let lib = &lib;
            s.spawn(move || {
                let schema = json!({"minItems": i % 2, "maxItems": 10});
                let schema = schema.as_object().unwrap();
                for keyword in lib.keyword_names() {
                    assert!(lib.validator(keyword, schema).unwrap().is_some());
                }
            });
        }
    });
    // minItems 0, minItems 1, maxItems 10
    assert_eq!(lib.cache().len(), 3);
    let stats = lib.cache().stats();
    assert_eq!(stats.hits + stats.misses, 12);
}

#[test]
fn thawed_copy_gets_its_own_cache() {
    let lib = sample_library();
    let schema = json!({"minItems": 1});
    lib.validator("minItems", schema.as_object().unwrap()).unwrap();

    let copy = lib.thaw().freeze();
    assert!(copy.cache().is_empty());
    assert_eq!(lib.cache().len(), 1);
}

#[test]
fn configuration_errors_render_from_bundle() {
    let mut builder = Library::builder();
    let err = builder.add_format_attribute("email", None).err().unwrap();
    assert_eq!(err, ConfigurationError::NullAttribute);
    let msg = err.to_message(jsv_core::MessageBundle::defaults());
    assert_eq!(msg.get("key"), Some(&json!("NULL_ATTRIBUTE")));
    assert!(builder.freeze().format_attributes().is_empty());
}

#[test]
fn format_attribute_lookup() {
    let lib = sample_library();
    let attr = lib.format_attribute("non-empty").unwrap();
    assert!(attr.applies_to(&json!("x")));
    assert!(!attr.is_valid(&json!("")));
    assert!(lib.format_attribute("email").is_none());
}
