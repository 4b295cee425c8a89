//! # Message Bundle
//!
//! Maps template keys to human-readable text. Templates reference context
//! fields with `{name}` placeholders:
//!
//! ```text
//! "validation.minimum" => "numeric instance is lower than the required minimum (minimum: {minimum}, found: {found})"
//! ```
//!
//! String fields are substituted verbatim; any other value is substituted
//! as compact JSON. A key without a template renders as the key itself, and
//! a placeholder without a matching field is left in place, so a missing
//! translation degrades to something still readable.

use std::sync::OnceLock;

use serde_json::{Map, Value};

use crate::dictionary::{Dictionary, DictionaryBuilder};

/// Default English templates.
const DEFAULT_TEMPLATES: &[(&str, &str)] = &[
    // Configuration errors
    ("NULL_NAME", "keyword name must not be empty"),
    ("NULL_ATTRIBUTE", "format attribute must not be null"),
    ("NULL_FORMAT", "format attribute name must not be empty"),
    ("NULL_SYNTAX_CHECKER", "keyword \"{keyword}\" has no syntax checker"),
    ("NULL_DIGESTER", "keyword \"{keyword}\" has no digester"),
    // Schema syntax
    ("syntax.notASchema", "value is not a JSON object and cannot be a schema (found: {found})"),
    ("syntax.unknownKeyword", "keyword \"{keyword}\" is not recognized and was ignored"),
    ("syntax.incorrectType", "value of keyword \"{keyword}\" has incorrect type (found: {found}, expected: {expected})"),
    ("syntax.incorrectElementType", "element {index} of keyword \"{keyword}\" has incorrect type (found: {found}, expected: {expected})"),
    ("syntax.emptyArray", "array for keyword \"{keyword}\" must not be empty"),
    ("syntax.elementsNotUnique", "array elements of keyword \"{keyword}\" must be unique"),
    ("syntax.negativeInteger", "value of keyword \"{keyword}\" must not be negative (found: {found})"),
    ("syntax.unknownType", "unknown primitive type \"{found}\" in keyword \"{keyword}\" (valid: {valid})"),
    ("syntax.invalidRegex", "value of keyword \"{keyword}\" is not a valid regular expression: {reason}"),
    // Instance validation
    ("validation.digestFailure", "cannot compute digest for keyword \"{keyword}\": {reason}"),
    ("validation.buildFailure", "cannot build validator for keyword \"{keyword}\": {reason}"),
    ("validation.incorrectType", "instance type ({found}) does not match any allowed primitive type (allowed: {expected})"),
    ("validation.enum", "instance value ({value}) not found in enum (possible values: {enum})"),
    ("validation.minimum", "numeric instance is lower than the required minimum (minimum: {minimum}, found: {found})"),
    ("validation.maximum", "numeric instance is greater than the required maximum (maximum: {maximum}, found: {found})"),
    ("validation.minLength", "string is too short ({found} chars), requires at least {minLength} chars"),
    ("validation.maxLength", "string is too long ({found} chars), maximum allowed is {maxLength}"),
    ("validation.minItems", "array is too short: must have at least {minItems} elements but instance has {found} elements"),
    ("validation.maxItems", "array is too long: must have at most {maxItems} elements but instance has {found} elements"),
    ("validation.pattern", "string does not match pattern \"{regex}\""),
    ("validation.required", "object has missing required properties ({missing})"),
    ("validation.format.unsupported", "format attribute \"{attribute}\" not supported"),
    ("validation.format.invalid", "string {value} is invalid against requested format \"{attribute}\""),
];

static DEFAULTS: OnceLock<MessageBundle> = OnceLock::new();

/// Template key → text.
#[derive(Debug, Clone, Default)]
pub struct MessageBundle {
    templates: Dictionary<String>,
}

impl MessageBundle {
    /// Wrap a template dictionary.
    pub fn from_dictionary(templates: Dictionary<String>) -> Self {
        Self { templates }
    }

    /// The process-wide default bundle.
    pub fn defaults() -> &'static MessageBundle {
        DEFAULTS.get_or_init(|| {
            let mut builder = DictionaryBuilder::new();
            for (key, text) in DEFAULT_TEMPLATES {
                builder.add_entry(*key, (*text).to_string());
            }
            Self::from_dictionary(builder.freeze())
        })
    }

    /// Copy the templates into a builder, e.g. to override some of them.
    pub fn thaw(&self) -> DictionaryBuilder<String> {
        self.templates.thaw()
    }

    /// The raw template for `key`.
    pub fn template(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(String::as_str)
    }

    /// Render `key` with `context`.
    pub fn render(&self, key: &str, context: &Map<String, Value>) -> String {
        match self.template(key) {
            Some(template) => substitute(template, context),
            None => key.to_string(),
        }
    }
}

fn substitute(template: &str, context: &Map<String, Value>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match context.get(name) {
                    Some(Value::String(s)) => out.push_str(s),
                    Some(other) => out.push_str(&other.to_string()),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
