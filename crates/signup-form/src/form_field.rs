// File: src/form_field.rs
// Purpose: HTML5 and data-validate attributes derived from the schema

use serde_json::{Map, Value};

use crate::field::Field;
use crate::rules::{FieldRule, Rule, Schema};

/// Attributes of one input that describe its rules to the browser.
///
/// The form is rendered with `novalidate`, so these document the rules for
/// client-side tooling without letting the browser pre-empt the inline
/// messages.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldAttrs {
    pub input_type: &'static str,
    pub required: bool,
    pub min_length: Option<usize>,
    pub input_mode: Option<&'static str>,
    /// JSON for the `data-validate` attribute
    pub data_validate: String,
}

impl FieldAttrs {
    pub fn from_rule(rule: &FieldRule) -> Self {
        let field = rule.field;
        let mut required = false;
        let mut min_length = None;
        let mut input_mode = None;
        let mut json = Map::new();

        for r in &rule.rules {
            match r {
                Rule::Required => {
                    required = true;
                    json.insert("required".into(), Value::Bool(true));
                }
                Rule::Email => {
                    json.insert("email".into(), Value::Bool(true));
                }
                Rule::MinChars(n) => {
                    min_length = Some(*n);
                    json.insert("minLength".into(), Value::from(*n));
                }
                Rule::Phone(policy) => {
                    required = true;
                    input_mode = Some("tel");
                    json.insert("phone".into(), Value::from(policy.as_str()));
                }
                Rule::MustAccept => {
                    required = true;
                    json.insert("mustAccept".into(), Value::Bool(true));
                }
            }
        }

        Self {
            input_type: field.input_type(),
            required,
            min_length,
            input_mode,
            data_validate: Value::Object(json).to_string(),
        }
    }

    /// Attributes for `field`, or just its input type when the schema has no rule for it
    pub fn for_field(schema: &Schema, field: Field) -> Self {
        schema
            .rules_for(field)
            .map(Self::from_rule)
            .unwrap_or_else(|| Self {
                input_type: field.input_type(),
                required: false,
                min_length: None,
                input_mode: None,
                data_validate: "{}".to_string(),
            })
    }

    /// Adds the cross-field rule aimed at `field`, e.g. `{"equalsField":"password"}`
    pub fn with_cross_field(mut self, schema: &Schema, field: Field) -> Self {
        let Some(rule) = schema.cross_field_rules().iter().find(|r| r.target == field) else {
            return self;
        };
        let other = if rule.left == field { rule.right } else { rule.left };

        if let Ok(Value::Object(mut json)) = serde_json::from_str::<Value>(&self.data_validate) {
            json.insert("equalsField".into(), Value::from(other.key()));
            self.data_validate = Value::Object(json).to_string();
        }
        self
    }
}
