//! # Type Inference Engine
//!
//! Recovers the semantic type a tool author already communicated through the
//! framework's own declarations. Inference is an ordered table of rules,
//! evaluated first-match-wins, preceded by an explicit annotation override.
//!
//! | Order | Rule | Result |
//! |-------|------|--------|
//! | 1 | `arg_types` override | the override |
//! | 2 | presence flag | `boolean` |
//! | 3 | closed choice set | `enum` + values |
//! | 4 | repeated or variadic | `array` |
//! | 5 | integer marker | `integer` |
//! | 6 | float marker | `number` |
//! | 7 | boolean marker | `boolean` |
//! | 8 | path marker | `path` |
//! | 9 | occurrence counter | `integer` |
//! | 10 | anything else | `string` |

use crate::adapter::{Occurrence, ParameterNode, ValueMarker};
use crate::types::ArgType;

/// The inferred semantic type of one parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferredType {
    String,
    Integer,
    Number,
    Boolean,
    /// Closed set of literals, in declaration order
    Enum(Vec<String>),
    Array,
    Path,
}

impl InferredType {
    /// The wire type tag
    pub fn arg_type(&self) -> ArgType {
        match self {
            InferredType::String => ArgType::String,
            InferredType::Integer => ArgType::Integer,
            InferredType::Number => ArgType::Number,
            InferredType::Boolean => ArgType::Boolean,
            InferredType::Enum(_) => ArgType::Enum,
            InferredType::Array => ArgType::Array,
            InferredType::Path => ArgType::Path,
        }
    }

    /// Allowed values, only for enums
    pub fn values(&self) -> Option<&[String]> {
        match self {
            InferredType::Enum(values) => Some(values),
            _ => None,
        }
    }

    /// Build the inferred type for an override tag
    ///
    /// An `enum` override keeps the parameter's declared choices, if any.
    fn from_override(arg_type: ArgType, param: &ParameterNode) -> Self {
        match arg_type {
            ArgType::String => InferredType::String,
            ArgType::Integer => InferredType::Integer,
            ArgType::Number => InferredType::Number,
            ArgType::Boolean => InferredType::Boolean,
            ArgType::Enum => InferredType::Enum(param.choices.clone().unwrap_or_default()),
            ArgType::Array => InferredType::Array,
            ArgType::Path => InferredType::Path,
        }
    }
}

/// One entry of the inference table
pub struct InferenceRule {
    /// Short name used in trace output and tests
    pub name: &'static str,
    pub infer: fn(&ParameterNode) -> Option<InferredType>,
}

/// Rules 2 through 9, in precedence order
pub const INFERENCE_RULES: &[InferenceRule] = &[
    InferenceRule {
        name: "flag",
        infer: infer_flag,
    },
    InferenceRule {
        name: "choices",
        infer: infer_choices,
    },
    InferenceRule {
        name: "multiple",
        infer: infer_multiple,
    },
    InferenceRule {
        name: "integer",
        infer: infer_integer,
    },
    InferenceRule {
        name: "float",
        infer: infer_float,
    },
    InferenceRule {
        name: "boolean",
        infer: infer_boolean,
    },
    InferenceRule {
        name: "path",
        infer: infer_path,
    },
    InferenceRule {
        name: "count",
        infer: infer_count,
    },
];

fn infer_flag(param: &ParameterNode) -> Option<InferredType> {
    (param.occurrence == Occurrence::Flag).then_some(InferredType::Boolean)
}

fn infer_choices(param: &ParameterNode) -> Option<InferredType> {
    param.choices.clone().map(InferredType::Enum)
}

fn infer_multiple(param: &ParameterNode) -> Option<InferredType> {
    (param.occurrence == Occurrence::Multiple).then_some(InferredType::Array)
}

fn infer_integer(param: &ParameterNode) -> Option<InferredType> {
    (param.value == ValueMarker::Integer).then_some(InferredType::Integer)
}

fn infer_float(param: &ParameterNode) -> Option<InferredType> {
    (param.value == ValueMarker::Float).then_some(InferredType::Number)
}

fn infer_boolean(param: &ParameterNode) -> Option<InferredType> {
    (param.value == ValueMarker::Boolean).then_some(InferredType::Boolean)
}

fn infer_path(param: &ParameterNode) -> Option<InferredType> {
    (param.value == ValueMarker::Path).then_some(InferredType::Path)
}

fn infer_count(param: &ParameterNode) -> Option<InferredType> {
    (param.occurrence == Occurrence::Count).then_some(InferredType::Integer)
}

/// Infer the semantic type of a parameter
///
/// `override_type` is the `arg_types` annotation entry for this parameter, if
/// any; it always wins.
pub fn infer_type(param: &ParameterNode, override_type: Option<ArgType>) -> InferredType {
    if let Some(arg_type) = override_type {
        tracing::trace!(parameter = %param.id, %arg_type, "type taken from annotation");
        return InferredType::from_override(arg_type, param);
    }

    for rule in INFERENCE_RULES {
        if let Some(inferred) = (rule.infer)(param) {
            tracing::trace!(parameter = %param.id, rule = rule.name, "type inferred");
            return inferred;
        }
    }

    InferredType::String
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn text_option() -> ParameterNode {
        ParameterNode::option("value", "--value")
    }

    #[rstest]
    #[case::flag(ParameterNode::flag("verbose", "--verbose"), InferredType::Boolean)]
    #[case::choices(
        text_option().with_choices(["json", "yaml"]),
        InferredType::Enum(vec!["json".to_string(), "yaml".to_string()])
    )]
    #[case::multiple(text_option().with_occurrence(Occurrence::Multiple), InferredType::Array)]
    #[case::variadic_positional(
        ParameterNode::positional("files").with_occurrence(Occurrence::Multiple),
        InferredType::Array
    )]
    #[case::integer(text_option().with_value(ValueMarker::Integer), InferredType::Integer)]
    #[case::float(text_option().with_value(ValueMarker::Float), InferredType::Number)]
    #[case::boolean_value(text_option().with_value(ValueMarker::Boolean), InferredType::Boolean)]
    #[case::path(text_option().with_value(ValueMarker::Path), InferredType::Path)]
    #[case::count(
        ParameterNode::option("verbose", "-v").with_occurrence(Occurrence::Count),
        InferredType::Integer
    )]
    #[case::free_text(text_option(), InferredType::String)]
    fn test_inference_table(#[case] param: ParameterNode, #[case] expected: InferredType) {
        assert_eq!(infer_type(&param, None), expected);
    }

    #[test]
    fn test_override_always_wins() {
        let param = text_option().with_value(ValueMarker::Integer);
        assert_eq!(
            infer_type(&param, Some(ArgType::String)),
            InferredType::String
        );

        let flag = ParameterNode::flag("verbose", "--verbose");
        assert_eq!(
            infer_type(&flag, Some(ArgType::Integer)),
            InferredType::Integer
        );
    }

    #[test]
    fn test_flag_beats_choices() {
        let param = ParameterNode::flag("x", "--x").with_choices(["a"]);
        assert_eq!(infer_type(&param, None), InferredType::Boolean);
    }

    #[test]
    fn test_choices_beat_multiple() {
        let param = text_option()
            .with_choices(["red", "green"])
            .with_occurrence(Occurrence::Multiple);
        assert_eq!(infer_type(&param, None).arg_type(), ArgType::Enum);
    }

    #[test]
    fn test_multiple_beats_value_marker() {
        let param = text_option()
            .with_value(ValueMarker::Integer)
            .with_occurrence(Occurrence::Multiple);
        assert_eq!(infer_type(&param, None), InferredType::Array);
    }

    #[test]
    fn test_enum_override_keeps_declared_choices() {
        let param = text_option().with_choices(["a", "b"]);
        assert_eq!(
            infer_type(&param, Some(ArgType::Enum)).values(),
            Some(&["a".to_string(), "b".to_string()][..])
        );
    }

    #[test]
    fn test_enum_override_without_choices_has_empty_values() {
        assert_eq!(
            infer_type(&text_option(), Some(ArgType::Enum)),
            InferredType::Enum(Vec::new())
        );
    }

    #[test]
    fn test_values_only_for_enum() {
        assert!(InferredType::Integer.values().is_none());
    }

    #[test]
    fn test_rule_order_is_stable() {
        let names: Vec<&str> = INFERENCE_RULES.iter().map(|rule| rule.name).collect();
        assert_eq!(
            names.join(" "),
            "flag choices multiple integer float boolean path count"
        );
    }
}
