//! # Annotation Merger
//!
//! Combines what was inferred from the command tree with the optional
//! human-supplied [`CommandAnnotation`] for the same path. Annotation values
//! win over inferred ones. Annotation keys that match nothing are ignored
//! with a warning.

use crate::adapter::{Occurrence, ParameterNode};
use crate::assembler::describable_parameters;
use crate::inference::{infer_type, InferredType};
use crate::paths::ResolvedCommand;
use crate::types::{ArgDescriptor, ArgType, CommandAnnotation, CommandDescriptor};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

/// Build the document entry for one resolved leaf command
///
/// # Arguments
///
/// * `resolved` - The leaf command and its path
/// * `annotation` - The annotation registered for exactly that path, if any
///
/// # Returns
///
/// The command descriptor with arguments in document order. Stream
/// descriptors and examples come from the annotation alone.
pub fn merge_command(
    resolved: &ResolvedCommand<'_>,
    annotation: Option<&CommandAnnotation>,
) -> CommandDescriptor {
    let parameters = describable_parameters(resolved.node);

    if let Some(annotation) = annotation {
        warn_unmatched(&resolved.path, &parameters, annotation);
    }

    let args = parameters
        .iter()
        .map(|param| merge_argument(param, annotation))
        .collect();

    let annotation = annotation.cloned().unwrap_or_default();
    CommandDescriptor {
        description: first_line(resolved.node.description.as_deref())
            .unwrap_or_default()
            .to_string(),
        args,
        stdin: annotation.stdin,
        stdout: annotation.stdout,
        examples: (!annotation.examples.is_empty()).then_some(annotation.examples),
    }
}

/// Build the document entry for one parameter
///
/// A positional without a default is required even when the framework did not
/// declare it so. Options are required only when declared.
pub fn merge_argument(
    param: &ParameterNode,
    annotation: Option<&CommandAnnotation>,
) -> ArgDescriptor {
    let override_type = annotation
        .and_then(|a| lookup(&a.arg_types, param))
        .copied();
    let inferred = infer_type(param, override_type);

    let description = annotation
        .and_then(|a| lookup(&a.arg_descriptions, param))
        .map(String::as_str)
        .or_else(|| first_line(param.help.as_deref()))
        .unwrap_or_default()
        .to_string();

    ArgDescriptor {
        name: param.display_name.clone(),
        arg_type: inferred.arg_type(),
        description,
        required: is_required(param),
        default: default_value(param, &inferred),
        values: inferred.values().map(<[String]>::to_vec),
    }
}

fn is_required(param: &ParameterNode) -> bool {
    param.required || (param.is_positional() && param.defaults.is_empty())
}

/// First line of a help text, with surrounding whitespace removed
///
/// Returns `None` for absent or blank text.
pub fn first_line(text: Option<&str>) -> Option<&str> {
    text.and_then(|text| text.trim().lines().next())
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// The annotation key that addresses a parameter
///
/// Keys are framework ids first (`fmt` for `--format`), then the display name
/// without its leading dashes.
fn lookup<'a, V>(map: &'a BTreeMap<String, V>, param: &ParameterNode) -> Option<&'a V> {
    map.get(&param.id)
        .or_else(|| map.get(param.display_name.trim_start_matches('-')))
}

fn warn_unmatched(path: &str, parameters: &[&ParameterNode], annotation: &CommandAnnotation) {
    let known: HashSet<&str> = parameters
        .iter()
        .flat_map(|param| [param.id.as_str(), param.display_name.trim_start_matches('-')])
        .collect();

    let keys = annotation
        .arg_types
        .keys()
        .chain(annotation.arg_descriptions.keys());
    for key in keys {
        if !known.contains(key.as_str()) {
            tracing::warn!(
                command = path,
                parameter = %key,
                "annotation names a parameter the command does not have; ignoring it"
            );
        }
    }
}

/// The declared default as a JSON value, or `None` when nothing is worth emitting
///
/// The implicit `false` of a presence flag and `0` of a counter are skipped.
fn default_value(param: &ParameterNode, inferred: &InferredType) -> Option<Value> {
    let implicit = match param.occurrence {
        Occurrence::Flag => Some("false"),
        Occurrence::Count => Some("0"),
        _ => None,
    };

    match param.defaults.as_slice() {
        [] => None,
        [single] if Some(single.as_str()) == implicit => None,
        [single] if inferred.arg_type() != ArgType::Array => {
            Some(coerce_literal(single, inferred.arg_type()))
        }
        many => Some(Value::Array(many.iter().cloned().map(Value::String).collect())),
    }
}

/// Convert a default literal into the JSON type matching the argument type
///
/// Literals that do not parse are kept as strings.
fn coerce_literal(literal: &str, arg_type: ArgType) -> Value {
    let coerced = match arg_type {
        ArgType::Integer => literal.parse::<i64>().ok().map(Value::from),
        ArgType::Number => literal
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number),
        ArgType::Boolean => literal.parse::<bool>().ok().map(Value::Bool),
        _ => None,
    };
    coerced.unwrap_or_else(|| Value::String(literal.to_string()))
}
