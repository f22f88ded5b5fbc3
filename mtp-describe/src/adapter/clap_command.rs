//! Adapter for `clap::Command` trees
//!
//! The command is cloned and built before it is read, so that arguments marked
//! `global` appear on every subcommand and the automatic `--help`/`--version`
//! switches are present (and can be recognised as reserved).

use super::{
    CommandNode, CommandTreeAdapter, Occurrence, ParameterKind, ParameterNode, ValueMarker,
};
use crate::error::AdapterError;
use clap::{Arg, ArgAction, Command};
use std::any::TypeId;
use std::path::PathBuf;

/// Name of the help subcommand clap generates for every group
const GENERATED_HELP_SUBCOMMAND: &str = "help";

impl CommandTreeAdapter for Command {
    fn to_command_tree(&self) -> Result<CommandNode, AdapterError> {
        let mut built = self.clone();
        built.build();
        convert_command(&built, None)
    }
}

/// Convert one built command and its subtree
fn convert_command(cmd: &Command, parent: Option<&str>) -> Result<CommandNode, AdapterError> {
    let name = cmd.get_name();
    if name.is_empty() {
        return Err(AdapterError::EmptyCommandName {
            parent: parent.unwrap_or_default().to_string(),
        });
    }

    let parameters = cmd
        .get_arguments()
        .map(|arg| convert_argument(arg, name))
        .collect::<Result<Vec<_>, _>>()?;

    let children = cmd
        .get_subcommands()
        .filter(|child| !is_generated_help(cmd, child))
        .map(|child| convert_command(child, Some(name)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CommandNode {
        name: name.to_string(),
        description: cmd
            .get_about()
            .or_else(|| cmd.get_long_about())
            .map(ToString::to_string),
        hidden: cmd.is_hide_set(),
        parameters,
        children,
    })
}

fn is_generated_help(parent: &Command, child: &Command) -> bool {
    !parent.is_disable_help_subcommand_set() && child.get_name() == GENERATED_HELP_SUBCOMMAND
}

/// Convert one argument declaration
fn convert_argument(arg: &Arg, command: &str) -> Result<ParameterNode, AdapterError> {
    let id = arg.get_id().as_str();
    if id.is_empty() {
        return Err(AdapterError::EmptyParameterId {
            command: command.to_string(),
        });
    }

    let (occurrence, reserved) = occurrence_of(arg, command)?;
    let value = value_marker_of(arg);
    let choices = match (occurrence, value) {
        (Occurrence::Flag | Occurrence::Count, _) | (_, ValueMarker::Boolean) => None,
        _ => choices_of(arg),
    };

    let kind = if arg.is_positional() {
        ParameterKind::Positional
    } else {
        ParameterKind::Option
    };

    Ok(ParameterNode {
        id: id.to_string(),
        display_name: display_name_of(arg),
        kind,
        help: arg
            .get_help()
            .or_else(|| arg.get_long_help())
            .map(ToString::to_string),
        value,
        occurrence,
        choices,
        hidden: arg.is_hide_set(),
        required: arg.is_required_set(),
        defaults: arg
            .get_default_values()
            .iter()
            .map(|value| value.to_string_lossy().into_owned())
            .collect(),
        reserved,
    })
}

/// Map the argument action onto an occurrence marker
///
/// The second element is true for clap's own help and version switches.
fn occurrence_of(arg: &Arg, command: &str) -> Result<(Occurrence, bool), AdapterError> {
    match arg.get_action() {
        ArgAction::SetTrue | ArgAction::SetFalse => Ok((Occurrence::Flag, false)),
        ArgAction::Count => Ok((Occurrence::Count, false)),
        ArgAction::Append => Ok((Occurrence::Multiple, false)),
        ArgAction::Set if takes_many_values(arg) => Ok((Occurrence::Multiple, false)),
        ArgAction::Set => Ok((Occurrence::Single, false)),
        ArgAction::Help | ArgAction::HelpShort | ArgAction::HelpLong | ArgAction::Version => {
            Ok((Occurrence::Flag, true))
        }
        other => Err(AdapterError::UnsupportedAction {
            command: command.to_string(),
            parameter: arg.get_id().to_string(),
            action: format!("{other:?}"),
        }),
    }
}

/// True for `num_args(1..)`, `num_args(0..)` and fixed counts above one
fn takes_many_values(arg: &Arg) -> bool {
    arg.get_num_args()
        .is_some_and(|range| range.max_values() > 1)
}

/// Classify the output type of the argument's value parser
fn value_marker_of(arg: &Arg) -> ValueMarker {
    let output = arg.get_value_parser().type_id();
    if integer_types().iter().any(|id| output == *id) {
        ValueMarker::Integer
    } else if float_types().iter().any(|id| output == *id) {
        ValueMarker::Float
    } else if output == TypeId::of::<bool>() {
        ValueMarker::Boolean
    } else if output == TypeId::of::<PathBuf>() {
        ValueMarker::Path
    } else {
        ValueMarker::Text
    }
}

fn integer_types() -> [TypeId; 12] {
    [
        TypeId::of::<i8>(),
        TypeId::of::<i16>(),
        TypeId::of::<i32>(),
        TypeId::of::<i64>(),
        TypeId::of::<i128>(),
        TypeId::of::<isize>(),
        TypeId::of::<u8>(),
        TypeId::of::<u16>(),
        TypeId::of::<u32>(),
        TypeId::of::<u64>(),
        TypeId::of::<u128>(),
        TypeId::of::<usize>(),
    ]
}

fn float_types() -> [TypeId; 2] {
    [TypeId::of::<f32>(), TypeId::of::<f64>()]
}

/// Visible possible values, if the value parser declares a closed set
fn choices_of(arg: &Arg) -> Option<Vec<String>> {
    let choices: Vec<String> = arg
        .get_possible_values()
        .iter()
        .filter(|value| !value.is_hide_set())
        .map(|value| value.get_name().to_string())
        .collect();
    (!choices.is_empty()).then_some(choices)
}

/// `--long` when available, then `-s`, then the bare id
fn display_name_of(arg: &Arg) -> String {
    let id = arg.get_id().as_str();
    if arg.is_positional() {
        return id.to_string();
    }
    arg.get_long()
        .map(|long| format!("--{long}"))
        .or_else(|| arg.get_short().map(|short| format!("-{short}")))
        .unwrap_or_else(|| id.to_string())
}
