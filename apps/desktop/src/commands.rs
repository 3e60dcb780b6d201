//! Line commands typed at the interactive prompt.

use anyhow::{anyhow, bail, Result};
use wizard_core::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Set { field: String, value: String },
    Toggle {
        field: String,
        value: String,
        included: bool,
    },
    Show,
    Options,
    Print,
    Share,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  continue | back | submit | restart   move between screens
  set <field> <value>                  e.g. set problem Students disengage
  add <field> <value>                  e.g. add dataSources LMS data
  remove <field> <value>               e.g. remove feltenPrinciples inquiry
  show                                 redraw the current screen
  options                              list the choices for each field
  print                                export the summary to a text file
  share                                share the summary link
  help | quit";

pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (verb, rest) = split_word(line);
    let command = match verb.to_ascii_lowercase().as_str() {
        "continue" | "start" => Command::Intent(Intent::Continue),
        "back" => Command::Intent(Intent::Back),
        "submit" => Command::Intent(Intent::Submit),
        "restart" => Command::Intent(Intent::Restart),
        "set" => {
            let (field, value) = field_and_value(verb, rest)?;
            Command::Set { field, value }
        }
        "add" | "remove" => {
            let (field, value) = field_and_value(verb, rest)?;
            if value.is_empty() {
                bail!("'{verb}' needs a value, e.g. '{verb} dataSources LMS data'");
            }
            Command::Toggle {
                field,
                value,
                included: verb.eq_ignore_ascii_case("add"),
            }
        }
        "show" => Command::Show,
        "options" => Command::Options,
        "print" | "download" => Command::Print,
        "share" => Command::Share,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "" => bail!("empty command; type 'help' for a list"),
        other => bail!("unknown command '{other}'; type 'help' for a list"),
    };
    Ok(command)
}

fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

fn field_and_value(verb: &str, rest: &str) -> Result<(String, String)> {
    let (field, value) = split_word(rest);
    if field.is_empty() {
        return Err(anyhow!("'{verb}' needs a field name"));
    }
    Ok((field.to_string(), value.to_string()))
}
