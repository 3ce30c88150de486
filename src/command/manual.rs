use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display as DisplayDerive, EnumIter as EnumIterDerive, EnumString};

use crate::core::types::{EntityType, GlobalCommand, TypeHelpCommand};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, DisplayDerive, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ManualTopic {
    General,
    Event,
    Holidays,
    Export,
    Import,
    Clear,
    Config,
    Log,
    Man,
    Date,
    Colors,
    Icons,
}

impl ManualTopic {
    pub fn try_from(input: &str) -> Result<Self> {
        Self::from_str(input).map_err(|_| {
            Error::Parse(format!(
                "Unsupported manual topic: '{}'. Valid topics: {}",
                input.trim(),
                valid_csv::<ManualTopic>()
            ))
        })
    }
}

#[derive(Debug, Clone)]
pub struct ManualSection {
    title: String,
    body: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ManualPage {
    name: String,
    summary: String,
    sections: Vec<ManualSection>,
}

impl ManualPage {
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_section(
            "NAME",
            &[format!("{} - {}", self.name, self.summary)],
            &mut out,
        );
        for section in &self.sections {
            self.write_section(&section.title, &section.body, &mut out);
        }
        out.trim_end().to_string()
    }

    fn write_section(&self, title: &str, lines: &[String], out: &mut String) {
        out.push_str(&title.to_uppercase());
        out.push('\n');
        for line in lines {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }
}

pub struct ManualPageBuilder {
    name: String,
    summary: String,
    sections: Vec<ManualSection>,
}

impl ManualPageBuilder {
    pub fn new(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: summary.into(),
            sections: Vec::new(),
        }
    }

    pub fn section(mut self, title: &str, body: Vec<String>) -> Self {
        self.sections.push(ManualSection {
            title: title.to_string(),
            body,
        });
        self
    }

    pub fn build(self) -> ManualPage {
        ManualPage {
            name: self.name,
            summary: self.summary,
            sections: self.sections,
        }
    }
}

pub struct ManualCatalog;

impl ManualCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn page_for(&self, topic: Option<&str>) -> Result<ManualPage> {
        let topic = match topic {
            None => ManualTopic::General,
            Some(name) => ManualTopic::try_from(name)?,
        };
        Ok(self.build_page(topic))
    }

    pub fn topics(&self) -> Vec<String> {
        ManualTopic::iter().map(|t| t.to_string()).collect()
    }

    fn build_page(&self, topic: ManualTopic) -> ManualPage {
        match topic {
            ManualTopic::General => self.general_page(),
            ManualTopic::Event => self.event_page(),
            ManualTopic::Holidays => self.simple_page(
                GlobalCommand::Holidays,
                "Add Dutch public holidays.",
                vec!["holidays".to_string()],
                vec![
                    "Adds this year's and next year's holidays that are still ahead.".to_string(),
                    "Holidays already in the list (same name and date) are skipped.".to_string(),
                ],
            ),
            ManualTopic::Export => self.simple_page(
                GlobalCommand::Export,
                "Write all events to a JSON file.",
                vec!["export".to_string()],
                vec![
                    "Writes exports/lumina-export-YYYYMMDD-HHMMSS.json.".to_string(),
                    "The file can be loaded again with 'import'.".to_string(),
                ],
            ),
            ManualTopic::Import => self.simple_page(
                GlobalCommand::Import,
                "Replace all events with the contents of an export file.",
                vec!["import \"<path>\"".to_string()],
                vec![
                    "The file must hold a JSON list of events.".to_string(),
                    "Nothing changes when the file cannot be read.".to_string(),
                ],
            ),
            ManualTopic::Clear => self.simple_page(
                GlobalCommand::Clear,
                "Remove every event.",
                vec!["clear -y".to_string()],
                vec!["Without -y only a confirmation hint is printed.".to_string()],
            ),
            ManualTopic::Config => self.simple_page(
                GlobalCommand::Config,
                "View or edit configuration values.",
                vec!["config".to_string(), "config <KEY> <value>".to_string()],
                vec![
                    "With no arguments, prints the configuration table.".to_string(),
                    "With a key and a value, validates and saves the new value.".to_string(),
                ],
            ),
            ManualTopic::Log => self.simple_page(
                GlobalCommand::Log,
                "Print the current session log to the console.",
                vec!["log".to_string()],
                vec![
                    "Shows the session log file contents if it exists.".to_string(),
                    "Does not create a log file when one is missing.".to_string(),
                ],
            ),
            ManualTopic::Man => self.simple_page(
                GlobalCommand::Man,
                "Show manual pages for commands and topics.",
                vec!["man [topic]".to_string()],
                vec![
                    format!("Topics: {}", self.topics().join(", ")),
                    "Use 'man' with no topic for the general manual.".to_string(),
                ],
            ),
            ManualTopic::Date => self.type_help_page(TypeHelpCommand::Date),
            ManualTopic::Colors => self.type_help_page(TypeHelpCommand::Colors),
            ManualTopic::Icons => self.type_help_page(TypeHelpCommand::Icons),
        }
    }

    fn general_page(&self) -> ManualPage {
        ManualPageBuilder::new("lumina", "Personal countdown tracker.")
            .section("SYNOPSIS", vec!["<command> [args]".to_string()])
            .section("COMMANDS", general_command_lines())
            .section(
                "TOPICS",
                vec![
                    "Use 'man <topic>' for command-specific details.".to_string(),
                    format!("Available topics: {}", self.topics().join(", ")),
                ],
            )
            .build()
    }

    fn simple_page(
        &self,
        command: GlobalCommand,
        summary: &str,
        synopsis: Vec<String>,
        description: Vec<String>,
    ) -> ManualPage {
        ManualPageBuilder::new(command.to_string(), summary)
            .section("SYNOPSIS", synopsis)
            .section("DESCRIPTION", description)
            .build()
    }

    fn type_help_page(&self, kind: TypeHelpCommand) -> ManualPage {
        ManualPageBuilder::new(kind.to_string(), "Type helper command.")
            .section("SYNOPSIS", vec![kind.to_string()])
            .section("DESCRIPTION", vec![kind.usage()])
            .build()
    }

    fn event_page(&self) -> ManualPage {
        let et = EntityType::Event;
        ManualPageBuilder::new(et.to_string(), "Create and manage countdown events.")
            .section(
                "SYNOPSIS",
                vec![
                    format!("{et}"),
                    format!("{et} \"<name>\" <date> [color] [icon]"),
                    String::new(),
                    format!("mod {et} <position> \"<name>\" <date> [color] [icon]"),
                    String::new(),
                    format!("del {et} <position>"),
                ],
            )
            .section(
                "DESCRIPTION",
                vec![
                    "Events are listed by date, soonest first.".to_string(),
                    "Positions are the numbers in the # column of the list.".to_string(),
                    "Omitted colors and icons come from the config (add) or stay as they were (mod).".to_string(),
                ],
            )
            .section(
                "SEE ALSO",
                vec![
                    TypeHelpCommand::Date.to_string(),
                    TypeHelpCommand::Colors.to_string(),
                    TypeHelpCommand::Icons.to_string(),
                    GlobalCommand::Holidays.to_string(),
                ],
            )
            .build()
    }
}

fn general_command_lines() -> Vec<String> {
    vec![
        "event                                    # List countdowns".to_string(),
        "event \"<name>\" <date> [color] [icon]     # Add an event".to_string(),
        "mod event <pos> \"<name>\" <date> ...      # Modify an event".to_string(),
        "del event <pos>                          # Delete an event".to_string(),
        "clear -y                                 # Remove all events".to_string(),
        "holidays                                 # Add Dutch public holidays".to_string(),
        "export                                   # Write events to a JSON file".to_string(),
        "import \"<path>\"                          # Load events from an export file".to_string(),
        "config [<KEY> <value>]                   # View or edit config".to_string(),
        "log                                      # Print the session log".to_string(),
        "man [topic]                              # Show manual pages".to_string(),
        "date | colors | icons                    # Type helper commands".to_string(),
        "exit                                     # Leave".to_string(),
    ]
}
