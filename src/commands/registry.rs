//! Typed registry of the commands this binary exposes.
//!
//! Built once in `main` from the clap command tree and passed down through
//! [`GlobalArgs`](super::GlobalArgs); nothing registers itself at startup.

use clap::Command;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CommandEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subcommands: Vec<CommandEntry>,
}

impl CommandEntry {
    fn from_command(cmd: &Command) -> Self {
        Self {
            name: cmd.get_name().to_string(),
            about: cmd.get_about().map(|about| about.to_string()),
            aliases: cmd.get_visible_aliases().map(str::to_string).collect(),
            subcommands: visible_subcommands(cmd),
        }
    }
}

fn visible_subcommands(cmd: &Command) -> Vec<CommandEntry> {
    cmd.get_subcommands()
        .filter(|sub| !sub.is_hide_set())
        .map(CommandEntry::from_command)
        .collect()
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    pub fn from_command(root: &Command) -> Self {
        Self {
            entries: visible_subcommands(root),
        }
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    /// Look up a command by slash-delimited path, e.g. `config/show`.
    /// Aliases match at every level.
    pub fn find(&self, path: &str) -> Option<&CommandEntry> {
        let mut level = self.entries.as_slice();
        let mut found = None;

        for segment in path.split('/').filter(|s| !s.is_empty()) {
            let entry = level
                .iter()
                .find(|e| e.name == segment || e.aliases.iter().any(|a| a == segment))?;
            level = entry.subcommands.as_slice();
            found = Some(entry);
        }

        found
    }
}
