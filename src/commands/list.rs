use clap::Args;
use serde::Serialize;

use super::registry::CommandEntry;
use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct ListArgs {
    /// Show a single command (slash-delimited path, e.g. config/show)
    pub path: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListOutput {
    pub command: &'static str,
    pub commands: Vec<CommandEntry>,
}

pub fn run(args: ListArgs, global: &GlobalArgs) -> CmdResult<ListOutput> {
    let commands = match args.path.as_deref() {
        Some(path) => {
            let entry = global.registry.find(path).ok_or_else(|| {
                cmdsmith::Error::validation_invalid_argument(
                    "path",
                    format!("Unknown command '{}'", path),
                    Some(path.to_string()),
                    Some(
                        global
                            .registry
                            .entries()
                            .iter()
                            .map(|e| e.name.clone())
                            .collect(),
                    ),
                )
            })?;
            vec![entry.clone()]
        }
        None => global.registry.entries().to_vec(),
    };

    Ok((
        ListOutput {
            command: "list",
            commands,
        },
        0,
    ))
}
