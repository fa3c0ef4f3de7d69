use clap::Args;
use serde::Serialize;

use cmdsmith::defaults::{self, Defaults};
use cmdsmith::generate::{self, AddOutcome, AddRequest};
use cmdsmith::scaffold::ScaffoldOptions;
use cmdsmith::{environment, log_status};

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct AddArgs {
    /// Sub-command name; dashes and underscores fold into camelCase
    pub command: Option<String>,

    /// Target package name (accepted, does not change generated names)
    #[arg(long, short = 't')]
    pub package: Option<String>,

    /// Parent command path, slash-delimited (e.g. admin/users)
    #[arg(long, short = 'p', default_value = "")]
    pub parent: String,

    /// Overwrite the generated file if it already exists
    #[arg(long)]
    pub force: bool,

    /// Derive names and render the template without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOutput {
    pub command: &'static str,
    #[serde(flatten)]
    pub outcome: AddOutcome,
}

pub fn run(args: AddArgs, _global: &GlobalArgs) -> CmdResult<AddOutput> {
    let request = AddRequest {
        command: args.command,
        package: args.package,
        parent: args.parent,
        options: ScaffoldOptions {
            force: args.force,
            dry_run: args.dry_run,
        },
    };

    // A blank name must fail as a validation error even outside a module.
    if let Some(name) = request.command.as_deref() {
        cmdsmith::command_spec::validate_name(name)?;
    }

    let defaults = load_defaults();
    let working_dir = environment::working_dir()?;
    let outcome = generate::add(&request, &working_dir, &defaults)?;

    Ok((
        AddOutput {
            command: "add",
            outcome,
        },
        0,
    ))
}

/// Config defaults for generation. A broken cmdsmith.json is reported and
/// the built-in defaults are used instead.
fn load_defaults() -> Defaults {
    match defaults::load_config_from_file() {
        Ok(config) => config.defaults,
        Err(err) => {
            log_status!("config", "Ignoring cmdsmith.json: {}", err);
            defaults::builtin_defaults()
        }
    }
}
