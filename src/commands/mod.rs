pub type CmdResult<T> = cmdsmith::Result<(T, i32)>;

pub mod add;
pub mod config;
pub mod list;
pub mod registry;

use registry::CommandRegistry;

pub(crate) struct GlobalArgs {
    pub registry: CommandRegistry,
}

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (cmdsmith::Result<serde_json::Value>, i32) {
    crate::tty::status("cmdsmith is working...");

    match command {
        crate::Commands::Add(args) => dispatch!(args, global, add),
        crate::Commands::List(args) => dispatch!(args, global, list),
        crate::Commands::Config(args) => dispatch!(args, global, config),
    }
}
