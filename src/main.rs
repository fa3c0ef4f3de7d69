use clap::{CommandFactory, Parser, Subcommand};

use commands::registry::CommandRegistry;
use commands::GlobalArgs;

mod commands;
mod output;
mod tty;

use commands::{add, config, list};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "cmdsmith")]
#[command(version = VERSION)]
#[command(about = "Scaffold sub-commands into an existing command tree")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a command to the application's command tree
    Add(add::AddArgs),
    /// List the commands this tool provides
    List(list::ListArgs),
    /// Inspect cmdsmith configuration
    Config(config::ConfigArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let global = GlobalArgs {
        registry: CommandRegistry::from_command(&Cli::command()),
    };

    let (json_result, exit_code) = commands::run_json(cli.command, &global);

    if output::print_json_result(json_result).is_err() {
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
