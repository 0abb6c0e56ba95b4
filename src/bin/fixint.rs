use clap::{arg, command, ArgAction};
use env_logger::{Builder, Env};
use fixint::cli::conformance_command::ConformanceCommand;
use fixint::cli::eval_command::EvalCommand;
use fixint::cli::generate_command::GenerateCommand;
use fixint::cli::test_command::TestCommand;
use fixint::cli::types_command::TypesCommand;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let command = command!() // requires `cargo` feature
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(arg!(-v --verbose ... "Increase log verbosity").global(true).action(ArgAction::Count))
        .subcommand(TypesCommand::get_command())
        .subcommand(EvalCommand::get_command())
        .subcommand(ConformanceCommand::get_command())
        .subcommand(GenerateCommand::get_command())
        .subcommand(TestCommand::get_command());

    let matches = command.get_matches();

    let level = match matches.get_count("verbose") {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    Builder::from_env(Env::default().default_filter_or(level)).init();

    let success = if let Some(sub_matches) = matches.subcommand_matches("types") {
        TypesCommand::new().handle_command(sub_matches)
    } else if let Some(sub_matches) = matches.subcommand_matches("eval") {
        EvalCommand::new().handle_command(sub_matches)?
    } else if let Some(sub_matches) = matches.subcommand_matches("conformance") {
        ConformanceCommand::new().handle_command(sub_matches)
    } else if let Some(sub_matches) = matches.subcommand_matches("generate") {
        GenerateCommand::new().handle_command(sub_matches)?
    } else if let Some(sub_matches) = matches.subcommand_matches("test") {
        TestCommand::new().handle_command(sub_matches)?
    } else {
        true
    };

    if !success {
        std::process::exit(1);
    }
    Ok(())
}
