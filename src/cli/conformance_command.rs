use clap::{arg, value_parser, Arg, ArgAction, ArgMatches, Command};

use crate::conformance::{self, Options};
use crate::ty::IntType;

pub struct ConformanceCommand {}

impl ConformanceCommand {
    pub fn new() -> Self {
        ConformanceCommand {}
    }

    pub fn get_command() -> Command {
        Command::new("conformance")
            .about("Run the in-process conformance suite")
            .after_help("Checks the algebraic properties and a num-bigint reference for every selected type. Exits with status 1 if any check fails.")
            .arg(
                arg!(-s --seed <SEED> "Seed for the operand generator")
                    .value_parser(value_parser!(u64))
                    .default_value("0"),
            )
            .arg(
                arg!(-n --iterations <N> "Random operand sets per type")
                    .value_parser(value_parser!(usize))
                    .default_value("100"),
            )
            .arg(
                Arg::new("type")
                    .short('t')
                    .long("type")
                    .value_name("TYPE")
                    .help("Restrict to this type; repeatable")
                    .action(ArgAction::Append)
                    .value_parser(value_parser!(IntType)),
            )
    }

    pub fn options(sub_matches: &ArgMatches) -> Options {
        let defaults = Options::default();
        Options {
            seed: sub_matches
                .get_one::<u64>("seed")
                .copied()
                .unwrap_or(defaults.seed),
            iterations: sub_matches
                .get_one::<usize>("iterations")
                .copied()
                .unwrap_or(defaults.iterations),
            types: match sub_matches.get_many::<IntType>("type") {
                Some(types) => types.copied().collect(),
                None => defaults.types,
            },
        }
    }

    pub fn handle_command(&self, sub_matches: &ArgMatches) -> bool {
        let report = conformance::run(&Self::options(sub_matches));

        for ty in &report.types {
            if ty.is_success() {
                println!("{}: OK ({} checks)", ty.ty, ty.passed);
            } else {
                let total = ty.passed + ty.failures.len();
                println!("{}: {} of {} checks failed", ty.ty, ty.failures.len(), total);
                for failure in &ty.failures {
                    println!("  {failure}");
                }
            }
        }
        println!("{} passed, {} failed", report.passed(), report.failed());
        report.is_success()
    }
}

impl Default for ConformanceCommand {
    fn default() -> Self {
        Self::new()
    }
}
