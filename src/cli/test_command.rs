use std::path::{Path, PathBuf};

use clap::{arg, value_parser, ArgMatches, Command};

use crate::harness::{self, HarnessConfig, HarnessError};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "fixint.toml";

pub struct TestCommand {}

impl TestCommand {
    pub fn new() -> Self {
        TestCommand {}
    }

    pub fn get_command() -> Command {
        Command::new("test")
            .about("Compile and run the external test programs")
            .after_help("Without --config, ./fixint.toml is used if present, otherwise the built-in layout (test/java/lang/Test*.java, javac, ../gtos/build/bin/tolang).")
            .arg(
                arg!(-c --config <FILE> "Harness config file")
                    .required(false)
                    .value_parser(value_parser!(PathBuf)),
            )
    }

    pub fn config(sub_matches: &ArgMatches) -> Result<HarnessConfig, HarnessError> {
        if let Some(path) = sub_matches.get_one::<PathBuf>("config") {
            return HarnessConfig::load(path);
        }
        let default = Path::new(DEFAULT_CONFIG_FILE);
        if default.is_file() {
            return HarnessConfig::load(default);
        }
        Ok(HarnessConfig {
            base_dir: std::env::current_dir()?,
            ..HarnessConfig::default()
        })
    }

    pub fn handle_command(&self, sub_matches: &ArgMatches) -> Result<bool, HarnessError> {
        let config = Self::config(sub_matches)?;
        let summary = harness::run(&config)?;

        for outcome in &summary.outcomes {
            print!("{}", outcome.stdout);
            eprint!("{}", outcome.stderr);
            if outcome.passed() {
                println!("{} passed (exit code 0)", outcome.test.class_name);
            } else {
                println!("{} failed ({})", outcome.test.class_name, outcome.status);
            }
        }
        println!("{} passed, {} failed", summary.passed(), summary.failed());
        Ok(summary.all_passed())
    }
}

impl Default for TestCommand {
    fn default() -> Self {
        Self::new()
    }
}
