use std::path::PathBuf;

use clap::{arg, value_parser, ArgMatches, Command};

use crate::codegen;
use crate::harness::HarnessError;
use crate::ty::Signedness;

pub struct GenerateCommand {}

impl GenerateCommand {
    pub fn new() -> Self {
        GenerateCommand {}
    }

    pub fn get_command() -> Command {
        Command::new("generate")
            .about("Render a per-type source template for all 32 widths")
            .after_help("The template may use __CLASSNAME__, __BITS__ and __MAXWIDTH__. Output files are named after the type, e.g. uint256.java.")
            .arg(
                arg!(-t --template <FILE> "Template file, e.g. uintXXX.java.template")
                    .required(true)
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                arg!(-o --out <DIR> "Output directory")
                    .required(true)
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(arg!(--signed "Generate int<N> instead of uint<N>"))
    }

    pub fn handle_command(&self, sub_matches: &ArgMatches) -> Result<bool, HarnessError> {
        let (Some(template), Some(out)) = (
            sub_matches.get_one::<PathBuf>("template"),
            sub_matches.get_one::<PathBuf>("out"),
        ) else {
            return Ok(false);
        };
        let signedness = if sub_matches.get_flag("signed") {
            Signedness::Signed
        } else {
            Signedness::Unsigned
        };

        for path in codegen::generate(template, out, signedness)? {
            println!("Generated {}", path.display());
        }
        Ok(true)
    }
}

impl Default for GenerateCommand {
    fn default() -> Self {
        Self::new()
    }
}
