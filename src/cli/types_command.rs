use clap::{arg, ArgMatches, Command};

use crate::int::Int;
use crate::ty::IntType;

pub struct TypesCommand {}

impl TypesCommand {
    pub fn new() -> Self {
        TypesCommand {}
    }

    pub fn get_command() -> Command {
        Command::new("types")
            .about("List the supported integer types")
            .arg(arg!(--bounds "Also print MIN and MAX of every type"))
    }

    pub fn handle_command(&self, sub_matches: &ArgMatches) -> bool {
        let bounds = sub_matches.get_flag("bounds");
        for line in Self::lines(bounds) {
            println!("{line}");
        }
        true
    }

    fn lines(bounds: bool) -> Vec<String> {
        IntType::all()
            .map(|ty| {
                let mut line = format!(
                    "{:<8} bits={:<3} words={}",
                    ty.to_string(),
                    ty.bits(),
                    ty.word_count()
                );
                if bounds {
                    line.push_str(&format!(
                        " min={} max={}",
                        Int::min_value(ty),
                        Int::max_value(ty)
                    ));
                }
                line
            })
            .collect()
    }
}

impl Default for TypesCommand {
    fn default() -> Self {
        Self::new()
    }
}
