use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::HarnessError;

/// An external program plus the fixed arguments passed before the generated ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub program: PathBuf,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Program {
    pub fn new(program: impl Into<PathBuf>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Layout of the project under test and the programs used to build and run it.
///
/// Every field may be omitted from the TOML file; the defaults describe a
/// checkout with the runtime built next to it:
///
/// ```toml
/// classpath = "build/classpath"
/// test_dir = "test/java/lang"
/// test_prefix = "Test"
/// test_extension = "java"
/// package = "java.lang"
///
/// [compiler]
/// program = "javac"
///
/// [runtime]
/// program = "../gtos/build/bin/tolang"
/// args = ["-XuseJavaHome"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    pub classpath: PathBuf,
    pub test_dir: PathBuf,
    pub test_prefix: String,
    pub test_extension: String,
    pub package: String,
    pub compiler: Program,
    pub runtime: Program,
    /// Directory relative paths are resolved against; also the working
    /// directory of every spawned command. [`HarnessConfig::load`] sets it to
    /// the absolute directory of the config file.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            classpath: PathBuf::from("build/classpath"),
            test_dir: PathBuf::from("test/java/lang"),
            test_prefix: "Test".to_string(),
            test_extension: "java".to_string(),
            package: "java.lang".to_string(),
            compiler: Program::new("javac", &[]),
            runtime: Program::new("../gtos/build/bin/tolang", &["-XuseJavaHome"]),
            base_dir: PathBuf::from("."),
        }
    }
}

impl HarnessConfig {
    pub fn from_toml(content: &str, base_dir: impl Into<PathBuf>) -> Result<Self, HarnessError> {
        let mut config: HarnessConfig = toml::from_str(content)?;
        config.base_dir = base_dir.into();
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, HarnessError> {
        let content = fs::read_to_string(path)?;
        let base_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::canonicalize(parent)?,
            _ => std::env::current_dir()?,
        };
        log::debug!("loaded harness config from {}", path.display());
        Self::from_toml(&content, base_dir)
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    pub fn classpath(&self) -> PathBuf {
        self.resolve(&self.classpath)
    }

    pub fn test_dir(&self) -> PathBuf {
        self.resolve(&self.test_dir)
    }

    /// Bare program names are looked up on `PATH`; anything with a directory
    /// component is resolved like the other paths.
    pub fn program_path(&self, program: &Program) -> PathBuf {
        if program.program.components().count() > 1 {
            self.resolve(&program.program)
        } else {
            program.program.clone()
        }
    }
}
