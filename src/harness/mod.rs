//! External test runner.
//!
//! Discovers test sources, compiles them in one compiler invocation, then runs
//! each class in the runtime binary. A test passes iff the runtime exits with
//! status 0.

mod config;

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use thiserror::Error;

pub use config::{HarnessConfig, Program};

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid harness config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("no test files matching `{pattern}` in {}", .dir.display())]
    NoTests { dir: PathBuf, pattern: String },
    #[error("failed to launch `{}`: {source}", .program.display())]
    Spawn { program: PathBuf, source: io::Error },
    #[error("compilation failed ({status})")]
    CompileFailed { status: ExitStatus },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestProgram {
    pub source: PathBuf,
    /// Fully qualified name handed to the runtime, e.g. `java.lang.TestInt256`.
    pub class_name: String,
}

#[derive(Debug, Clone)]
pub struct Outcome {
    pub test: TestProgram,
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.status.success()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub outcomes: Vec<Outcome>,
}

impl Summary {
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(Outcome::passed)
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }
}

/// Test sources in `test_dir` named `<prefix>*.<extension>`, sorted by path.
pub fn discover(config: &HarnessConfig) -> Result<Vec<TestProgram>, HarnessError> {
    let dir = config.test_dir();
    let suffix = format!(".{}", config.test_extension);
    let pattern = format!("{}*{}", config.test_prefix, suffix);

    let mut sources = Vec::new();
    if dir.is_dir() {
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if path.is_file() && name.starts_with(&config.test_prefix) && name.ends_with(&suffix) {
                sources.push(path);
            }
        }
    }
    if sources.is_empty() {
        return Err(HarnessError::NoTests { dir, pattern });
    }
    sources.sort();

    log::info!("found {} test files matching `{}`", sources.len(), pattern);
    Ok(sources
        .into_iter()
        .map(|source| {
            let stem = source
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            log::info!("  {}", source.display());
            TestProgram {
                class_name: format!("{}.{}", config.package, stem),
                source,
            }
        })
        .collect())
}

/// `<classpath>:.`, the search path used for both compiling and running.
fn search_path(config: &HarnessConfig) -> OsString {
    let mut path = config.classpath().into_os_string();
    path.push(":.");
    path
}

fn command(config: &HarnessConfig, program: &Program) -> Command {
    let mut cmd = Command::new(config.program_path(program));
    cmd.current_dir(&config.base_dir);
    cmd
}

/// Compiles every test source in a single compiler invocation.
pub fn compile(config: &HarnessConfig, tests: &[TestProgram]) -> Result<(), HarnessError> {
    let classpath = config.classpath();
    fs::create_dir_all(&classpath)?;

    let mut cmd = command(config, &config.compiler);
    cmd.args(&config.compiler.args)
        .arg("-cp")
        .arg(search_path(config))
        .arg("-d")
        .arg(&classpath)
        .args(tests.iter().map(|t| &t.source));
    log::debug!("running {:?}", cmd);

    let status = cmd.status().map_err(|source| HarnessError::Spawn {
        program: config.program_path(&config.compiler),
        source,
    })?;
    if !status.success() {
        log::warn!("compilation failed ({})", status);
        return Err(HarnessError::CompileFailed { status });
    }
    log::info!("compiled {} test files", tests.len());
    Ok(())
}

/// Runs one compiled test class and captures its output.
pub fn run_one(config: &HarnessConfig, test: &TestProgram) -> Result<Outcome, HarnessError> {
    let mut cmd = command(config, &config.runtime);
    cmd.arg("-classpath")
        .arg(search_path(config))
        .args(&config.runtime.args)
        .arg(&test.class_name);
    log::debug!("running {:?}", cmd);

    let output = cmd.output().map_err(|source| HarnessError::Spawn {
        program: config.program_path(&config.runtime),
        source,
    })?;
    let outcome = Outcome {
        test: test.clone(),
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };
    if outcome.passed() {
        log::info!("{} passed", test.class_name);
    } else {
        log::warn!("{} failed ({})", test.class_name, outcome.status);
    }
    Ok(outcome)
}

/// Discovers, compiles and runs every test.
pub fn run(config: &HarnessConfig) -> Result<Summary, HarnessError> {
    let tests = discover(config)?;
    compile(config, &tests)?;
    let outcomes = tests
        .iter()
        .map(|test| run_one(config, test))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Summary { outcomes })
}
