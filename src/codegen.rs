//! Placeholder substitution over a per-type source template.
//!
//! A template names the type through `__CLASSNAME__`, its width through
//! `__BITS__` and its word count through `__MAXWIDTH__`; [`generate`] writes one
//! rendered file per supported width.

use std::fs;
use std::path::{Path, PathBuf};

use crate::harness::HarnessError;
use crate::ty::{IntType, Signedness, SUPPORTED_WIDTHS};

pub const CLASSNAME: &str = "__CLASSNAME__";
pub const BITS: &str = "__BITS__";
pub const MAXWIDTH: &str = "__MAXWIDTH__";

const DEFAULT_EXTENSION: &str = "java";

pub fn render(template: &str, ty: IntType) -> String {
    template
        .replace(CLASSNAME, &ty.to_string())
        .replace(BITS, &ty.bits().to_string())
        .replace(MAXWIDTH, &ty.word_count().to_string())
}

/// `uintXXX.java.template` renders to `.java` files.
fn output_extension(template_path: &Path) -> String {
    let name = template_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = name.strip_suffix(".template").unwrap_or(&name);
    Path::new(base)
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}

/// Renders the template for all 32 widths of `signedness` into `out_dir`,
/// returning the written paths in ascending width order.
pub fn generate(
    template_path: &Path,
    out_dir: &Path,
    signedness: Signedness,
) -> Result<Vec<PathBuf>, HarnessError> {
    let template = fs::read_to_string(template_path)?;
    let extension = output_extension(template_path);
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(SUPPORTED_WIDTHS.len());
    for bits in SUPPORTED_WIDTHS {
        let ty = IntType::new_unchecked(bits, signedness);
        let path = out_dir.join(format!("{ty}.{extension}"));
        fs::write(&path, render(&template, ty))?;
        log::info!("generated {}", path.display());
        written.push(path);
    }
    Ok(written)
}
