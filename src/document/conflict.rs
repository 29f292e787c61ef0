//! Output-conflict resolution.

use std::path::PathBuf;

/// The three-way decision when the target output already exists.
///
/// Resolved once per run, before any table is processed; the core never
/// re-reads the decision mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictChoice {
    /// Load the existing document and add the new sections after it.
    Append,
    /// Discard the existing document and start fresh.
    Overwrite,
    /// Terminate without writing; the existing file stays untouched.
    Abort,
}

impl ConflictChoice {
    /// Interpret an interactive answer: `a` appends, `y` overwrites,
    /// anything else aborts.
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "a" => ConflictChoice::Append,
            "y" => ConflictChoice::Overwrite,
            _ => ConflictChoice::Abort,
        }
    }
}

/// Append a `.docx` suffix when the path does not already carry one.
pub fn ensure_docx_extension(path: PathBuf) -> PathBuf {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("docx") => path,
        _ => PathBuf::from(format!("{}.docx", path.display())),
    }
}
