//! Report location policy.

use super::config::OutputTarget;
use crate::error::{BulkfindError, Result};
use chrono::{DateTime, Local};
use std::env;
use std::path::{Path, PathBuf};

/// `resultados_YYYYMMDD_HHMMSS.tsv` for the given capture time.
pub fn timestamped_file_name(now: &DateTime<Local>) -> String {
    format!("resultados_{}.tsv", now.format("%Y%m%d_%H%M%S"))
}

/// Resolve the report path for `target`.
///
/// Relative explicit paths and the fixed file name resolve against the
/// working directory. Timestamped reports go under `<exe dir>/<dir_name>/`;
/// `exe_dir` defaults to the running executable's directory.
pub fn resolve_output_path(
    target: &OutputTarget,
    now: &DateTime<Local>,
    exe_dir: Option<&Path>,
) -> Result<PathBuf> {
    match target {
        OutputTarget::Explicit(path) => Ok(path.clone()),
        OutputTarget::WorkingDir(file_name) => Ok(PathBuf::from(file_name)),
        OutputTarget::Timestamped { dir_name } => {
            let base = match exe_dir {
                Some(dir) => dir.to_path_buf(),
                None => executable_dir()?,
            };
            Ok(base.join(dir_name).join(timestamped_file_name(now)))
        }
    }
}

fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(|e| BulkfindError::OutputLocation(e.to_string()))?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        BulkfindError::OutputLocation(format!("{} has no parent directory", exe.display()))
    })
}
