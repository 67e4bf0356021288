//! Build-directory staging: fresh build dir, base UFO copy, optional cleanup.

use std::fs;
use std::path::Path;

use crate::error::EmitError;

/// Prepare the build directory and copy the base UFO into it.
///
/// Any existing build directory is removed first so every run starts from a
/// clean copy of the base. `staged_ufo` is expected to live inside
/// `build_dir` (the caller derives it as `build_dir/font_name`).
pub fn stage_base_ufo(
    ufo_base: &Path,
    build_dir: &Path,
    staged_ufo: &Path,
) -> Result<(), EmitError> {
    if !ufo_base.is_dir() {
        return Err(EmitError::Staging(format!(
            "base UFO '{}' is not a directory",
            ufo_base.display()
        )));
    }

    if build_dir.exists() {
        log::debug!("Removing stale build directory {}", build_dir.display());
        fs::remove_dir_all(build_dir)?;
    }
    fs::create_dir_all(build_dir)?;

    log::info!(
        "Staging {} -> {}",
        ufo_base.display(),
        staged_ufo.display()
    );
    copy_tree(ufo_base, staged_ufo)
}

/// Remove the build directory after a run.
///
/// Runs keep the directory by default so the staged sources can be
/// inspected; this is only called when the run opts out of that.
pub fn cleanup_build(build_dir: &Path) -> Result<(), EmitError> {
    if build_dir.exists() {
        log::info!("Removing build directory {}", build_dir.display());
        fs::remove_dir_all(build_dir)?;
    }
    Ok(())
}

fn copy_tree(src: &Path, dst: &Path) -> Result<(), EmitError> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
