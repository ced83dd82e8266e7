//! Directory scaffolding.

use std::path::Path;

use crate::error::{FileOpError, Step};

/// Permission mode applied to directories created by [`ensure_dir`].
pub const DIR_MODE: u32 = 0o755;

/// Creates `path` and any missing parents.
///
/// On Unix the leaf directory is set to [`DIR_MODE`]. An existing directory
/// is left as is.
pub fn ensure_dir(path: &Path) -> Result<(), FileOpError> {
    if path.is_dir() {
        return Ok(());
    }

    std::fs::create_dir_all(path).map_err(|e| FileOpError::new(Step::CreateDir, path, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(DIR_MODE))
            .map_err(|e| FileOpError::new(Step::SetPermissions, path, e))?;
    }

    tracing::debug!(path = %path.display(), "created directory");
    Ok(())
}
