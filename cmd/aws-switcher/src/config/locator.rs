use directories::UserDirs;
use std::path::{Path, PathBuf};

/// Location of the shared credentials file, relative to the user's home directory.
pub const CREDENTIALS_PATH: &str = ".aws/credentials";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to find home directory")]
    HomeDirNotFound,
    #[error("Failed to create directory: {path:?}")]
    DirCreationFailed { path: PathBuf },
}

pub fn home_dir() -> Result<PathBuf, Error> {
    UserDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(Error::HomeDirNotFound)
}

/// `~/.aws/credentials` for the current user.
pub fn credentials_path() -> Result<PathBuf, Error> {
    Ok(home_dir()?.join(CREDENTIALS_PATH))
}

/// Creates the directory holding `file` if needed and returns it.
pub fn ensure_directory(file: &Path) -> Result<PathBuf, Error> {
    let parent = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => return Ok(PathBuf::from(".")),
    };
    std::fs::create_dir_all(parent).map_err(|_| Error::DirCreationFailed {
        path: parent.to_path_buf(),
    })?;
    Ok(parent.to_path_buf())
}
