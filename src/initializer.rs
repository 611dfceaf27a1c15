/// File initializer: create-or-append marker file in the desktop directory
///
/// First run creates the target file with one fixed line. Every later run
/// hits the `AlreadyExists` branch and appends one marker line instead.
/// That is the only recognized failure; permission errors, missing parent
/// directories and the like propagate untouched.
use crate::types::{DropmarkError, Result, RunOutcome};
use directories::UserDirs;
use log::debug;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Marker file name, created inside the desktop directory
pub const MARKER_FILE_NAME: &str = "ExampleDispose.txt";

/// Line written when the file is first created
pub const INITIAL_LINE: &str = "This is some text in the file.\n";

/// Line appended on every run after the first
pub const EXISTS_LINE: &str = "File Exists!\n";

pub struct FileInitializer {
    target: PathBuf,
}

impl FileInitializer {
    /// Target the marker file in the ambient desktop directory
    pub fn new() -> Result<Self> {
        let user_dirs = UserDirs::new().ok_or_else(|| {
            DropmarkError::Filesystem(
                "Failed to resolve user directories (no home directory available)".to_string(),
            )
        })?;
        let desktop = user_dirs.desktop_dir().ok_or_else(|| {
            DropmarkError::Filesystem("Failed to resolve desktop directory".to_string())
        })?;

        Ok(Self {
            target: desktop.join(MARKER_FILE_NAME),
        })
    }

    /// Target an explicit path instead of the desktop lookup
    pub fn with_target(target: PathBuf) -> Self {
        Self { target }
    }

    /// Path this initializer writes to
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Create the target file with the initial line, or append the marker
    /// line if it already exists. The handle is opened and closed within
    /// this one call.
    pub fn exec(&self) -> Result<RunOutcome> {
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.target)
        {
            Ok(mut file) => {
                file.write_all(INITIAL_LINE.as_bytes()).map_err(|e| {
                    DropmarkError::Io(std::io::Error::new(
                        e.kind(),
                        format!("Failed to write {}: {}", self.target.display(), e),
                    ))
                })?;
                debug!("Created marker file: {}", self.target.display());
                Ok(RunOutcome::Created)
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!(
                    "Marker file already exists, appending: {}",
                    self.target.display()
                );
                let mut file = OpenOptions::new()
                    .append(true)
                    .open(&self.target)
                    .map_err(|e| {
                        DropmarkError::Io(std::io::Error::new(
                            e.kind(),
                            format!(
                                "Failed to open {} for append: {}",
                                self.target.display(),
                                e
                            ),
                        ))
                    })?;
                file.write_all(EXISTS_LINE.as_bytes()).map_err(|e| {
                    DropmarkError::Io(std::io::Error::new(
                        e.kind(),
                        format!("Failed to append to {}: {}", self.target.display(), e),
                    ))
                })?;
                Ok(RunOutcome::Appended)
            }
            Err(e) => Err(DropmarkError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create {}: {}", self.target.display(), e),
            ))),
        }
    }
}
