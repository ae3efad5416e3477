use std::path::{Path, PathBuf};

use crate::resource::output::IconWriter;

/// Writes icons into a directory, replacing files that already exist there.
///
/// Every icon is first written to a hidden sibling and then renamed over its
/// final name, so a failed write never leaves a truncated PNG behind.
pub struct DirectoryIconWriter {
    directory: PathBuf,
}

impl DirectoryIconWriter {
    pub fn new(directory: &Path) -> Self {
        Self {
            directory: directory.to_path_buf(),
        }
    }

    fn staging_path(&self, filename: &str) -> PathBuf {
        self.directory.join(format!(".{filename}.partial"))
    }
}

impl IconWriter for DirectoryIconWriter {
    fn location(&self) -> &Path {
        &self.directory
    }

    fn prepare(&mut self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.directory)
    }

    fn write_icon(&mut self, filename: &str, png_data: &[u8]) -> std::io::Result<PathBuf> {
        let staging_path = self.staging_path(filename);
        let icon_path = self.directory.join(filename);

        let result = std::fs::write(&staging_path, png_data)
            .and_then(|_| std::fs::rename(&staging_path, &icon_path));

        if let Err(error) = result {
            let _ = std::fs::remove_file(&staging_path);
            return Err(error);
        }

        log::debug!(
            "Moved {} into place at {}",
            staging_path.display(),
            icon_path.display()
        );

        Ok(icon_path)
    }
}
