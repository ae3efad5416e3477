use std::path::{Path, PathBuf};

pub mod file;

pub trait IconWriter {
    fn location(&self) -> &Path;
    fn prepare(&mut self) -> std::io::Result<()>;
    fn write_icon(&mut self, filename: &str, png_data: &[u8]) -> std::io::Result<PathBuf>;
}
