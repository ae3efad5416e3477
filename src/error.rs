use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    MissingSource {
        path: PathBuf,
    },
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
    Encode {
        filename: String,
        source: image::ImageError,
    },
    Write {
        path: PathBuf,
        source: std::io::Error,
        written: Vec<PathBuf>,
    },
    ExecutableLocation {
        source: std::io::Error,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingSource { path } => {
                write!(f, "Source file '{}' not found", path.display())
            }
            Error::Decode { path, .. } => {
                write!(f, "Unable to load image: {}", path.display())
            }
            Error::CreateOutputDir { path, .. } => write!(
                f,
                "Unable to create the output directory: {}",
                path.display()
            ),
            Error::Encode { filename, .. } => write!(f, "Unable to encode {filename} as PNG"),
            Error::Write { path, written, .. } => {
                write!(f, "Unable to write icon: {}", path.display())?;
                if written.is_empty() {
                    write!(f, " (no icons were written)")
                } else {
                    let names = written
                        .iter()
                        .filter_map(|path| path.file_name())
                        .map(|name| name.to_string_lossy())
                        .collect::<Vec<_>>()
                        .join(", ");
                    write!(f, " (already written: {names})")
                }
            }
            Error::ExecutableLocation { .. } => {
                write!(f, "Unable to locate the directory of the running executable")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MissingSource { .. } => None,
            Error::Decode { source, .. } | Error::Encode { source, .. } => Some(source),
            Error::CreateOutputDir { source, .. }
            | Error::Write { source, .. }
            | Error::ExecutableLocation { source } => Some(source),
        }
    }
}
