use std::path::PathBuf;

use anyhow::Result;

use crate::error::Error;

pub struct Args {
    pub source: PathBuf,
    pub output_dir: PathBuf,
}

impl Args {
    /// Targets the app icon set next to the running executable.
    pub fn from_source(source: PathBuf) -> Result<Self> {
        Ok(Self {
            source,
            output_dir: Self::default_output_dir()?,
        })
    }

    pub fn default_output_dir() -> Result<PathBuf> {
        let executable =
            std::env::current_exe().map_err(|source| Error::ExecutableLocation { source })?;

        let program_dir = match executable.parent() {
            Some(program_dir) => program_dir,
            None => {
                return Err(Error::ExecutableLocation {
                    source: std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        format!(
                            "The executable path has no parent directory: {}",
                            executable.display()
                        ),
                    ),
                }
                .into())
            }
        };

        Ok(program_dir
            .join("Assets.xcassets")
            .join("AppIcon.appiconset"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_dir_sits_next_to_the_executable() {
        let output_dir = Args::default_output_dir().unwrap();
        let program_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();

        assert_eq!(
            output_dir,
            program_dir.join("Assets.xcassets").join("AppIcon.appiconset")
        );
    }
}
