use std::path::{Path, PathBuf};

/// File name of the generated script for `image`.
pub fn script_file_name(image: &str) -> String {
    format!("build_{image}.sh")
}

pub fn script_path(output_dir: &Path, image: &str) -> PathBuf {
    output_dir.join(script_file_name(image))
}

/// Write the script to `<output_dir>/build_<image>.sh`, replacing any previous one.
///
/// The output directory is not created; a missing directory is an error.
pub fn write_script(
    output_dir: &Path,
    image: &str,
    content: &str,
) -> Result<PathBuf, OutputError> {
    let path = script_path(output_dir, image);
    std::fs::write(&path, content).map_err(|e| OutputError::Write {
        path: path.clone(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), bytes = content.len(), "wrote build script");
    Ok(path)
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to write build script to {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
