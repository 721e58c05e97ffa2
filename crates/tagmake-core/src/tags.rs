use std::path::Path;

/// List the tags found in a directory of version folders.
///
/// Each subdirectory name is one tag. Plain files are skipped. The result is
/// sorted by name so repeated runs produce the same script.
pub fn discover_tags(dir: &Path) -> crate::Result<Vec<String>> {
    let entries = std::fs::read_dir(dir).map_err(|e| crate::Error::TagsDirRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut tags = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| crate::Error::TagsDirRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_dir() {
            tracing::debug!(path = %path.display(), "skipping non-directory entry");
            continue;
        }

        let name = entry
            .file_name()
            .into_string()
            .map_err(|raw| crate::Error::NonUtf8TagName {
                dir: dir.to_path_buf(),
                name: raw.to_string_lossy().into_owned(),
            })?;
        tags.push(name);
    }

    tags.sort();
    tracing::debug!(dir = %dir.display(), count = tags.len(), "discovered tags");
    Ok(tags)
}
