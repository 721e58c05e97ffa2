use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::tags::discover_tags;

/// Name of the config file looked up in the project directory.
pub const CONFIG_FILE_NAME: &str = "tagmake.toml";

/// Environment variable overriding `[image] name`.
pub const IMAGE_ENV: &str = "TAGMAKE_IMAGE";

/// Environment variable overriding the tag list (comma separated).
pub const TAGS_ENV: &str = "TAGMAKE_TAGS";

/// tagmake.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagmakeConfig {
    #[serde(default)]
    pub image: ImageConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Image name, used in every command line and in the script file name
    pub name: Option<String>,
    /// Explicit tags, in build order
    pub tags: Option<Vec<String>>,
    /// Directory whose subdirectories name the tags.
    /// Relative paths are resolved against the project directory.
    pub tags_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the script is written into. Must already exist.
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

/// Values that take precedence over tagmake.toml.
///
/// Layered as CLI flags > environment > file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub image: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl Overrides {
    /// Read `TAGMAKE_IMAGE` and `TAGMAKE_TAGS` from the process environment.
    pub fn from_env() -> crate::Result<Self> {
        let image = read_env(IMAGE_ENV)?;
        let tags = read_env(TAGS_ENV)?.map(|raw| parse_tag_list(&raw));
        Ok(Self { image, tags })
    }

    /// Layer `higher` on top of `self`. Fields set in `higher` win.
    pub fn merge(self, higher: Overrides) -> Self {
        Self {
            image: higher.image.or(self.image),
            tags: higher.tags.or(self.tags),
        }
    }
}

/// The resolved input of one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    pub image: String,
    pub tags: Vec<String>,
}

impl BuildPlan {
    pub fn new(image: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            image: image.into(),
            tags,
        }
    }
}

impl TagmakeConfig {
    /// Load from tagmake.toml at the given path, or return defaults if not found.
    pub fn load(project_dir: &Path) -> crate::Result<Self> {
        let config_path = project_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading config");
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply overrides in place. Override tags replace both `tags` and `tags_dir`.
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(image) = overrides.image {
            self.image.name = Some(image);
        }
        if let Some(tags) = overrides.tags {
            self.image.tags = Some(tags);
            self.image.tags_dir = None;
        }
    }

    /// Resolve the image name and the ordered tag list.
    pub fn resolve(&self, project_dir: &Path) -> crate::Result<BuildPlan> {
        let image = match self.image.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => return Err(crate::Error::MissingImage),
        };

        let tags = match (&self.image.tags, &self.image.tags_dir) {
            (Some(_), Some(_)) => return Err(crate::Error::ConflictingTagSources),
            (Some(tags), None) => tags.clone(),
            (None, Some(dir)) => discover_tags(&project_dir.join(dir))?,
            (None, None) => Vec::new(),
        };

        tracing::debug!(image = %image, tags = tags.len(), "resolved build plan");
        Ok(BuildPlan { image, tags })
    }

    /// Output directory resolved against the project directory.
    pub fn output_dir(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.output.dir)
    }
}

/// Split a comma-separated tag list. Segments are trimmed, empty ones dropped.
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

fn read_env(key: &'static str) -> crate::Result<Option<String>> {
    env_value(key, std::env::var(key))
}

/// Blank values count as unset, so a `KEY=` left in `.env` does not clear the file's value.
fn env_value(
    key: &'static str,
    value: std::result::Result<String, std::env::VarError>,
) -> crate::Result<Option<String>> {
    match value {
        Ok(value) if value.trim().is_empty() => {
            tracing::debug!(key, "ignoring blank environment override");
            Ok(None)
        }
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(crate::Error::EnvNotUnicode { key }),
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}
