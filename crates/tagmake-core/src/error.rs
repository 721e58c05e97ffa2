use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(
        "no image name configured; set `name` under [image] in tagmake.toml, \
         TAGMAKE_IMAGE, or pass --image"
    )]
    MissingImage,

    #[error("both `tags` and `tags_dir` are set under [image]; keep only one tag source")]
    ConflictingTagSources,

    // ── Tag discovery ──
    #[error("failed to read tags directory {path}")]
    TagsDirRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("tag directory name under {dir} is not valid UTF-8: {name:?}")]
    NonUtf8TagName { dir: PathBuf, name: String },

    #[error("environment variable {key} is not valid unicode")]
    EnvNotUnicode { key: &'static str },
}
