mod generate;
mod init;
mod tags;

use std::path::Path;

use tagmake_core::{BuildPlan, Overrides, TagmakeConfig};

pub use generate::generate;
pub use init::init_project;
pub use tags::tags;

/// Load `.env` from the working directory or its parents, if present.
pub fn load_dotenv() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded .env");
            Ok(())
        }
        Err(e) if e.not_found() => {
            tracing::debug!("no .env file");
            Ok(())
        }
        Err(e) => Err(anyhow::Error::new(e).context("failed to load .env")),
    }
}

/// Load tagmake.toml, layer environment and CLI overrides on top, and resolve the plan.
pub(crate) fn load_plan(
    project_dir: &Path,
    cli: Overrides,
) -> anyhow::Result<(TagmakeConfig, BuildPlan)> {
    let mut config = TagmakeConfig::load(project_dir)?;
    config.apply(Overrides::from_env()?.merge(cli));
    let plan = config.resolve(project_dir)?;
    Ok((config, plan))
}
