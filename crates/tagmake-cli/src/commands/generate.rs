use std::path::PathBuf;

use tagmake_build::{ScriptGenerator, write_script};
use tagmake_core::Overrides;

pub fn generate(
    overrides: Overrides,
    output_dir: Option<PathBuf>,
    stdout: bool,
) -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let (config, plan) = super::load_plan(&project_dir, overrides)?;

    let script = ScriptGenerator::new(&plan).render();

    if stdout {
        println!("{script}");
        return Ok(());
    }

    let output_dir = output_dir.unwrap_or_else(|| config.output_dir(&project_dir));
    let path = write_script(&output_dir, &plan.image, &script)?;

    println!("Generated {}", path.display());
    Ok(())
}
