use std::path::Path;

use tagmake_build::ScriptGenerator;
use tagmake_core::Overrides;

/// Print the tags that will get a `make build` line, one per line.
pub fn tags(overrides: Overrides) -> anyhow::Result<()> {
    let (_, plan) = super::load_plan(Path::new("."), overrides)?;
    let generator = ScriptGenerator::new(&plan);

    let mut count = 0;
    for tag in generator.build_tags() {
        println!("{tag}");
        count += 1;
    }

    if count == 0 {
        eprintln!("No tags for {}; only `make test` will be generated.", plan.image);
    }
    Ok(())
}
