use std::path::Path;

use tagmake_core::config::CONFIG_FILE_NAME;

/// Initialize tagmake in the current directory.
pub fn init_project(image: Option<&str>) -> anyhow::Result<()> {
    let mut created = Vec::new();

    // tagmake.toml
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        eprintln!("{CONFIG_FILE_NAME} already exists, skipping");
    } else {
        std::fs::write(config_path, config_template(image))?;
        created.push(CONFIG_FILE_NAME);
    }

    // dist/
    let dist = Path::new("dist");
    if dist.is_dir() {
        eprintln!("dist/ already exists, skipping");
    } else {
        std::fs::create_dir(dist)?;
        created.push("dist/");
    }

    if created.is_empty() {
        println!("Nothing to create, already initialized.");
    } else {
        for f in &created {
            println!("Created {f}");
        }
    }

    println!();
    println!("Next steps:");
    println!();
    if image.is_none() {
        println!("  - Set the image name in {CONFIG_FILE_NAME}:");
        println!("      [image]");
        println!("      name = \"my-image\"");
        println!();
    }
    println!("  - List the tags to build, or point tags_dir at your version folders");
    println!();
    println!("  - Generate the script:");
    println!("      tagmake generate");

    Ok(())
}

fn config_template(image: Option<&str>) -> String {
    let name_line = match image {
        Some(name) => format!("name = {}", toml::Value::String(name.to_owned())),
        None => "# name = \"my-image\"".to_owned(),
    };

    format!(
        r#"[image]
{name_line}
# tags = ["1.0", "latest"]
# tags_dir = "versions"

[output]
# dir = "dist"
"#
    )
}
