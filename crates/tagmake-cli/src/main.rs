mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tagmake_core::Overrides;

#[derive(Parser)]
#[command(
    name = "tagmake",
    about = "Generate a make build script for every tag of an image"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write build_<image>.sh into the output directory (default command)
    Generate {
        #[command(flatten)]
        source: SourceArgs,
        /// Directory to write the script into (overrides [output] dir)
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Print the script instead of writing it
        #[arg(long)]
        stdout: bool,
    },
    /// List the tags that will get a build line
    Tags {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Create tagmake.toml and the dist/ directory
    Init {
        /// Image name written into tagmake.toml
        #[arg(long)]
        image: Option<String>,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Image name (overrides tagmake.toml and TAGMAKE_IMAGE)
    #[arg(long)]
    image: Option<String>,
    /// Tag to build; repeat for several (overrides tagmake.toml and TAGMAKE_TAGS)
    #[arg(long = "tag", value_name = "TAG")]
    tags: Vec<String>,
}

impl SourceArgs {
    fn into_overrides(self) -> Overrides {
        Overrides {
            image: self.image,
            tags: (!self.tags.is_empty()).then_some(self.tags),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    commands::load_dotenv()?;

    match cli.command {
        None => commands::generate(Overrides::default(), None, false)?,
        Some(Commands::Generate {
            source,
            output_dir,
            stdout,
        }) => commands::generate(source.into_overrides(), output_dir, stdout)?,
        Some(Commands::Tags { source }) => commands::tags(source.into_overrides())?,
        Some(Commands::Init { image }) => commands::init_project(image.as_deref())?,
    }

    Ok(())
}
