//! Build script generation and output for tagmake.
//!
//! # Generate pipeline
//!
//! ```text
//! tagmake generate
//!   1. Config   ── tagmake.toml + TAGMAKE_* env + CLI flags
//!   2. Plan     ── TagmakeConfig::resolve() → BuildPlan { image, tags }
//!   3. Script   ── ScriptGenerator::render()
//!   4. Write    ── <output.dir>/build_<image>.sh
//! ```
//!
//! # Script shape
//!
//! One `make build` line per tag, in order, then a single `make test`
//! line. Entries `.` and `..` never produce a build line. The script has
//! no shebang and no trailing newline.

pub mod output;
pub mod script;

pub use output::{OutputError, script_file_name, script_path, write_script};
pub use script::{ScriptGenerator, generate, is_directory_self_or_parent_marker};
