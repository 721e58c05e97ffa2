use tagmake_core::BuildPlan;

/// `.` and `..` show up when tags come from a raw directory listing.
pub fn is_directory_self_or_parent_marker(tag: &str) -> bool {
    tag == "." || tag == ".."
}

/// Render the build script for `image`: one build line per tag, then the test line.
pub fn generate<S: AsRef<str>>(image: &str, tags: &[S]) -> String {
    script_lines(image, tags).join("\n")
}

fn script_lines<S: AsRef<str>>(image: &str, tags: &[S]) -> Vec<String> {
    let mut lines: Vec<String> = tags
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|tag| !is_directory_self_or_parent_marker(tag))
        .map(|tag| format!("make build image={image} tag={tag} -B"))
        .collect();
    lines.push(format!("make test image={image} -B"));
    lines
}

/// Generates the `make` script for a resolved [`BuildPlan`].
pub struct ScriptGenerator<'a> {
    plan: &'a BuildPlan,
}

impl<'a> ScriptGenerator<'a> {
    pub fn new(plan: &'a BuildPlan) -> Self {
        Self { plan }
    }

    /// Tags that will produce a build line, in order.
    pub fn build_tags(&self) -> impl Iterator<Item = &'a str> {
        self.plan
            .tags
            .iter()
            .map(String::as_str)
            .filter(|tag| !is_directory_self_or_parent_marker(tag))
    }

    pub fn lines(&self) -> Vec<String> {
        script_lines(&self.plan.image, &self.plan.tags)
    }

    pub fn render(&self) -> String {
        let script = generate(&self.plan.image, &self.plan.tags);
        tracing::debug!(
            image = %self.plan.image,
            build_lines = self.build_tags().count(),
            "rendered build script"
        );
        script
    }
}
