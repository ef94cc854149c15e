/// Extension point the host framework's startup scanner reads auto
/// configuration classes from.
pub const ENABLE_AUTO_CONFIGURATION: &str =
    "org.springframework.boot.autoconfigure.EnableAutoConfiguration";

/// Manifest location, relative to the resources directory.
pub const SPRING_FACTORIES_PATH: &str = "META-INF/spring.factories";

/// The discovery manifest accumulated over one run.
///
/// Entries are recorded in processing order and duplicates are kept; an
/// identifier registered under two resource roots yields its line twice.
/// The manifest is built fresh every run and written once at the end, so a
/// repeat run over unchanged inputs renders the same bytes.
#[derive(Debug, Default)]
pub struct FactoryManifest {
    entries: Vec<(String, String)>,
}

impl FactoryManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, extension_point: &str, class_name: &str) {
        self.entries
            .push((extension_point.to_string(), class_name.to_string()));
    }

    /// Record a generated auto-configuration class under the standard
    /// extension point.
    pub fn add_auto_configuration(&mut self, class_name: &str) {
        self.add(ENABLE_AUTO_CONFIGURATION, class_name);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Render in the properties continuation-line form, grouped by extension
    /// point in first-seen order:
    ///
    /// ```text
    /// <extension point>=\
    /// <class>,\
    /// <class>
    /// ```
    pub fn render(&self) -> String {
        let mut extension_points: Vec<&str> = Vec::new();
        for (extension_point, _) in &self.entries {
            if !extension_points.contains(&extension_point.as_str()) {
                extension_points.push(extension_point);
            }
        }

        let mut out = String::new();
        for extension_point in extension_points {
            let classes: Vec<&str> = self
                .entries
                .iter()
                .filter(|(point, _)| point == extension_point)
                .map(|(_, class)| class.as_str())
                .collect();

            out.push_str(extension_point);
            out.push_str("=\\\n");
            out.push_str(&classes.join(",\\\n"));
            out.push('\n');
        }
        out
    }
}
