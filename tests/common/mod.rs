#![allow(dead_code)]
/// Common test utilities and helpers
use springboot_typegen::GenerateConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A Camel component project laid out under a temp directory.
pub struct TestProject {
    pub temp_dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let project = Self {
            temp_dir: TempDir::new().unwrap(),
        };
        fs::create_dir_all(project.path().join("src/main/java")).unwrap();
        fs::create_dir_all(project.path().join("src/main/resources")).unwrap();
        fs::create_dir_all(project.path().join("target/classes")).unwrap();
        project
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Register a component under the default resource root.
    pub fn add_marker(&self, name: &str) -> &Self {
        self.add_marker_under("src/main/resources", name)
    }

    /// Register a component under a specific resource root.
    pub fn add_marker_under(&self, root: &str, name: &str) -> &Self {
        let marker_dir = self
            .path()
            .join(root)
            .join("META-INF/services/org/apache/camel/component");
        fs::create_dir_all(&marker_dir).unwrap();
        fs::write(
            marker_dir.join(name),
            "class=org.apache.camel.component.Placeholder\n",
        )
        .unwrap();
        self
    }

    /// Drop a metadata document into the build output directory.
    pub fn add_metadata(&self, file_name: &str, json: &str) -> &Self {
        fs::write(self.path().join("target/classes").join(file_name), json).unwrap();
        self
    }

    pub fn config(&self) -> GenerateConfig {
        GenerateConfig {
            project_path: self.path().to_string_lossy().to_string(),
            ..Default::default()
        }
    }

    /// Path of a generated source file, relative to the source directory.
    pub fn generated_source(&self, relative: &str) -> PathBuf {
        self.path().join("src/main/java").join(relative)
    }

    pub fn spring_factories_path(&self) -> PathBuf {
        self.path()
            .join("src/main/resources/META-INF/spring.factories")
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }
}

/// Metadata for a component with one object option and one boolean option,
/// shaped like the documents the Camel build emits.
pub fn ahc_metadata() -> String {
    r#"{
  "component": {
    "kind": "component",
    "scheme": "ahc",
    "syntax": "ahc:httpUri",
    "title": "AHC",
    "description": "To call external HTTP services using Async Http Client.",
    "label": "http",
    "deprecated": "false",
    "javaType": "org.apache.camel.component.ahc.AhcComponent",
    "groupId": "org.apache.camel",
    "artifactId": "camel-ahc",
    "version": "2.18.0"
  },
  "componentProperties": {
    "binding": {
      "name": "binding",
      "kind": "property",
      "type": "object",
      "javaType": "org.apache.camel.component.ahc.AhcBinding",
      "deprecated": "false",
      "description": "To use a custom AhcBinding to control how to bind between AHC and Camel."
    },
    "allowJavaSerializedObject": {
      "name": "allowJavaSerializedObject",
      "kind": "property",
      "type": "boolean",
      "javaType": "boolean",
      "deprecated": "false",
      "description": "Whether to allow java serialization when a request uses context-type=application/x-java-serialized-object This is by default turned off."
    }
  },
  "properties": {
    "httpUri": {
      "name": "httpUri",
      "kind": "path",
      "group": "producer",
      "required": "true",
      "type": "string",
      "javaType": "java.net.URI",
      "deprecated": "false",
      "description": "The URI to use such as http://hostname:port/path"
    }
  }
}
"#
    .to_string()
}

/// Minimal metadata for a component with no options.
pub fn minimal_metadata(scheme: &str, java_type: &str) -> String {
    format!(
        r#"{{
  "component": {{
    "kind": "component",
    "scheme": "{}",
    "javaType": "{}"
  }},
  "componentProperties": {{}},
  "properties": {{}}
}}
"#,
        scheme, java_type
    )
}
