//! Minimal Java source rendering.
//!
//! Only the shapes the two generated class kinds need are supported: package
//! and import lines, class javadoc and annotations, private fields with
//! accessors, and pre-rendered method blocks. Everything is kept in plain
//! `Vec`s in insertion order, which is what makes the output byte-identical
//! from run to run.

/// One indentation level in generated sources.
pub const INDENT: &str = "    ";

/// Total line width the javadoc wrapper and setter signatures stay within.
const MAX_LINE_WIDTH: usize = 80;

/// A private field with generated accessors. `type_ref` is the rendered
/// type reference as returned by `JavaClassBuilder::import_type`.
#[derive(Debug, Clone)]
pub struct JavaField {
    pub javadoc: Option<String>,
    pub deprecated: bool,
    pub type_ref: String,
    pub name: String,
}

/// Builds one Java class source file.
pub struct JavaClassBuilder {
    package: String,
    name: String,
    javadoc: Option<String>,
    annotations: Vec<String>,
    imports: Vec<String>,
    fields: Vec<JavaField>,
    methods: Vec<String>,
}

impl JavaClassBuilder {
    pub fn new(package: &str, name: &str) -> Self {
        Self {
            package: package.to_string(),
            name: name.to_string(),
            javadoc: None,
            annotations: Vec::new(),
            imports: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn set_javadoc(&mut self, text: &str) {
        self.javadoc = Some(text.to_string());
    }

    /// Add a class-level annotation line, e.g. `@Configuration`. The
    /// annotation type's import is charged separately via `import_type`.
    pub fn add_annotation(&mut self, line: &str) {
        self.annotations.push(line.to_string());
    }

    pub fn add_field(&mut self, field: JavaField) {
        self.fields.push(field);
    }

    /// Append a pre-rendered method block (lines already indented and
    /// newline-terminated). Blocks render after the accessors, blank-line
    /// separated like everything else in the class body.
    pub fn add_method(&mut self, block: String) {
        self.methods.push(block);
    }

    /// Resolve a fully qualified type reference to the name to use in code,
    /// recording an import when one is needed.
    ///
    /// `java.lang` types and types from the class's own package stay simple
    /// without an import. A simple name already claimed by a different
    /// import keeps the reference fully qualified inline. Generic arguments
    /// and array suffixes are resolved recursively.
    pub fn import_type(&mut self, type_name: &str) -> String {
        let type_name = type_name.trim();

        if let Some(element) = type_name.strip_suffix("[]") {
            return format!("{}[]", self.import_type(element));
        }

        if let Some(open) = type_name.find('<') {
            let close = type_name.rfind('>').unwrap_or(type_name.len());
            let base = self.import_type(&type_name[..open]);
            let arguments: Vec<String> = split_type_arguments(&type_name[open + 1..close])
                .into_iter()
                .map(|argument| self.import_type(argument))
                .collect();
            return format!("{}<{}>", base, arguments.join(", "));
        }

        let pos = match type_name.rfind('.') {
            Some(pos) => pos,
            // primitives and already-simple names
            None => return type_name.to_string(),
        };
        let package = &type_name[..pos];
        let simple = &type_name[pos + 1..];

        if package == "java.lang" || package == self.package {
            return simple.to_string();
        }
        if self.imports.iter().any(|import| import == type_name) {
            return simple.to_string();
        }
        if self
            .imports
            .iter()
            .any(|import| import.rsplit('.').next() == Some(simple))
        {
            return type_name.to_string();
        }

        self.imports.push(type_name.to_string());
        simple.to_string()
    }

    pub fn build(&self) -> String {
        let mut out = String::new();

        out.push_str("package ");
        out.push_str(&self.package);
        out.push_str(";\n\n");

        if !self.imports.is_empty() {
            for import in &self.imports {
                out.push_str("import ");
                out.push_str(import);
                out.push_str(";\n");
            }
            out.push('\n');
        }

        if let Some(javadoc) = &self.javadoc {
            append_javadoc(&mut out, "", javadoc);
        }
        for annotation in &self.annotations {
            out.push_str(annotation);
            out.push('\n');
        }
        out.push_str("public class ");
        out.push_str(&self.name);
        out.push_str(" {\n");

        for block in self.member_blocks() {
            out.push('\n');
            out.push_str(&block);
        }

        out.push_str("}\n");
        out
    }

    /// Class body as blank-line separated blocks: all fields contiguous
    /// first, then each accessor, then each method block.
    fn member_blocks(&self) -> Vec<String> {
        let mut blocks = Vec::new();

        if !self.fields.is_empty() {
            let mut block = String::new();
            for field in &self.fields {
                append_field(&mut block, field);
            }
            blocks.push(block);
        }

        for field in &self.fields {
            blocks.push(render_getter(field));
            blocks.push(render_setter(field));
        }

        blocks.extend(self.methods.iter().cloned());
        blocks
    }
}

fn append_field(out: &mut String, field: &JavaField) {
    if let Some(javadoc) = &field.javadoc {
        append_javadoc(out, INDENT, javadoc);
    }
    if field.deprecated {
        out.push_str(INDENT);
        out.push_str("@Deprecated\n");
    }
    out.push_str(&format!(
        "{}private {} {};\n",
        INDENT, field.type_ref, field.name
    ));
}

fn render_getter(field: &JavaField) -> String {
    let prefix = if field.type_ref == "boolean" { "is" } else { "get" };
    format!(
        "{i}public {t} {p}{n}() {{\n{i}{i}return {f};\n{i}}}\n",
        i = INDENT,
        t = field.type_ref,
        p = prefix,
        n = capitalize(&field.name),
        f = field.name
    )
}

fn render_setter(field: &JavaField) -> String {
    let signature = format!(
        "{}public void set{}({} {}) {{",
        INDENT,
        capitalize(&field.name),
        field.type_ref,
        field.name
    );
    let opening = if signature.len() <= MAX_LINE_WIDTH {
        format!("{}\n", signature)
    } else {
        // parameter moves to a continuation line two levels deeper
        format!(
            "{i}public void set{n}(\n{i}{i}{i}{t} {f}) {{\n",
            i = INDENT,
            n = capitalize(&field.name),
            t = field.type_ref,
            f = field.name
        )
    };
    format!(
        "{o}{i}{i}this.{f} = {f};\n{i}}}\n",
        o = opening,
        i = INDENT,
        f = field.name
    )
}

/// Render a javadoc block, greedily word-wrapped so each line stays within
/// the overall line width.
fn append_javadoc(out: &mut String, indent: &str, text: &str) {
    let width = MAX_LINE_WIDTH.saturating_sub(indent.len() + 3);
    out.push_str(indent);
    out.push_str("/**\n");
    for line in wrap_words(text, width) {
        out.push_str(indent);
        out.push_str(" * ");
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(indent);
    out.push_str(" */\n");
}

fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Split generic arguments at top-level commas only.
fn split_type_arguments(arguments: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in arguments.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(arguments[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    let last = arguments[start..].trim();
    if !last.is_empty() {
        parts.push(last);
    }
    parts
}
