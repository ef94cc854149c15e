pub mod json_schema;
pub mod model_builder;
pub mod schema_reader;

pub use json_schema::{FieldRow, SchemaDocument};
pub use model_builder::build_component_model;
pub use schema_reader::SchemaReader;
