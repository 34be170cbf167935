//! JSON Schema validation for catalog files.
//!
//! The schema shipped in `schema/document_catalog.schema.json` is compiled
//! into the binary so validation works without a checkout; callers may point
//! at another schema file instead.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::path::Path;

const EMBEDDED_SCHEMA: &str = include_str!("../schema/document_catalog.schema.json");

/// A compiled catalog schema.
pub struct CatalogSchema {
    compiled: JSONSchema,
    source: String,
}

impl CatalogSchema {
    /// The schema bundled with this build.
    pub fn embedded() -> Result<Self> {
        let schema: Value =
            serde_json::from_str(EMBEDDED_SCHEMA).context("parsing embedded catalog schema")?;
        Self::compile(&schema, "embedded catalog schema".to_string())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let schema: Value = serde_json::from_reader(
            File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
        )
        .with_context(|| format!("parsing schema {}", path.display()))?;
        Self::compile(&schema, path.display().to_string())
    }

    fn compile(schema: &Value, source: String) -> Result<Self> {
        let compiled = JSONSchema::compile(schema)
            .map_err(|err| anyhow!("compiling {source}: {err}"))?;
        Ok(Self { compiled, source })
    }

    /// Validate `instance`, reporting every violation with its JSON pointer.
    pub fn validate(&self, instance: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details = errors
                .map(|err| format!("{}: {}", err.instance_path, err))
                .collect::<Vec<_>>()
                .join("\n");
            bail!("catalog failed validation against {}:\n{}", self.source, details);
        }
        Ok(())
    }
}
