use polydoc_core::ExtractionResult;

use crate::output::output;

/// JSON Schema of the extraction output.
pub fn output_schema() -> schemars::Schema {
    schemars::schema_for!(ExtractionResult)
}

/// Handle `polydoc --schema`.
pub fn handle(pretty: bool) -> anyhow::Result<()> {
    output(&output_schema(), pretty)
}
