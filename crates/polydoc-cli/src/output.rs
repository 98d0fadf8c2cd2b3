use std::io::Write;

use anyhow::Context;
use serde::Serialize;

/// Render a serializable value as one line of JSON, or indented when `pretty`.
pub fn render<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

/// Print a serializable value to stdout, exactly once.
pub fn output<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    write_to(&mut std::io::stdout().lock(), value, pretty)
}

/// Write the rendered value and a trailing newline to `writer`.
pub fn write_to<W: Write, T: Serialize>(
    writer: &mut W,
    value: &T,
    pretty: bool,
) -> anyhow::Result<()> {
    let rendered = render(value, pretty)?;
    writeln!(writer, "{rendered}")
        .and_then(|()| writer.flush())
        .context("failed to write output")
}
