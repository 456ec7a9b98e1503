use crate::domain::models::JsonOut;
use serde::Serialize;

/// Writes one report to stdout: the `{ ok, data }` envelope under `--json`,
/// otherwise the single text line built by `line`.
pub fn print_report<T: Serialize>(
    json: bool,
    report: &T,
    line: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    let rendered = if json {
        serde_json::to_string_pretty(&JsonOut {
            ok: true,
            data: report,
        })?
    } else {
        line(report)
    };
    println!("{rendered}");
    Ok(())
}
