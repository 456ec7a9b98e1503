use tracing::debug;

/// Fills the empty `candidates` from `leftover`, left to right.
///
/// Slots already set by a flag are copied through untouched and consume
/// nothing. A slot stays `""` once `leftover` runs out; extra arguments are
/// ignored.
pub fn resolve_positional<S: AsRef<str>>(leftover: &[S], candidates: &[&str]) -> Vec<String> {
    let mut args = leftover.iter().map(AsRef::<str>::as_ref);

    let resolved: Vec<String> = candidates
        .iter()
        .map(|candidate| {
            if !candidate.is_empty() {
                return candidate.to_string();
            }
            args.next().map(str::to_string).unwrap_or_default()
        })
        .collect();

    let ignored: Vec<&str> = args.collect();
    debug!(?resolved, ?ignored, "resolved positional slots");
    resolved
}
