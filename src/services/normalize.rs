use crate::domain::models::Version;
use tracing::debug;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{input:?} was not a valid semver string")]
pub struct InvalidVersion {
    pub input: String,
}

/// Reduces `raw` to `vMAJOR.MINOR.PATCH[-PRERELEASE]`.
///
/// Shorthand `vMAJOR` and `vMAJOR.MINOR` forms are padded with zeros, build
/// metadata is dropped. Returns `None` when `raw` is not a semantic version
/// or lacks the leading `v`.
pub fn canonical(raw: &str) -> Option<String> {
    let body = raw.strip_prefix('v')?;

    // Shorthand is only allowed on a bare numeric core.
    let padded = if body.contains(['-', '+']) {
        body.to_string()
    } else {
        match body.split('.').count() {
            1 => format!("{body}.0.0"),
            2 => format!("{body}.0"),
            _ => body.to_string(),
        }
    };

    let parsed = semver::Version::parse(&padded).ok()?;
    let mut out = format!("v{}.{}.{}", parsed.major, parsed.minor, parsed.patch);
    if !parsed.pre.is_empty() {
        out.push('-');
        out.push_str(parsed.pre.as_str());
    }
    Some(out)
}

/// Parses a free-form version string into a [`Version`].
///
/// A missing `v` prefix is added first, so `1.2.3` and `v1.2.3` are the same
/// input. Pre-release and build metadata are discarded.
pub fn normalize(raw: &str) -> Result<Version, InvalidVersion> {
    let prefixed = if raw.starts_with('v') {
        raw.to_string()
    } else {
        format!("v{raw}")
    };

    let canonical = canonical(&prefixed).ok_or_else(|| InvalidVersion {
        input: prefixed.clone(),
    })?;

    let (core, metadata) = split_metadata(&canonical);
    if !metadata.is_empty() {
        debug!(%canonical, metadata, "discarding pre-release metadata");
    }

    let parts: Vec<&str> = core.trim_start_matches('v').split('.').collect();
    let [major, minor, patch] = parts[..] else {
        panic!("canonical version {canonical:?} does not have three components");
    };

    let version = Version::new(component(major), component(minor), component(patch));
    debug!(raw, %version, "normalized version");
    Ok(version)
}

fn split_metadata(canonical: &str) -> (&str, &str) {
    match canonical.find(['-', '+']) {
        Some(at) => canonical.split_at(at),
        None => (canonical, ""),
    }
}

fn component(segment: &str) -> u64 {
    segment
        .parse()
        .unwrap_or_else(|e| panic!("canonical version component {segment:?} is not numeric: {e}"))
}
