use serde::{Deserialize, Serialize};
use std::fmt;

/// A strict major/minor/patch triple. Pre-release and build metadata are
/// accepted on input but never represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    pub first: Version,
    pub second: Version,
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "First = {}; Second = {}", self.first, self.second)
    }
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct EncodeReport {
    pub combined: Version,
    pub first: Version,
    pub second: Version,
}

#[derive(Debug, Serialize)]
pub struct DecodeReport {
    pub combined: Version,
    pub first: Version,
    pub second: Version,
}

#[derive(Debug, Serialize)]
pub struct VersionReport {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub encode: EncodeSettings,
}

#[derive(Debug, Deserialize, Default)]
pub struct EncodeSettings {
    /// Fixed packing width; automatic selection when absent.
    #[serde(default)]
    pub width: Option<u8>,
}
