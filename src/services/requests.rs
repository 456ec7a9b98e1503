use crate::domain::models::{Pair, Version};
use crate::services::normalize::{normalize, InvalidVersion};
use crate::services::pairing::{self, Packing, PairingError};
use std::fmt;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    First,
    Second,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::First => f.write_str("first"),
            Operand::Second => f.write_str("second"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    #[error("both first and second versions must be set")]
    MissingOperand,
    #[error("error decoding {operand} version")]
    InvalidVersion {
        operand: Operand,
        #[source]
        source: InvalidVersion,
    },
    #[error("could not encode version pair")]
    Pairing(#[source] PairingError),
}

#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("version string is required")]
    MissingOperand,
    #[error("could not decode version")]
    InvalidVersion(#[source] InvalidVersion),
    #[error("could not split combined version")]
    Pairing(#[source] PairingError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded {
    pub pair: Pair,
    pub combined: Version,
}

#[instrument(level = "debug", skip(packing))]
pub fn encode_request(first: &str, second: &str, packing: Packing) -> Result<Encoded, EncodeError> {
    if first.is_empty() || second.is_empty() {
        return Err(EncodeError::MissingOperand);
    }

    let operand = |operand, raw: &str| {
        normalize(raw).map_err(|source| EncodeError::InvalidVersion { operand, source })
    };
    let pair = Pair {
        first: operand(Operand::First, first)?,
        second: operand(Operand::Second, second)?,
    };

    let combined = pairing::encode(&pair, packing).map_err(EncodeError::Pairing)?;
    Ok(Encoded { pair, combined })
}

#[instrument(level = "debug")]
pub fn decode_request(combined: &str) -> Result<Pair, DecodeError> {
    if combined.is_empty() {
        return Err(DecodeError::MissingOperand);
    }

    let version = normalize(combined).map_err(DecodeError::InvalidVersion)?;
    let pair = pairing::decode(&version).map_err(DecodeError::Pairing)?;
    debug!(%version, %pair, "decoded combined version");
    Ok(pair)
}
