//! Width-marker packing of two versions into one.
//!
//! The minor and patch fields of the combined version each carry both input
//! values: a leading digit `w` followed by the first value and then the second
//! value, both zero-padded to `w` digits. Minor `20102` reads as width 2,
//! first `01`, second `02`. Each field picks its own width.
//!
//! The combined major is the first version's major; a differing second major
//! cannot be recovered.

use crate::domain::models::{Pair, Version};
use std::fmt;
use tracing::{debug, warn};

/// Narrowest width picked automatically.
pub const MIN_AUTO_WIDTH: u8 = 2;

/// Widest width a single marker digit can describe.
pub const MAX_WIDTH: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Minor,
    Patch,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Minor => f.write_str("minor"),
            Field::Patch => f.write_str("patch"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PairingError {
    #[error("packing width must be between 1 and 9, got {0}")]
    InvalidWidth(u8),
    #[error("{field} value {value} does not fit in {width} digits")]
    ComponentTooWide { field: Field, value: u64, width: u8 },
    #[error("{field} field {value} is not a valid packed value")]
    MalformedField { field: Field, value: u64 },
}

/// Digits per packed sub-value, always within `1..=MAX_WIDTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Width(u8);

impl Width {
    pub fn new(digits: u8) -> Result<Self, PairingError> {
        if (1..=MAX_WIDTH).contains(&digits) {
            Ok(Self(digits))
        } else {
            Err(PairingError::InvalidWidth(digits))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    fn limit(self) -> u64 {
        10u64.pow(u32::from(self.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Packing {
    /// Per field, the narrowest width (at least [`MIN_AUTO_WIDTH`]) that
    /// holds both values.
    #[default]
    Auto,
    Fixed(Width),
}

pub fn encode(pair: &Pair, packing: Packing) -> Result<Version, PairingError> {
    let Pair { first, second } = pair;
    if first.major != second.major {
        warn!(
            first = first.major,
            second = second.major,
            "majors differ; only the first major is kept"
        );
    }

    let minor = pack(Field::Minor, first.minor, second.minor, packing)?;
    let patch = pack(Field::Patch, first.patch, second.patch, packing)?;
    Ok(Version::new(first.major, minor, patch))
}

pub fn decode(version: &Version) -> Result<Pair, PairingError> {
    let (first_minor, second_minor) = unpack(Field::Minor, version.minor)?;
    let (first_patch, second_patch) = unpack(Field::Patch, version.patch)?;
    Ok(Pair {
        first: Version::new(version.major, first_minor, first_patch),
        second: Version::new(version.major, second_minor, second_patch),
    })
}

fn pack(field: Field, first: u64, second: u64, packing: Packing) -> Result<u64, PairingError> {
    let widest = first.max(second);
    let width = match packing {
        Packing::Fixed(width) => width,
        Packing::Auto => {
            let needed = digits(widest).max(u32::from(MIN_AUTO_WIDTH));
            match u8::try_from(needed).ok().map(Width::new) {
                Some(Ok(width)) => width,
                _ => {
                    return Err(PairingError::ComponentTooWide {
                        field,
                        value: widest,
                        width: MAX_WIDTH,
                    })
                }
            }
        }
    };

    let limit = width.limit();
    if widest >= limit {
        return Err(PairingError::ComponentTooWide {
            field,
            value: widest,
            width: width.get(),
        });
    }

    let packed = u64::from(width.get()) * limit * limit + first * limit + second;
    debug!(%field, first, second, width = width.get(), packed, "packed field");
    Ok(packed)
}

fn unpack(field: Field, value: u64) -> Result<(u64, u64), PairingError> {
    let malformed = PairingError::MalformedField { field, value };
    let total = digits(value);
    if value == 0 {
        return Err(malformed);
    }

    let marker = value / 10u64.pow(total - 1);
    let width = u8::try_from(marker)
        .ok()
        .and_then(|marker| Width::new(marker).ok())
        .ok_or_else(|| malformed.clone())?;
    if total - 1 != 2 * u32::from(width.get()) {
        return Err(malformed);
    }

    let limit = width.limit();
    Ok(((value / limit) % limit, value % limit))
}

fn digits(value: u64) -> u32 {
    value.checked_ilog10().map_or(1, |log| log + 1)
}

#[cfg(test)]
mod tests {
    use super::{decode, encode, Field, Packing, PairingError, Width};
    use crate::domain::models::{Pair, Version};

    fn pair(first: Version, second: Version) -> Pair {
        Pair { first, second }
    }

    fn fixed(digits: u8) -> Packing {
        Packing::Fixed(Width::new(digits).unwrap())
    }

    #[test]
    fn decodes_known_fixtures() {
        let cases = [
            ((1, 20000, 20000), (1, 0, 0), (1, 0, 0)),
            ((1, 20000, 20001), (1, 0, 0), (1, 0, 1)),
            ((1, 3000000, 3000001), (1, 0, 0), (1, 0, 1)),
            ((1, 20102, 20001), (1, 1, 0), (1, 2, 1)),
            ((1, 3001002, 3000001), (1, 1, 0), (1, 2, 1)),
        ];
        for ((ma, mi, pa), (a1, a2, a3), (b1, b2, b3)) in cases {
            let got = decode(&Version::new(ma, mi, pa)).unwrap();
            assert_eq!(got.first, Version::new(a1, a2, a3));
            assert_eq!(got.second, Version::new(b1, b2, b3));
        }
    }

    #[test]
    fn auto_width_is_at_least_two_digits() {
        let got = encode(
            &pair(Version::new(1, 0, 0), Version::new(1, 0, 1)),
            Packing::Auto,
        )
        .unwrap();
        assert_eq!(got, Version::new(1, 20000, 20001));
    }

    #[test]
    fn auto_width_grows_per_field() {
        let got = encode(
            &pair(Version::new(2, 5, 123), Version::new(2, 7, 4)),
            Packing::Auto,
        )
        .unwrap();
        assert_eq!(got, Version::new(2, 20507, 3123004));
    }

    #[test]
    fn fixed_width_matches_fixture() {
        let got = encode(
            &pair(Version::new(1, 1, 0), Version::new(1, 2, 1)),
            fixed(3),
        )
        .unwrap();
        assert_eq!(got, Version::new(1, 3001002, 3000001));
    }

    #[test]
    fn fixed_width_rejects_values_that_do_not_fit() {
        let err = encode(
            &pair(Version::new(1, 100, 0), Version::new(1, 2, 0)),
            fixed(2),
        )
        .unwrap_err();
        assert_eq!(
            err,
            PairingError::ComponentTooWide {
                field: Field::Minor,
                value: 100,
                width: 2
            }
        );
    }

    #[test]
    fn auto_width_rejects_ten_digit_values() {
        let err = encode(
            &pair(Version::new(1, 0, 1_000_000_000), Version::new(1, 0, 0)),
            Packing::Auto,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PairingError::ComponentTooWide {
                field: Field::Patch,
                width: 9,
                ..
            }
        ));
    }

    #[test]
    fn widest_values_still_fit_in_u64() {
        let max = 999_999_999;
        let p = pair(Version::new(3, max, max), Version::new(3, max, 0));
        let combined = encode(&p, Packing::Auto).unwrap();
        assert_eq!(decode(&combined).unwrap(), p);
    }

    #[test]
    fn width_bounds_are_enforced() {
        assert_eq!(Width::new(0), Err(PairingError::InvalidWidth(0)));
        assert_eq!(Width::new(10), Err(PairingError::InvalidWidth(10)));
        assert_eq!(Width::new(9).map(Width::get), Ok(9));
    }

    #[test]
    fn malformed_fields_are_rejected() {
        for (minor, patch) in [(0, 20000), (2000, 20000), (20000, 5), (200000, 20000)] {
            assert!(
                decode(&Version::new(1, minor, patch)).is_err(),
                "{minor}.{patch}"
            );
        }
    }

    #[test]
    fn round_trips_within_width() {
        let cases = [
            pair(Version::new(1, 0, 0), Version::new(1, 0, 1)),
            pair(Version::new(4, 12, 3), Version::new(4, 13, 0)),
            pair(Version::new(0, 1, 99), Version::new(0, 42, 7)),
            pair(Version::new(9, 123_456, 7), Version::new(9, 5, 88_888)),
        ];
        for p in cases {
            let combined = encode(&p, Packing::Auto).unwrap();
            assert_eq!(decode(&combined).unwrap(), p, "{combined}");
        }
    }

    #[test]
    fn second_major_is_lost() {
        let combined = encode(
            &pair(Version::new(1, 2, 3), Version::new(2, 4, 5)),
            Packing::Auto,
        )
        .unwrap();
        let back = decode(&combined).unwrap();
        assert_eq!(back.first, Version::new(1, 2, 3));
        assert_eq!(back.second, Version::new(1, 4, 5));
    }
}
