// Copyright 2026 the Tidepool Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Link registry types and validation.
//!
//! A page is driven by a static ordered slice of [`LinkRecord`]s. Each record
//! carries an explicit [`LinkAction`] — what activating the link *does* is a
//! data field, never inferred from the display label. The legacy label-encoded
//! form (a mail link recognized by its platform name, with the address hidden
//! behind a `"gmail : "` prefix) is still importable via [`resolve_labeled`].
//!
//! Registries are static data, not user input, so malformed entries are a
//! composition-time failure: run [`validate_registry`] once at startup and
//! treat an error as fatal.

use core::fmt;

use crate::time::Duration;

/// A handle to a link in its registry's declared order.
///
/// Plain slot index — registries are immutable for the life of a page, so
/// there is no generation counter to track slot reuse.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkId(pub u32);

impl LinkId {
    /// Returns the raw slot index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinkId({})", self.0)
    }
}

/// What activating a link does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkAction<'a> {
    /// Open `url` in a new, unrelated browsing context.
    Navigate {
        /// Destination URL, passed through unmodified.
        url: &'a str,
    },
    /// Navigate the current context to a mail composition for `address`.
    Email {
        /// Bare address, without any `mailto:` scheme.
        address: &'a str,
    },
}

impl<'a> LinkAction<'a> {
    /// Returns the raw target string (URL or address).
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &'a str {
        match self {
            Self::Navigate { url } => url,
            Self::Email { address } => address,
        }
    }
}

/// Platform name that marks a mail link in the legacy label-encoded form.
pub const LEGACY_MAIL_PLATFORM: &str = "Gmail";

/// Literal prefix carried by legacy mail targets.
pub const LEGACY_MAIL_PREFIX: &str = "gmail : ";

/// Resolves a legacy label-encoded record into an explicit [`LinkAction`].
///
/// The source data encoded behavior in the display label: a record whose
/// platform is [`LEGACY_MAIL_PLATFORM`] is a mail action, with the address
/// obtained by stripping [`LEGACY_MAIL_PREFIX`] from the raw target (a target
/// without the prefix is used as-is). Every other record is a navigation with
/// the raw target unmodified.
#[must_use]
pub fn resolve_labeled<'a>(platform: &str, raw_target: &'a str) -> LinkAction<'a> {
    if platform == LEGACY_MAIL_PLATFORM {
        let address = raw_target
            .strip_prefix(LEGACY_MAIL_PREFIX)
            .unwrap_or(raw_target);
        LinkAction::Email { address }
    } else {
        LinkAction::Navigate { url: raw_target }
    }
}

/// One advertised outbound destination and its display metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkRecord<'a> {
    /// Display name, unique within the registry.
    pub platform: &'a str,
    /// What activating this record does.
    pub action: LinkAction<'a>,
    /// Time after page mount before this record becomes visible.
    ///
    /// Delays should be non-decreasing in declared order for the staggered
    /// reveal to read top-to-bottom; out-of-order delays are benign and
    /// simply reveal out of visual order.
    pub reveal_delay: Duration,
    /// Whether to render an attention badge.
    pub highlighted: bool,
}

/// A malformed entry in static registry data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// A record has an empty platform name.
    EmptyPlatform {
        /// Slot index of the offending record.
        index: u32,
    },
    /// A record's action has an empty target.
    EmptyTarget {
        /// Slot index of the offending record.
        index: u32,
    },
    /// Two records share a platform name.
    DuplicatePlatform {
        /// Slot index of the second occurrence.
        index: u32,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPlatform { index } => {
                write!(f, "registry entry {index} has an empty platform name")
            }
            Self::EmptyTarget { index } => {
                write!(f, "registry entry {index} has an empty target")
            }
            Self::DuplicatePlatform { index } => {
                write!(f, "registry entry {index} repeats an earlier platform name")
            }
        }
    }
}

impl core::error::Error for RegistryError {}

/// Validates static registry data, failing fast on malformed entries.
///
/// Checks for empty platform names, empty action targets, and duplicate
/// platform names. Registries are small (single digits), so the duplicate
/// scan is quadratic without apology.
pub fn validate_registry(records: &[LinkRecord<'_>]) -> Result<(), RegistryError> {
    for (i, record) in records.iter().enumerate() {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "registries are tiny; indices fit in u32"
        )]
        let index = i as u32;
        if record.platform.is_empty() {
            return Err(RegistryError::EmptyPlatform { index });
        }
        if record.action.target().is_empty() {
            return Err(RegistryError::EmptyTarget { index });
        }
        if records[..i].iter().any(|r| r.platform == record.platform) {
            return Err(RegistryError::DuplicatePlatform { index });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record<'a>(platform: &'a str, action: LinkAction<'a>) -> LinkRecord<'a> {
        LinkRecord {
            platform,
            action,
            reveal_delay: Duration(100),
            highlighted: false,
        }
    }

    #[test]
    fn legacy_mail_record_strips_prefix() {
        let action = resolve_labeled("Gmail", "gmail : a@b.com");
        assert_eq!(action, LinkAction::Email { address: "a@b.com" });
    }

    #[test]
    fn legacy_mail_record_without_prefix_keeps_target() {
        let action = resolve_labeled("Gmail", "a@b.com");
        assert_eq!(action, LinkAction::Email { address: "a@b.com" });
    }

    #[test]
    fn legacy_other_record_navigates_unmodified() {
        let action = resolve_labeled("Instagram", "https://example.com/x");
        assert_eq!(
            action,
            LinkAction::Navigate {
                url: "https://example.com/x"
            }
        );
    }

    #[test]
    fn validate_accepts_well_formed_registry() {
        let records = [
            record("A", LinkAction::Navigate { url: "https://a" }),
            record("B", LinkAction::Email { address: "b@c" }),
        ];
        assert_eq!(validate_registry(&records), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_platform() {
        let records = [record("", LinkAction::Navigate { url: "https://a" })];
        assert_eq!(
            validate_registry(&records),
            Err(RegistryError::EmptyPlatform { index: 0 })
        );
    }

    #[test]
    fn validate_rejects_empty_target() {
        let records = [record("A", LinkAction::Email { address: "" })];
        assert_eq!(
            validate_registry(&records),
            Err(RegistryError::EmptyTarget { index: 0 })
        );
    }

    #[test]
    fn validate_rejects_duplicate_platform() {
        let records = [
            record("A", LinkAction::Navigate { url: "https://a" }),
            record("A", LinkAction::Navigate { url: "https://b" }),
        ];
        assert_eq!(
            validate_registry(&records),
            Err(RegistryError::DuplicatePlatform { index: 1 })
        );
    }

    #[test]
    fn out_of_order_delays_are_accepted() {
        let mut a = record("A", LinkAction::Navigate { url: "https://a" });
        let mut b = record("B", LinkAction::Navigate { url: "https://b" });
        a.reveal_delay = Duration(900);
        b.reveal_delay = Duration(100);
        assert_eq!(validate_registry(&[a, b]), Ok(()));
    }
}
