//! Classification types

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Concept sets produced by the extension override classification.
///
/// `BothInternational` and `InternationalSourceOnly` are diagnostics; the other
/// three are axiom strategies and partition every extension-modified concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Bucket {
    /// Extension relationship with international source and destination
    BothInternational,
    /// Extension relationship with international source only (needs a GCI)
    InternationalSourceOnly,
    /// Primitive axiom from extension data alone
    NoInternationalModelNeeded,
    /// No is-a and ungrouped: an is-a must be added by hand first
    NeedsManualIsA,
    /// Grouped attributes: the international stated view is required
    RequiresInternationalStatedView,
}

impl Bucket {
    pub const ALL: [Bucket; 5] = [
        Self::BothInternational,
        Self::InternationalSourceOnly,
        Self::NoInternationalModelNeeded,
        Self::NeedsManualIsA,
        Self::RequiresInternationalStatedView,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::BothInternational => "both-international",
            Self::InternationalSourceOnly => "international-source-only",
            Self::NoInternationalModelNeeded => "no-international-model-needed",
            Self::NeedsManualIsA => "needs-manual-is-a",
            Self::RequiresInternationalStatedView => "requires-international-stated-view",
        }
    }

    /// Whether concepts in this bucket can be handed to axiom generation.
    pub fn is_axiom_strategy(&self) -> bool {
        !matches!(self, Self::BothInternational | Self::InternationalSourceOnly)
    }

    /// Audit report file for this bucket.
    pub fn report_file_name(&self) -> &'static str {
        match self {
            Self::BothInternational => "StatedRelationshipsToBeConvertedUsingAdditionalAxioms.txt",
            Self::InternationalSourceOnly => "StatedRelationshipToBeConvertedUsingGCIs.txt",
            Self::NoInternationalModelNeeded => "StatedRelationshipsToAxiomsWithoutIntStatedView.txt",
            Self::NeedsManualIsA => "StatedRelationshipsToAxiomsToAddIsA.txt",
            Self::RequiresInternationalStatedView => {
                "StatedRelationshipsToAxiomsRequiringIntStatedView.txt"
            }
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::BothInternational => {
                "concepts with extension stated relationships between international concepts"
            }
            Self::InternationalSourceOnly => {
                "concepts with extension stated relationships to non-international destinations"
            }
            Self::NoInternationalModelNeeded => {
                "concepts to create axioms without the international model"
            }
            Self::NeedsManualIsA => "concepts needing an is-a added manually",
            Self::RequiresInternationalStatedView => {
                "concepts requiring the international stated view"
            }
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown bucket name
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown bucket `{0}` (expected one of: both-international, international-source-only, no-international-model-needed, needs-manual-is-a, requires-international-stated-view)")]
pub struct ParseBucketError(pub String);

impl FromStr for Bucket {
    type Err = ParseBucketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.name() == s)
            .ok_or_else(|| ParseBucketError(s.to_string()))
    }
}

/// Frozen result of one classification run.
///
/// Read-only once built; share it by reference between the report writer and
/// the converter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub(crate) extension_module_id: Option<u64>,
    pub(crate) both_international: BTreeSet<u64>,
    pub(crate) international_source_only: BTreeSet<u64>,
    pub(crate) no_international_model_needed: BTreeSet<u64>,
    pub(crate) needs_manual_is_a: BTreeSet<u64>,
    pub(crate) requires_international_stated_view: BTreeSet<u64>,
    pub(crate) both_international_relationships: usize,
}

impl Classification {
    /// The extension module seen in the input, if any.
    pub fn extension_module_id(&self) -> Option<u64> {
        self.extension_module_id
    }

    /// Concepts in `bucket`, ascending.
    pub fn concepts(&self, bucket: Bucket) -> &BTreeSet<u64> {
        match bucket {
            Bucket::BothInternational => &self.both_international,
            Bucket::InternationalSourceOnly => &self.international_source_only,
            Bucket::NoInternationalModelNeeded => &self.no_international_model_needed,
            Bucket::NeedsManualIsA => &self.needs_manual_is_a,
            Bucket::RequiresInternationalStatedView => &self.requires_international_stated_view,
        }
    }

    /// The axiom strategy chosen for a concept.
    pub fn strategy_for(&self, concept_id: u64) -> Option<Bucket> {
        Bucket::ALL
            .into_iter()
            .filter(Bucket::is_axiom_strategy)
            .find(|b| self.concepts(*b).contains(&concept_id))
    }

    /// Number of extension relationships retired because both ends are international.
    pub fn both_international_relationships(&self) -> usize {
        self.both_international_relationships
    }

    /// Concept count per bucket, in [`Bucket::ALL`] order.
    pub fn counts(&self) -> Vec<(Bucket, usize)> {
        Bucket::ALL
            .into_iter()
            .map(|b| (b, self.concepts(b).len()))
            .collect()
    }
}
