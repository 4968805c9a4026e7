//! Knitting stitch catalogue

use serde::{Deserialize, Serialize};

/// Enumerated skill tag attached to a member (针法)
///
/// `Ord` is derived so stitch sets serialize in a stable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KnittingStitch {
    Garter,
    Stockinette,
    Ribbing,
    Seed,
    Moss,
    Cable,
    BeginnerLace,
    AdvancedLace,
    Brioche,
    FairIsle,
    Intarsia,
}
