use super::classify::Buckets;
use crate::core::{Member, Signature};

pub fn signatures(members: &[Member]) -> Vec<Signature> {
    members.iter().map(Member::signature).collect()
}

pub fn canonical_signatures(buckets: &Buckets) -> Vec<Signature> {
    buckets.iter().map(Member::signature).collect()
}

/// Sequence equality on `(kind, name)` projections. Two orders holding the
/// same members in different positions are a change.
pub fn order_changed(original: &[Signature], canonical: &[Signature]) -> bool {
    original != canonical
}
