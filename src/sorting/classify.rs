//! Bucket classification.

use crate::core::{Member, MemberKind, Visibility};
use serde::{Deserialize, Serialize};

/// The nine member categories, declared in canonical output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Bucket {
    StaticPublicField,
    StaticPrivateField,
    StaticPublicMethod,
    StaticPrivateMethod,
    PublicField,
    PrivateField,
    Constructor,
    PublicMethod,
    PrivateMethod,
}

impl Bucket {
    pub const ALL: [Bucket; 9] = [
        Bucket::StaticPublicField,
        Bucket::StaticPrivateField,
        Bucket::StaticPublicMethod,
        Bucket::StaticPrivateMethod,
        Bucket::PublicField,
        Bucket::PrivateField,
        Bucket::Constructor,
        Bucket::PublicMethod,
        Bucket::PrivateMethod,
    ];

    /// Zero-based position in the canonical order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Constructors keep their relative order; every other bucket is sorted
    /// by name.
    pub fn is_sorted_by_name(self) -> bool {
        self != Bucket::Constructor
    }
}

/// Assign a member to its bucket.
///
/// A constructor always lands in [`Bucket::Constructor`], whatever its
/// reported modifiers.
pub fn classify(member: &Member) -> Bucket {
    match (member.kind, member.is_static, member.visibility) {
        (MemberKind::Constructor, _, _) => Bucket::Constructor,
        (MemberKind::Field, true, Visibility::Public) => Bucket::StaticPublicField,
        (MemberKind::Field, true, Visibility::Private) => Bucket::StaticPrivateField,
        (MemberKind::Method, true, Visibility::Public) => Bucket::StaticPublicMethod,
        (MemberKind::Method, true, Visibility::Private) => Bucket::StaticPrivateMethod,
        (MemberKind::Field, false, Visibility::Public) => Bucket::PublicField,
        (MemberKind::Field, false, Visibility::Private) => Bucket::PrivateField,
        (MemberKind::Method, false, Visibility::Public) => Bucket::PublicMethod,
        (MemberKind::Method, false, Visibility::Private) => Bucket::PrivateMethod,
    }
}

/// Members grouped by bucket. Each list keeps the relative order in which
/// members were added.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Buckets {
    lists: [Vec<Member>; 9],
}

impl Buckets {
    pub fn get(&self, bucket: Bucket) -> &[Member] {
        &self.lists[bucket.index()]
    }

    pub(crate) fn get_mut(&mut self, bucket: Bucket) -> &mut Vec<Member> {
        &mut self.lists[bucket.index()]
    }

    /// All members in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.lists.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn classify_members(members: Vec<Member>) -> Buckets {
    let mut buckets = Buckets::default();
    for member in members {
        let bucket = classify(&member);
        buckets.get_mut(bucket).push(member);
    }
    buckets
}
