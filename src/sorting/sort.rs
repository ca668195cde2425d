use super::classify::{Bucket, Buckets};
use super::collation::compare_names;

/// Sort every name-ordered bucket in place.
///
/// `sort_by` is stable, so members sharing a name (getter/setter pairs,
/// abstract overloads) keep their original relative order. The constructor
/// bucket is left untouched.
pub fn sort_buckets(buckets: &mut Buckets) {
    for bucket in Bucket::ALL {
        if bucket.is_sorted_by_name() {
            buckets
                .get_mut(bucket)
                .sort_by(|a, b| compare_names(&a.name, &b.name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Member, MemberKind, Visibility};
    use crate::sorting::classify::classify_members;

    fn method(name: &str, text: &str) -> Member {
        Member::new(MemberKind::Method, name, false, Visibility::Public, text)
    }

    #[test]
    fn test_sorts_by_name() {
        let mut buckets = classify_members(vec![method("beta", "b"), method("alpha", "a")]);
        sort_buckets(&mut buckets);

        let names: Vec<_> = buckets.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_equal_names_keep_original_order() {
        let mut buckets = classify_members(vec![
            method("value", "get value()"),
            method("alpha", "alpha()"),
            method("value", "set value(v)"),
        ]);
        sort_buckets(&mut buckets);

        let texts: Vec<_> = buckets.iter().map(|m| m.source_text.as_str()).collect();
        assert_eq!(texts, vec!["alpha()", "get value()", "set value(v)"]);
    }

    #[test]
    fn test_constructors_are_not_reordered() {
        let ctor = |text: &str| {
            Member::new(MemberKind::Constructor, "Constructor", false, Visibility::Public, text)
        };
        let mut buckets = classify_members(vec![ctor("second"), ctor("first")]);
        sort_buckets(&mut buckets);

        let texts: Vec<_> = buckets
            .get(Bucket::Constructor)
            .iter()
            .map(|m| m.source_text.as_str())
            .collect();
        assert_eq!(texts, vec!["second", "first"]);
    }
}
