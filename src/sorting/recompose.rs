use super::classify::Buckets;
use crate::analyzers::typescript::SharedClosingLine;

/// Serialize sorted buckets into the text of a class's member list.
///
/// Members are emitted in canonical bucket order, each rendered verbatim
/// (overload signatures first, then the implementation) and separated by
/// exactly one blank line in the file's line ending.
pub fn recompose(buckets: &Buckets, newline: &str) -> String {
    buckets
        .iter()
        .map(|member| member.render(newline))
        .collect::<Vec<_>>()
        .join(&newline.repeat(2))
}

/// Text placed between the recomposed member list and code that shared the
/// last member's line. A `//` comment ending the new last member would
/// swallow that code, so it then moves to its own line at the class's
/// indentation.
pub fn closing_separator(buckets: &Buckets, closing: &SharedClosingLine, newline: &str) -> String {
    if buckets.iter().last().is_some_and(|member| member.ends_with_line_comment) {
        format!("{newline}{}", closing.indent)
    } else {
        closing.gap.clone()
    }
}

/// Replace non-overlapping byte ranges of `source`. Everything outside the
/// ranges is copied unchanged.
pub fn splice(source: &str, mut replacements: Vec<(std::ops::Range<usize>, String)>) -> String {
    replacements.sort_by_key(|(range, _)| range.start);

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    for (range, text) in replacements {
        out.push_str(&source[cursor..range.start]);
        out.push_str(&text);
        cursor = range.end;
    }
    out.push_str(&source[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Member, MemberKind, Visibility};
    use crate::sorting::classify::classify_members;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_recompose_joins_with_blank_line() {
        let buckets = classify_members(vec![
            Member::new(MemberKind::Field, "count", false, Visibility::Public, "    count = 0;"),
            Member::new(MemberKind::Method, "run", false, Visibility::Public, "    run() {}"),
        ]);

        assert_eq!(recompose(&buckets, "\n"), "    count = 0;\n\n    run() {}");
        assert_eq!(recompose(&buckets, "\r\n"), "    count = 0;\r\n\r\n    run() {}");
    }

    #[test]
    fn test_recompose_is_deterministic() {
        let buckets = classify_members(vec![
            Member::new(MemberKind::Method, "a", false, Visibility::Public, "a() {}"),
            Member::new(MemberKind::Method, "b", true, Visibility::Private, "static b() {}"),
        ]);

        assert_eq!(recompose(&buckets, "\n"), recompose(&buckets.clone(), "\n"));
    }

    #[test]
    fn test_closing_separator_breaks_after_line_comment() {
        let closing = SharedClosingLine {
            gap: " ".to_string(),
            indent: "  ".to_string(),
        };
        let commented = classify_members(vec![
            Member::new(MemberKind::Field, "x", false, Visibility::Public, "    x = 1;"),
            Member::new(MemberKind::Field, "y", false, Visibility::Public, "    y = 2; // vertical")
                .with_line_comment_end(true),
        ]);
        let plain = classify_members(vec![
            Member::new(MemberKind::Field, "x", false, Visibility::Public, "    x = 1; /* x */"),
        ]);

        assert_eq!(closing_separator(&commented, &closing, "\n"), "\n  ");
        assert_eq!(closing_separator(&commented, &closing, "\r\n"), "\r\n  ");
        assert_eq!(closing_separator(&plain, &closing, "\n"), " ");
    }

    #[test]
    fn test_splice_replaces_ranges_only() {
        let source = "head [one] middle [two] tail";
        let out = splice(
            source,
            vec![(18..23, "<2>".to_string()), (5..10, "<1>".to_string())],
        );
        assert_eq!(out, "head <1> middle <2> tail");
    }

    #[test]
    fn test_splice_without_replacements_is_identity() {
        assert_eq!(splice("unchanged", Vec::new()), "unchanged");
    }
}
