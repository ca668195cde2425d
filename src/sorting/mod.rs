//! Member classification, sorting and recomposition.
//!
//! The pipeline for one class is pure:
//!
//! 1. `extract`: member handles become [`Member`](crate::core::Member) snapshots
//! 2. `classify`: snapshots are split into the nine canonical buckets
//! 3. `sort`: buckets are sorted by name (constructors excepted)
//! 4. `detect`: the canonical `(kind, name)` sequence is compared with the
//!    original one
//! 5. `recompose`: only when the order changed, the member list text is
//!    rebuilt
//!
//! [`sort_source`] runs the pipeline over every class of one file and splices
//! the rebuilt member lists into the original text.

pub mod classify;
pub mod collation;
pub mod detect;
pub mod extract;
pub mod filter;
pub mod recompose;
pub mod sort;

pub use classify::{classify, classify_members, Bucket, Buckets};
pub use collation::compare_names;
pub use filter::{ClassFilter, DocTagFilter, NoFilter, DEFAULT_SKIP_TAG};

use crate::analyzers::parse_classes;
use crate::analyzers::typescript::ClassDeclaration;
use crate::core::ClassResult;
use crate::errors::{Result, SortError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How overloaded methods are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverloadPolicy {
    /// Move signatures and implementation together as one unit
    #[default]
    Group,
    /// Refuse to touch a file that declares overloads
    Reject,
}

/// Run the classification pipeline on one class.
pub fn process_class(class: &ClassDeclaration, policy: OverloadPolicy) -> Result<ClassResult> {
    let members = extract::extract_members(class, policy)?;
    let original_order = detect::signatures(&members);

    let mut buckets = classify_members(members);
    sort::sort_buckets(&mut buckets);
    let new_order = detect::canonical_signatures(&buckets);

    let recomposed_text = detect::order_changed(&original_order, &new_order).then(|| {
        let mut text = recompose::recompose(&buckets, class.newline);
        if let Some(closing) = &class.shared_closing_line {
            text.push_str(&recompose::closing_separator(&buckets, closing, class.newline));
        }
        text
    });

    Ok(ClassResult {
        class_name: class.display_name().to_string(),
        original_order,
        new_order,
        recomposed_text,
    })
}

/// What happened to one class of a file.
#[derive(Debug)]
pub enum ClassOutcome {
    Reordered { class: String, line: usize },
    Unchanged { class: String },
    Skipped { class: String },
    Failed { class: String, error: SortError },
}

/// Result of sorting one file's text.
#[derive(Debug, Default)]
pub struct SourceOutcome {
    /// Full replacement text, present only if at least one class changed
    pub contents: Option<String>,
    pub classes: Vec<ClassOutcome>,
}

impl SourceOutcome {
    pub fn reordered_classes(&self) -> Vec<String> {
        self.classes
            .iter()
            .filter_map(|outcome| match outcome {
                ClassOutcome::Reordered { class, .. } => Some(class.clone()),
                _ => None,
            })
            .collect()
    }
}

/// Sort every class of a source file.
///
/// A class that cannot be classified is reported in the outcome and left
/// as written while the other classes are still processed. Parse failures
/// and rejected overloads fail the whole file.
pub fn sort_source(
    source: &str,
    path: &Path,
    policy: OverloadPolicy,
    filter: &dyn ClassFilter,
) -> Result<SourceOutcome> {
    let classes = parse_classes(source, path)?;

    let mut replacements = Vec::new();
    let mut outcomes = Vec::with_capacity(classes.len());

    for class in &classes {
        let name = class.display_name().to_string();

        if filter.should_skip(class) {
            outcomes.push(ClassOutcome::Skipped { class: name });
            continue;
        }

        match process_class(class, policy) {
            Ok(result) => match (result.recomposed_text, &class.members_span) {
                (Some(text), Some(span)) => {
                    replacements.push((span.clone(), text));
                    outcomes.push(ClassOutcome::Reordered {
                        class: name,
                        line: class.line,
                    });
                }
                _ => outcomes.push(ClassOutcome::Unchanged { class: name }),
            },
            Err(error) if error.is_file_level() => return Err(error),
            Err(error) => outcomes.push(ClassOutcome::Failed { class: name, error }),
        }
    }

    let contents = (!replacements.is_empty()).then(|| recompose::splice(source, replacements));

    Ok(SourceOutcome {
        contents,
        classes: outcomes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MemberKind, Signature, CONSTRUCTOR_NAME};
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn sort(source: &str) -> SourceOutcome {
        sort_source(source, &PathBuf::from("test.ts"), OverloadPolicy::Group, &NoFilter).unwrap()
    }

    #[test]
    fn test_unsorted_methods_are_reordered() {
        let outcome = sort(indoc! {"
            class Example {
                beta() {}
                alpha() {}
            }
        "});

        assert_eq!(
            outcome.contents.as_deref(),
            Some(indoc! {"
                class Example {
                    alpha() {}

                    beta() {}
                }
            "})
        );
        assert_eq!(outcome.reordered_classes(), vec!["Example".to_string()]);
    }

    #[test]
    fn test_sorted_class_is_untouched() {
        let outcome = sort(indoc! {"
            class Example {
                alpha() {}
                beta() {}
            }
        "});

        assert!(outcome.contents.is_none());
        assert!(matches!(outcome.classes[0], ClassOutcome::Unchanged { .. }));
    }

    #[test]
    fn test_process_class_reports_both_orders() {
        let source = indoc! {"
            class Example {
                run() {}
                constructor() {}
                id = 1;
            }
        "};
        let classes = parse_classes(source, &PathBuf::from("test.ts")).unwrap();
        let result = process_class(&classes[0], OverloadPolicy::Group).unwrap();

        assert_eq!(
            result.original_order,
            vec![
                Signature::new(MemberKind::Method, "run"),
                Signature::new(MemberKind::Constructor, CONSTRUCTOR_NAME),
                Signature::new(MemberKind::Field, "id"),
            ]
        );
        assert_eq!(
            result.new_order,
            vec![
                Signature::new(MemberKind::Field, "id"),
                Signature::new(MemberKind::Constructor, CONSTRUCTOR_NAME),
                Signature::new(MemberKind::Method, "run"),
            ]
        );
        assert!(result.is_changed());
    }

    #[test]
    fn test_failed_class_does_not_block_others() {
        let outcome = sort(indoc! {"
            class Broken {
                [key: string]: unknown;
                b() {}
            }

            class Fine {
                b() {}
                a() {}
            }
        "});

        assert!(matches!(
            &outcome.classes[0],
            ClassOutcome::Failed { class, .. } if class == "Broken"
        ));
        assert_eq!(outcome.reordered_classes(), vec!["Fine".to_string()]);
        let contents = outcome.contents.unwrap();
        assert!(contents.contains("    [key: string]: unknown;\n    b() {}\n}"));
        assert!(contents.ends_with("    a() {}\n\n    b() {}\n}\n"));
    }

    #[test]
    fn test_reject_policy_fails_whole_file() {
        let source = indoc! {"
            class Overloaded {
                process(x: string): string;
                process(x: any): any { return x; }
            }
        "};
        let err = sort_source(source, &PathBuf::from("test.ts"), OverloadPolicy::Reject, &NoFilter)
            .unwrap_err();
        assert!(matches!(err, SortError::OverloadsRejected { .. }));
    }

    #[test]
    fn test_skipped_class_is_reported() {
        let source = indoc! {"
            /** @internal_sort skip */
            class Skipped {
                b() {}
                a() {}
            }
        "};
        let outcome =
            sort_source(source, &PathBuf::from("test.ts"), OverloadPolicy::Group, &DocTagFilter::default())
                .unwrap();

        assert!(outcome.contents.is_none());
        assert!(matches!(outcome.classes[0], ClassOutcome::Skipped { .. }));
    }

    #[test]
    fn test_line_comment_moved_last_does_not_swallow_brace() {
        let outcome = sort("class Point {\n    y = 2; // vertical\n    x = 1; }\n");
        let contents = outcome.contents.unwrap();

        assert_eq!(contents, "class Point {\n    x = 1;\n\n    y = 2; // vertical\n}\n");
        assert!(sort(&contents).contents.is_none());
    }

    #[test]
    fn test_brace_on_last_line_kept_when_no_comment_moves() {
        let outcome = sort("class Point {\n    y = 2;\n    x = 1; // horizontal\n    a() {} }\n");

        assert_eq!(
            outcome.contents.as_deref(),
            Some("class Point {\n    x = 1; // horizontal\n\n    y = 2;\n\n    a() {} }\n")
        );
    }

    #[test]
    fn test_header_comment_stays_on_header_line() {
        let outcome = sort("class A { // keep\n    b() {}\n    a() {}\n}\n");

        assert_eq!(
            outcome.contents.as_deref(),
            Some("class A { // keep\n    a() {}\n\n    b() {}\n}\n")
        );
    }

    #[test]
    fn test_crlf_line_endings_are_preserved() {
        let outcome = sort("class A {\r\n    b() {}\r\n    a() {}\r\n}\r\n");

        assert_eq!(
            outcome.contents.as_deref(),
            Some("class A {\r\n    a() {}\r\n\r\n    b() {}\r\n}\r\n")
        );
    }

    #[test]
    fn test_parse_failure_fails_file() {
        let err = sort_source("class {", &PathBuf::from("bad.ts"), OverloadPolicy::Group, &NoFilter)
            .unwrap_err();
        assert!(matches!(err, SortError::Parse { .. }));
    }
}
