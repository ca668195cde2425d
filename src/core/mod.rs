pub mod ast;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Synthetic name given to constructors. Used for change detection only,
/// never for alphabetic comparison.
pub const CONSTRUCTOR_NAME: &str = "Constructor";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberKind {
    Field,
    Method,
    Constructor,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberKind::Field => write!(f, "field"),
            MemberKind::Method => write!(f, "method"),
            MemberKind::Constructor => write!(f, "constructor"),
        }
    }
}

/// Member visibility. `protected` and unmarked members count as public.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// The `(kind, name)` projection used to compare member orders.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    pub kind: MemberKind,
    pub name: String,
}

impl Signature {
    pub fn new(kind: MemberKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.name)
    }
}

/// Immutable snapshot of one class member.
///
/// A method and its overload signatures form a single unit: they are
/// classified, sorted and rendered together, keyed by the method's name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub kind: MemberKind,
    pub name: String,
    pub is_static: bool,
    pub visibility: Visibility,
    /// Verbatim member text, leading comments and decorators included.
    pub source_text: String,
    /// Signature-only declarations preceding the implementation, in
    /// declaration order.
    pub overload_signatures: Vec<String>,
    /// The text ends in a `//` comment, so nothing may follow it on its line.
    pub ends_with_line_comment: bool,
}

impl Member {
    pub fn new(
        kind: MemberKind,
        name: impl Into<String>,
        is_static: bool,
        visibility: Visibility,
        source_text: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            is_static,
            visibility,
            source_text: source_text.into(),
            overload_signatures: Vec::new(),
            ends_with_line_comment: false,
        }
    }

    pub fn with_overloads(mut self, overloads: Vec<String>) -> Self {
        self.overload_signatures = overloads;
        self
    }

    pub fn with_line_comment_end(mut self, ends_with_line_comment: bool) -> Self {
        self.ends_with_line_comment = ends_with_line_comment;
        self
    }

    pub fn signature(&self) -> Signature {
        Signature::new(self.kind, self.name.clone())
    }

    /// Render the unit: overload signatures on consecutive lines, then the
    /// implementation, separated by `newline`.
    pub fn render(&self, newline: &str) -> String {
        if self.overload_signatures.is_empty() {
            return self.source_text.clone();
        }

        let mut out = self.overload_signatures.join(newline);
        out.push_str(newline);
        out.push_str(&self.source_text);
        out
    }
}

/// Outcome of running the pipeline on one class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassResult {
    pub class_name: String,
    pub original_order: Vec<Signature>,
    pub new_order: Vec<Signature>,
    /// Replacement for the class's member list span. Present only when the
    /// order changed.
    pub recomposed_text: Option<String>,
}

impl ClassResult {
    pub fn is_changed(&self) -> bool {
        self.recomposed_text.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_overloads_is_verbatim() {
        let member = Member::new(
            MemberKind::Method,
            "alpha",
            false,
            Visibility::Public,
            "    /** doc */\n    alpha() {}",
        );
        assert_eq!(member.render("\n"), "    /** doc */\n    alpha() {}");
    }

    #[test]
    fn test_render_keeps_overloads_adjacent() {
        let member = Member::new(
            MemberKind::Method,
            "process",
            false,
            Visibility::Public,
            "    process(x: any): any { return x; }",
        )
        .with_overloads(vec![
            "    process(x: string): string;".to_string(),
            "    process(x: number): number;".to_string(),
        ]);

        assert_eq!(
            member.render("\n"),
            "    process(x: string): string;\n    process(x: number): number;\n    process(x: any): any { return x; }"
        );
    }

    #[test]
    fn test_render_uses_file_line_ending() {
        let member = Member::new(
            MemberKind::Method,
            "parse",
            false,
            Visibility::Public,
            "    parse(x: any) {}",
        )
        .with_overloads(vec!["    parse(x: string): void;".to_string()]);

        assert_eq!(
            member.render("\r\n"),
            "    parse(x: string): void;\r\n    parse(x: any) {}"
        );
    }

    #[test]
    fn test_signature_display() {
        let sig = Signature::new(MemberKind::Constructor, CONSTRUCTOR_NAME);
        assert_eq!(sig.to_string(), "constructor Constructor");
    }
}
