//! Class discovery and member handles
//!
//! Walks the tree-sitter AST for class declarations and exposes each class
//! member as a [`MemberHandle`]: its shape, name, modifiers and verbatim
//! text. Comments and decorators that precede a member belong to it, as do
//! a trailing `;` and a comment on the same line as its end.

use crate::analyzers::typescript::parser::{node_line, node_text};
use crate::core::ast::TypeScriptAst;
use crate::core::Visibility;
use std::ops::Range;
use tree_sitter::Node;

/// Shape of a member as reported by the syntax tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandleKind {
    Field,
    Method,
    Constructor,
    /// Overload signature with no implementation following it
    OrphanSignature,
    /// Node kind with no place in the canonical order (index signature,
    /// static block, ...)
    Unsupported(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberHandle {
    pub kind: HandleKind,
    pub name: String,
    pub is_static: bool,
    pub visibility: Visibility,
    pub full_text: String,
    pub overload_signatures: Vec<String>,
    pub line: usize,
    /// The text ends in a `//` comment
    pub ends_with_line_comment: bool,
}

#[derive(Clone, Debug)]
pub struct ClassDeclaration {
    pub name: Option<String>,
    pub line: usize,
    /// Comment immediately preceding the declaration (or its `export`)
    pub doc_comment: Option<String>,
    pub members: Vec<MemberHandle>,
    /// Byte range covering every member, from the indentation of the first
    /// to the end of the last. `None` for an empty class body.
    pub members_span: Option<Range<usize>>,
    /// Set when code such as the closing brace follows the last member on
    /// its line. The span then also covers the whitespace before that code.
    pub shared_closing_line: Option<SharedClosingLine>,
    /// Line ending used by the file, `"\n"` or `"\r\n"`
    pub newline: &'static str,
}

/// Layout of a line the last member shares with the code after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedClosingLine {
    /// Whitespace between the last member and the code after it
    pub gap: String,
    /// Indentation of the line the class starts on
    pub indent: String,
}

impl ClassDeclaration {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<anonymous>")
    }
}

/// Collect every class in the file that is not nested in another class.
pub fn collect_classes(ast: &TypeScriptAst) -> Vec<ClassDeclaration> {
    let mut classes = Vec::new();
    collect_recursive(&ast.tree.root_node(), &ast.source, &mut classes);

    let newline = line_ending(&ast.source);
    for class in &mut classes {
        class.newline = newline;
    }
    classes
}

/// `"\r\n"` when the file uses Windows line endings, `"\n"` otherwise.
pub fn line_ending(source: &str) -> &'static str {
    if source.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

fn collect_recursive(node: &Node, source: &str, classes: &mut Vec<ClassDeclaration>) {
    let mut cursor = node.walk();

    for child in node.children(&mut cursor) {
        if is_class_node(&child) {
            if let Some(class) = build_class(&child, source) {
                classes.push(class);
            }
        } else {
            collect_recursive(&child, source, classes);
        }
    }
}

fn is_class_node(node: &Node) -> bool {
    node.is_named()
        && matches!(
            node.kind(),
            "class_declaration" | "abstract_class_declaration" | "class"
        )
}

fn build_class(node: &Node, source: &str) -> Option<ClassDeclaration> {
    let body = node.child_by_field_name("body")?;
    let ambient = node
        .parent()
        .is_some_and(|parent| parent.kind() == "ambient_declaration");

    let entries = scan_class_body(&body, source, ambient);
    let (members_span, shared_closing_line) = match (entries.first(), entries.last()) {
        (Some(first), Some(last)) => {
            let shared = shared_closing_line(source, last.end, node.start_byte());
            let end = last.end + shared.as_ref().map_or(0, |line| line.gap.len());
            (Some(extend_to_line_start(source, first.start)..end), shared)
        }
        _ => (None, None),
    };

    Some(ClassDeclaration {
        name: class_name(node, source),
        line: node_line(node),
        doc_comment: leading_comment(node, source),
        members: group_overloads(entries, source),
        members_span,
        shared_closing_line,
        newline: "\n",
    })
}

fn shared_closing_line(source: &str, end: usize, class_start: usize) -> Option<SharedClosingLine> {
    let rest = &source[end..];
    let line = rest.split('\n').next().unwrap_or(rest);
    let code = line.trim_start_matches([' ', '\t']);
    if code.trim().is_empty() {
        return None;
    }

    let line_start = source[..class_start].rfind('\n').map_or(0, |i| i + 1);
    let indent = source[line_start..]
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .collect();

    Some(SharedClosingLine {
        gap: line[..line.len() - code.len()].to_string(),
        indent,
    })
}

fn class_name(node: &Node, source: &str) -> Option<String> {
    if let Some(name) = node.child_by_field_name("name") {
        return Some(node_text(&name, source).to_string());
    }

    // const Foo = class { ... }
    node.parent()
        .filter(|parent| parent.kind() == "variable_declarator")
        .and_then(|parent| parent.child_by_field_name("name"))
        .map(|name| node_text(&name, source).to_string())
}

fn leading_comment(node: &Node, source: &str) -> Option<String> {
    let mut anchor = *node;
    while let Some(parent) = anchor.parent() {
        if matches!(parent.kind(), "export_statement" | "ambient_declaration") {
            anchor = parent;
        } else {
            break;
        }
    }

    anchor
        .prev_sibling()
        .filter(|prev| prev.kind() == "comment")
        .map(|comment| node_text(&comment, source).to_string())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shape {
    Field,
    Method,
    Constructor,
    Signature,
    Unsupported,
}

#[derive(Debug)]
struct RawEntry {
    shape: Shape,
    node_kind: &'static str,
    name: String,
    is_static: bool,
    visibility: Visibility,
    start: usize,
    end: usize,
    end_row: usize,
    line: usize,
    line_comment_tail: bool,
}

impl RawEntry {
    fn text(&self, source: &str) -> String {
        source[extend_to_line_start(source, self.start)..self.end].to_string()
    }

    fn into_handle(self, source: &str, overload_signatures: Vec<String>) -> MemberHandle {
        let kind = match self.shape {
            Shape::Field => HandleKind::Field,
            Shape::Method => HandleKind::Method,
            Shape::Constructor => HandleKind::Constructor,
            Shape::Signature => HandleKind::OrphanSignature,
            Shape::Unsupported => HandleKind::Unsupported(self.node_kind.to_string()),
        };

        MemberHandle {
            kind,
            full_text: self.text(source),
            name: self.name,
            is_static: self.is_static,
            visibility: self.visibility,
            overload_signatures,
            line: self.line,
            ends_with_line_comment: self.line_comment_tail,
        }
    }
}

fn scan_class_body(body: &Node, source: &str, ambient: bool) -> Vec<RawEntry> {
    let mut entries: Vec<RawEntry> = Vec::new();
    let mut pending_start: Option<usize> = None;
    let header_row = body.start_position().row;
    let mut cursor = body.walk();

    for child in body.children(&mut cursor) {
        match child.kind() {
            "{" | "}" => {}
            // `class A { // note` stays with the header
            "comment"
                if entries.is_empty()
                    && pending_start.is_none()
                    && child.start_position().row == header_row => {}
            "comment" | "decorator" => {
                let trailing = child.kind() == "comment"
                    && pending_start.is_none()
                    && entries
                        .last()
                        .is_some_and(|last| last.end_row == child.start_position().row);

                match entries.last_mut() {
                    Some(last) if trailing => {
                        last.end = child.end_byte();
                        last.line_comment_tail = node_text(&child, source).starts_with("//");
                    }
                    _ => {
                        pending_start.get_or_insert(child.start_byte());
                    }
                }
            }
            ";" | "," => {
                if pending_start.is_none() {
                    if let Some(last) = entries.last_mut() {
                        last.end = child.end_byte();
                        last.end_row = child.end_position().row;
                        last.line_comment_tail = false;
                    }
                }
            }
            _ => {
                let start = pending_start.take().unwrap_or(child.start_byte());
                entries.push(raw_entry(&child, source, start, ambient));
            }
        }
    }

    entries
}

fn raw_entry(node: &Node, source: &str, start: usize, ambient: bool) -> RawEntry {
    let name_node = node
        .child_by_field_name("name")
        .or_else(|| node.child_by_field_name("property"));
    let name = name_node
        .map(|n| node_text(&n, source).to_string())
        .unwrap_or_else(|| node.kind().to_string());
    let is_static = has_static_modifier(node, name_node.as_ref());

    let shape = match node.kind() {
        "public_field_definition" | "field_definition" => Shape::Field,
        "method_definition" | "method_signature" | "abstract_method_signature"
            if name == "constructor" && !is_static =>
        {
            match node.kind() {
                "method_signature" if !ambient => Shape::Signature,
                _ => Shape::Constructor,
            }
        }
        "method_definition" | "abstract_method_signature" => Shape::Method,
        "method_signature" if ambient => Shape::Method,
        "method_signature" => Shape::Signature,
        _ => Shape::Unsupported,
    };

    RawEntry {
        shape,
        node_kind: node.kind(),
        visibility: member_visibility(node, &name, source),
        name,
        is_static,
        start,
        end: node.end_byte(),
        end_row: node.end_position().row,
        line: node_line(node),
        line_comment_tail: false,
    }
}

/// Modifiers precede the member name, so only those children are inspected.
fn has_static_modifier(node: &Node, name_node: Option<&Node>) -> bool {
    let name_start = name_node.map_or(usize::MAX, |n| n.start_byte());
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .take_while(|child| child.start_byte() < name_start)
        .any(|child| matches!(child.kind(), "static" | "static get"));
    found
}

fn member_visibility(node: &Node, name: &str, source: &str) -> Visibility {
    if name.starts_with('#') {
        return Visibility::Private;
    }

    let mut cursor = node.walk();
    let private = node
        .children(&mut cursor)
        .filter(|child| child.kind() == "accessibility_modifier")
        .any(|modifier| node_text(&modifier, source).trim() == "private");

    if private {
        Visibility::Private
    } else {
        Visibility::Public
    }
}

/// Attach consecutive overload signatures to the implementation that
/// follows them. Signatures left without a same-named implementation are
/// reported as orphans.
fn group_overloads(entries: Vec<RawEntry>, source: &str) -> Vec<MemberHandle> {
    let mut handles = Vec::with_capacity(entries.len());
    let mut pending: Vec<RawEntry> = Vec::new();

    for entry in entries {
        match entry.shape {
            Shape::Signature => {
                if pending.last().is_some_and(|p| p.name != entry.name) {
                    flush_orphans(&mut pending, &mut handles, source);
                }
                pending.push(entry);
            }
            Shape::Method | Shape::Constructor
                if pending.first().is_some_and(|p| p.name == entry.name) =>
            {
                let overloads = pending.drain(..).map(|p| p.text(source)).collect();
                handles.push(entry.into_handle(source, overloads));
            }
            _ => {
                flush_orphans(&mut pending, &mut handles, source);
                handles.push(entry.into_handle(source, Vec::new()));
            }
        }
    }

    flush_orphans(&mut pending, &mut handles, source);
    handles
}

fn flush_orphans(pending: &mut Vec<RawEntry>, handles: &mut Vec<MemberHandle>, source: &str) {
    handles.extend(pending.drain(..).map(|p| p.into_handle(source, Vec::new())));
}

/// Move `pos` back to the start of its line when only indentation precedes it.
fn extend_to_line_start(source: &str, pos: usize) -> usize {
    let line_start = source[..pos].rfind('\n').map_or(0, |i| i + 1);
    if source[line_start..pos]
        .chars()
        .all(|c| c == ' ' || c == '\t')
    {
        line_start
    } else {
        pos
    }
}
