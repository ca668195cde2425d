//! Member snapshot extraction.
//!
//! Turns the syntax tree's member handles into immutable [`Member`]
//! snapshots, preserving source order.

use super::OverloadPolicy;
use crate::analyzers::typescript::{ClassDeclaration, HandleKind, MemberHandle};
use crate::core::{Member, MemberKind, CONSTRUCTOR_NAME};
use crate::errors::{Result, SortError};

/// Snapshot every member of `class`.
///
/// Fails on the first handle that has no place in the canonical order.
/// Under [`OverloadPolicy::Reject`] any overloaded member fails with
/// [`SortError::OverloadsRejected`].
pub fn extract_members(class: &ClassDeclaration, policy: OverloadPolicy) -> Result<Vec<Member>> {
    class
        .members
        .iter()
        .map(|handle| snapshot(class.display_name(), handle, policy))
        .collect()
}

fn snapshot(class: &str, handle: &MemberHandle, policy: OverloadPolicy) -> Result<Member> {
    let kind = match &handle.kind {
        HandleKind::Field => MemberKind::Field,
        HandleKind::Method => MemberKind::Method,
        HandleKind::Constructor => MemberKind::Constructor,
        HandleKind::OrphanSignature => {
            return Err(SortError::unsupported(
                class,
                format!(
                    "overload signature `{}` at line {} has no implementation",
                    handle.name, handle.line
                ),
            ));
        }
        HandleKind::Unsupported(node_kind) => {
            return Err(SortError::unsupported(
                class,
                format!("`{}` at line {} cannot be reordered", node_kind, handle.line),
            ));
        }
    };

    if !handle.overload_signatures.is_empty() {
        if kind == MemberKind::Field {
            return Err(SortError::unsupported(
                class,
                format!("field `{}` cannot carry overload signatures", handle.name),
            ));
        }
        if policy == OverloadPolicy::Reject {
            return Err(SortError::OverloadsRejected {
                class: class.to_string(),
            });
        }
    }

    let name = match kind {
        MemberKind::Constructor => CONSTRUCTOR_NAME.to_string(),
        _ => handle.name.clone(),
    };

    Ok(Member::new(
        kind,
        name,
        handle.is_static,
        handle.visibility,
        handle.full_text.clone(),
    )
    .with_overloads(handle.overload_signatures.clone())
    .with_line_comment_end(handle.ends_with_line_comment))
}
