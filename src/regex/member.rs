//! Class member membership tests.

use crate::fragment::Fragment;

use super::ast::ClassMember;

/// Length consumed by `member` at the front of `input`, or `None`.
pub fn member_len(member: &ClassMember, input: Fragment<'_>) -> Option<usize> {
    match member {
        ClassMember::Literal(text) => input.starts_with(text).then_some(text.len()),
        ClassMember::Interval { first, last } => {
            let ch = input.peek()?;
            (*first <= ch && ch <= *last).then_some(1)
        }
    }
}

/// Length consumed by the first member of `members` that matches.
///
/// Members are tried in declaration order; the first one wins.
pub fn first_member_len(members: &[ClassMember], input: Fragment<'_>) -> Option<usize> {
    members.iter().find_map(|m| member_len(m, input))
}
