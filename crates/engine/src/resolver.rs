//! Resource-type resolution - from an abstract type token to the
//! concrete pool of eligible roster members.

use crewbldr_domain::{StaffMember, TypeToken};

/// Resolve a requirement's type token against the roster.
///
/// "ANY Staff" is the whole roster; "ANY Expert" is every Expert-class
/// member; a concrete category matches the exact type plus subtypes
/// whose parent is that category. Pool order is roster order and
/// members appear at most once.
pub fn eligible_pool<'a>(token: TypeToken, roster: &'a [StaffMember]) -> Vec<&'a StaffMember> {
    roster
        .iter()
        .filter(|member| match token {
            TypeToken::AnyStaff => true,
            TypeToken::AnyExpert => member.staff_type.is_expert(),
            TypeToken::Type(category) => member.staff_type.matches_category(category),
        })
        .collect()
}
