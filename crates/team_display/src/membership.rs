use crate::TeamMembership;

/// Whether any membership record belongs to `username`.
///
/// Usernames are exact identifiers; the comparison is case-sensitive.
pub fn is_user_member(memberships: &[TeamMembership], username: &str) -> bool {
    memberships
        .iter()
        .any(|membership| membership.user.username == username)
}
