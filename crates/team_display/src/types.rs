use serde::Deserialize;

/// One record from the team membership endpoint.
///
/// Unknown endpoint fields are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TeamMembership {
    pub user: MemberIdentity,
}

/// Nested user object carried by a membership record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemberIdentity {
    pub username: String,
}
