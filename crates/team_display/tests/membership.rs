use pretty_assertions::assert_eq;
use team_display::{is_user_member, MemberIdentity, TeamMembership};

fn roster(usernames: &[&str]) -> Vec<TeamMembership> {
    usernames
        .iter()
        .map(|username| TeamMembership {
            user: MemberIdentity {
                username: (*username).to_string(),
            },
        })
        .collect()
}

#[test]
fn member_is_found() {
    let memberships = roster(&["andya", "bob"]);
    assert!(is_user_member(&memberships, "andya"));
    assert!(is_user_member(&memberships, "bob"));
}

#[test]
fn non_member_is_not_found() {
    let memberships = roster(&["andya", "bob"]);
    assert!(!is_user_member(&memberships, "carol"));
}

#[test]
fn empty_roster_has_no_members() {
    assert!(!is_user_member(&[], "andya"));
}

#[test]
fn username_comparison_is_case_sensitive() {
    let memberships = roster(&["Andya"]);
    assert!(!is_user_member(&memberships, "andya"));
}

#[test]
fn records_decode_from_endpoint_shape() {
    let body = r#"[
        {"user": {"username": "andya", "url": "http://example.com/api/user/v1/accounts/andya"}},
        {"user": {"username": "bob"}}
    ]"#;
    let records: Vec<TeamMembership> = serde_json::from_str(body).unwrap();

    assert_eq!(records.len(), 2);
    assert!(is_user_member(&records, "andya"));
    assert!(!is_user_member(&records, "carol"));
}
