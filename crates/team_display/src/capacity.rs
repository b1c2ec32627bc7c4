use crate::{interpolate, select_plural};

/// Render the "members / capacity" line for a team card.
pub fn team_capacity_text(member_count: u64, max_member_count: u64) -> String {
    // The plural form follows the capacity, not the current head count.
    let template = select_plural(
        "{member_count} / {max_member_count} Member",
        "{member_count} / {max_member_count} Members",
        max_member_count,
    );
    interpolate(
        template,
        &[
            ("member_count", member_count.to_string()),
            ("max_member_count", max_member_count.to_string()),
        ],
    )
}
