use pretty_assertions::assert_eq;
use team_display::team_capacity_text;

#[test]
fn singular_capacity() {
    assert_eq!(team_capacity_text(1, 1), "1 / 1 Member");
}

#[test]
fn plural_capacity() {
    assert_eq!(team_capacity_text(2, 10), "2 / 10 Members");
}

#[test]
fn plural_form_follows_capacity_not_head_count() {
    // A solo member on a larger roster still reads "Members".
    assert_eq!(team_capacity_text(1, 5), "1 / 5 Members");
}

#[test]
fn zero_capacity_is_plural() {
    assert_eq!(team_capacity_text(0, 0), "0 / 0 Members");
}
