/// Pick the singular or plural template for `count`.
///
/// Two-form selection: 1 is singular, everything else (including 0) is
/// plural.
pub fn select_plural<'a>(singular: &'a str, plural: &'a str, count: u64) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

/// Substitute `{token}` placeholders in `template` from named pairs.
///
/// Placeholders without a matching pair are left untouched; pairs without
/// a matching placeholder are ignored.
pub fn interpolate(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{interpolate, select_plural};

    #[test]
    fn one_is_singular() {
        assert_eq!(select_plural("Member", "Members", 1), "Member");
    }

    #[test]
    fn zero_and_many_are_plural() {
        assert_eq!(select_plural("Member", "Members", 0), "Members");
        assert_eq!(select_plural("Member", "Members", 7), "Members");
    }

    #[test]
    fn substitutes_named_tokens() {
        let text = interpolate(
            "{count} of {total}",
            &[("count", "2".to_string()), ("total", "5".to_string())],
        );
        assert_eq!(text, "2 of 5");
    }

    #[test]
    fn unknown_tokens_are_left_in_place() {
        let text = interpolate("{known} and {unknown}", &[("known", "x".to_string())]);
        assert_eq!(text, "x and {unknown}");
    }

    #[test]
    fn unused_pairs_are_ignored() {
        assert_eq!(interpolate("plain", &[("extra", "y".to_string())]), "plain");
    }
}
