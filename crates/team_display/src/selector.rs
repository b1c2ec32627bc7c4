use std::collections::HashMap;

/// Build a selector options map from `(value, label)` pairs, adding a
/// blank entry for the unselected state.
///
/// Later pairs win on duplicate values.
pub fn selector_options_with_blank(options: &[(String, String)]) -> HashMap<String, String> {
    let mut map: HashMap<String, String> = options.iter().cloned().collect();
    map.insert(String::new(), String::new());
    map
}
