use crate::view_model::BannerView;

/// Severity tag applied when a caller does not supply one.
pub const DEFAULT_SEVERITY: &str = "warning";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BannerState {
    visible: bool,
    severity_tags: Vec<String>,
    text: String,
    dirty: bool,
}

impl BannerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> BannerView {
        BannerView {
            visible: self.visible,
            severity_tags: self.severity_tags.clone(),
            text: self.text.clone(),
        }
    }

    /// Reports whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn show(&mut self, message: String, severity: String) {
        self.visible = true;
        // Severity tags behave like a class list: a new tag is appended and
        // earlier ones stay in place until the page tears the region down.
        if !self.severity_tags.iter().any(|tag| *tag == severity) {
            self.severity_tags.push(severity);
        }
        self.text = message;
        self.dirty = true;
    }

    pub(crate) fn hide(&mut self) {
        // Text and severity tags stay stale until the next show.
        if self.visible {
            self.visible = false;
            self.dirty = true;
        }
    }
}
