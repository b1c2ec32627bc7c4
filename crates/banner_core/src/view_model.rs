/// Renderable snapshot of the status region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BannerView {
    pub visible: bool,
    pub severity_tags: Vec<String>,
    pub text: String,
}

impl BannerView {
    /// The most recently applied severity tag, if any.
    pub fn current_severity(&self) -> Option<&str> {
        self.severity_tags.last().map(String::as_str)
    }
}
