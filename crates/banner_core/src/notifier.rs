use banner_logging::banner_debug;

use crate::{update, BannerState, BannerView, Effect, Msg, RegionSurface, ServerResponse};

/// Drives a status region through an injected surface.
///
/// The notifier is constructed with its target surface rather than
/// resolving a well-known page element itself, so independent instances
/// can coexist and tests can observe the surface directly. Each operation
/// dispatches one message through the pure update function, re-renders
/// when the state changed, then performs the emitted effects.
pub struct MessageNotifier<S: RegionSurface> {
    state: BannerState,
    surface: S,
}

impl<S: RegionSurface> MessageNotifier<S> {
    /// Create a notifier for a hidden region rendered through `surface`.
    pub fn new(surface: S) -> Self {
        Self {
            state: BannerState::new(),
            surface,
        }
    }

    /// Display `message` with the given severity tag.
    ///
    /// Passing `None` applies the `"warning"` default. Focus moves to the
    /// region on every call.
    pub fn show(&mut self, message: &str, severity: Option<&str>) {
        self.dispatch(Msg::ShowRequested {
            message: message.to_string(),
            severity: severity.map(ToOwned::to_owned),
        });
    }

    /// Hide the region. Text and severity tags are left as they were.
    pub fn hide(&mut self) {
        self.dispatch(Msg::HideRequested);
    }

    /// Translate a raw server response into a user-visible message.
    ///
    /// Shows the decoded `user_message` when the body carries one and
    /// `fallback` otherwise. Decode problems stay internal; the caller
    /// always ends up with a visible message.
    pub fn report_from_response(
        &mut self,
        response: &ServerResponse,
        fallback: &str,
        severity: Option<&str>,
    ) {
        self.dispatch(Msg::ResponseReported {
            body: response.body.clone(),
            fallback: fallback.to_string(),
            severity: severity.map(ToOwned::to_owned),
        });
    }

    /// Current view of the region.
    pub fn view(&self) -> BannerView {
        self.state.view()
    }

    fn dispatch(&mut self, msg: Msg) {
        banner_debug!("Dispatching {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.surface.apply(&state.view());
        }
        self.state = state;
        for effect in effects {
            match effect {
                Effect::FocusRegion => self.surface.focus(),
            }
        }
    }
}
