use banner_logging::banner_warn;

use crate::{decode, BannerState, Effect, Msg, DEFAULT_SEVERITY};

/// Pure update function: applies a message to state and returns any effects.
///
/// Every show transition emits [`Effect::FocusRegion`], including shows that
/// re-display unchanged content.
pub fn update(mut state: BannerState, msg: Msg) -> (BannerState, Vec<Effect>) {
    let effects = match msg {
        Msg::ShowRequested { message, severity } => {
            state.show(message, resolve_severity(severity));
            vec![Effect::FocusRegion]
        }
        Msg::HideRequested => {
            state.hide();
            Vec::new()
        }
        Msg::ResponseReported {
            body,
            fallback,
            severity,
        } => {
            let message = match decode::decode_user_message(&body) {
                Ok(Some(user_message)) => user_message,
                Ok(None) => fallback,
                Err(err) => {
                    banner_warn!("Failed to decode response body: {}", err);
                    fallback
                }
            };
            state.show(message, resolve_severity(severity));
            vec![Effect::FocusRegion]
        }
    };

    (state, effects)
}

fn resolve_severity(severity: Option<String>) -> String {
    severity.unwrap_or_else(|| DEFAULT_SEVERITY.to_string())
}
