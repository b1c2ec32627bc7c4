//! Banner core: pure status-region state machine and the notifier driver.
mod decode;
mod effect;
mod msg;
mod notifier;
mod state;
mod surface;
mod update;
mod view_model;

pub use decode::{decode_user_message, DecodeError, ServerResponse};
pub use effect::Effect;
pub use msg::Msg;
pub use notifier::MessageNotifier;
pub use state::{BannerState, DEFAULT_SEVERITY};
pub use surface::{ChannelRegionSurface, RegionSurface, SurfaceEvent};
pub use update::update;
pub use view_model::BannerView;
