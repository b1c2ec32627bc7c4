use std::sync::mpsc;

use crate::BannerView;

/// Rendering seam between the banner core and the host page.
///
/// The host supplies the concrete region: a container with a visibility
/// toggle, a severity class slot, a text slot, and focus transfer.
pub trait RegionSurface {
    /// Render the current view of the region.
    fn apply(&mut self, view: &BannerView);
    /// Move input focus to the region.
    fn focus(&mut self);
}

/// Events emitted by [`ChannelRegionSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The region was re-rendered with this view.
    Applied(BannerView),
    /// Input focus moved to the region.
    Focused,
}

/// Surface that forwards render and focus calls over a channel, for hosts
/// that apply page mutations on their own event loop.
pub struct ChannelRegionSurface {
    tx: mpsc::Sender<SurfaceEvent>,
}

impl ChannelRegionSurface {
    pub fn new(tx: mpsc::Sender<SurfaceEvent>) -> Self {
        Self { tx }
    }
}

impl RegionSurface for ChannelRegionSurface {
    fn apply(&mut self, view: &BannerView) {
        let _ = self.tx.send(SurfaceEvent::Applied(view.clone()));
    }

    fn focus(&mut self) {
        let _ = self.tx.send(SurfaceEvent::Focused);
    }
}
