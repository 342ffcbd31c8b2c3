use crate::{ResolvedImage, Surface};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Page entry point; fired once when the app starts.
    PageLoaded { promo_dismissed: bool },
    /// Discovery settled for one surface. An empty result is not an error;
    /// the state substitutes the fallback collection.
    DiscoveryComplete {
        surface: Surface,
        resolved: Vec<ResolvedImage>,
    },
    /// User clicked a grid tile.
    TileClicked { id: u32 },
    /// User clicked the lightbox close affordance.
    LightboxCloseClicked,
    /// User clicked outside the lightbox image.
    BackdropClicked,
    /// User pressed Escape.
    EscapePressed,
    /// User dismissed the promo popup.
    PromoDismissed,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
