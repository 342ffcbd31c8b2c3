use crate::{DiscoveryRequest, Effect, GalleryState, Msg, Surface, SurfaceSpec, SurfaceStatus};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: GalleryState, msg: Msg) -> (GalleryState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageLoaded { promo_dismissed } => {
            // A second page-load while discovery is underway or done is a
            // no-op; collections are only replaced by fresh discovery
            // results, never by re-entry.
            if state.grid_status() != SurfaceStatus::Idle {
                return (state, Vec::new());
            }
            state.begin_page_load(promo_dismissed);

            let config = state.config();
            vec![
                discovery_effect(Surface::Grid, &config.base_url, &config.grid),
                discovery_effect(Surface::Ribbon, &config.base_url, &config.ribbon),
            ]
        }
        Msg::DiscoveryComplete { surface, resolved } => {
            match surface {
                Surface::Grid => state.apply_grid_results(&resolved),
                Surface::Ribbon => state.apply_ribbon_results(&resolved),
            }
            Vec::new()
        }
        Msg::TileClicked { id } => {
            state.open_lightbox(id);
            Vec::new()
        }
        Msg::LightboxCloseClicked | Msg::BackdropClicked | Msg::EscapePressed => {
            state.close_lightbox();
            Vec::new()
        }
        Msg::PromoDismissed => {
            if state.dismiss_promo() {
                vec![Effect::SavePromoDismissed]
            } else {
                Vec::new()
            }
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn discovery_effect(surface: Surface, base_url: &str, spec: &SurfaceSpec) -> Effect {
    Effect::StartDiscovery {
        surface,
        request: DiscoveryRequest {
            base_url: base_url.to_string(),
            folder: spec.folder.clone(),
            stem: spec.stem.clone(),
            count: spec.count,
            extensions: spec.extensions.clone(),
        },
    }
}
