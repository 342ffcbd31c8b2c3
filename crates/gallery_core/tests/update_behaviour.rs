use std::sync::Once;

use gallery_core::{
    update, Effect, GalleryConfig, GalleryState, Msg, ResolvedImage, Surface, SurfaceStatus,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(gallery_logging::initialize_for_tests);
}

fn loaded_state() -> (GalleryState, Vec<Effect>) {
    let state = GalleryState::new(GalleryConfig::default(), 7);
    update(
        state,
        Msg::PageLoaded {
            promo_dismissed: true,
        },
    )
}

fn resolved(index: u32, url: &str) -> ResolvedImage {
    ResolvedImage {
        index,
        url: url.to_string(),
    }
}

#[test]
fn page_load_starts_discovery_for_both_surfaces() {
    init_logging();
    let (mut state, effects) = loaded_state();
    let view = state.view();

    assert_eq!(view.grid_status, SurfaceStatus::Probing);
    assert_eq!(view.ribbon_status, SurfaceStatus::Probing);
    assert!(state.consume_dirty());

    let config = GalleryConfig::default();
    assert_eq!(effects.len(), 2);
    match &effects[0] {
        Effect::StartDiscovery { surface, request } => {
            assert_eq!(*surface, Surface::Grid);
            assert_eq!(request.base_url, config.base_url);
            assert_eq!(request.folder, config.grid.folder);
            assert_eq!(request.count, config.grid.count);
            assert_eq!(request.extensions, config.grid.extensions);
        }
        other => panic!("expected grid discovery, got {other:?}"),
    }
    match &effects[1] {
        Effect::StartDiscovery { surface, request } => {
            assert_eq!(*surface, Surface::Ribbon);
            assert_eq!(request.folder, config.ribbon.folder);
        }
        other => panic!("expected ribbon discovery, got {other:?}"),
    }
}

#[test]
fn second_page_load_is_ignored() {
    init_logging();
    let (mut state, _effects) = loaded_state();
    assert!(state.consume_dirty());

    let (mut state, effects) = update(
        state,
        Msg::PageLoaded {
            promo_dismissed: true,
        },
    );
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn grid_discovery_renumbers_from_one() {
    init_logging();
    let (state, _effects) = loaded_state();

    // N=3 probed, only slot 2 resolved: the display id is the renumbered
    // position, not the slot index.
    let (mut state, effects) = update(
        state,
        Msg::DiscoveryComplete {
            surface: Surface::Grid,
            resolved: vec![resolved(2, "http://salon.test/assets/Gallery/image2.jpg")],
        },
    );
    assert!(effects.is_empty());
    assert!(state.consume_dirty());

    let view = state.view();
    assert_eq!(view.grid_status, SurfaceStatus::Ready);
    assert_eq!(view.grid.len(), 1);
    assert_eq!(view.grid[0].id, 1);
    assert_eq!(view.grid[0].title, "Nail Art 1");
    assert_eq!(
        view.grid[0].image_url,
        "http://salon.test/assets/Gallery/image2.jpg"
    );
}

#[test]
fn empty_grid_discovery_falls_back_to_fixed_collection() {
    init_logging();
    let (state, _effects) = loaded_state();

    let (state, _effects) = update(
        state,
        Msg::DiscoveryComplete {
            surface: Surface::Grid,
            resolved: Vec::new(),
        },
    );

    let view = state.view();
    assert_eq!(view.grid_status, SurfaceStatus::FellBack);
    let titles: Vec<&str> = view.grid.iter().map(|tile| tile.title.as_str()).collect();
    assert_eq!(titles, vec!["Gel Nail Art", "Acrylic Extensions"]);
}

#[test]
fn new_grid_collection_replaces_the_previous_one() {
    init_logging();
    let (state, _effects) = loaded_state();

    let (state, _effects) = update(
        state,
        Msg::DiscoveryComplete {
            surface: Surface::Grid,
            resolved: vec![resolved(1, "a.jpg"), resolved(2, "b.jpg"), resolved(3, "c.jpg")],
        },
    );
    assert_eq!(state.view().grid.len(), 3);

    // Re-rendering with a smaller collection must not leave stale tiles.
    let (state, _effects) = update(
        state,
        Msg::DiscoveryComplete {
            surface: Surface::Grid,
            resolved: vec![resolved(5, "d.jpg")],
        },
    );
    let view = state.view();
    assert_eq!(view.grid.len(), 1);
    assert_eq!(view.grid[0].image_url, "d.jpg");
    assert_eq!(view.grid[0].title, "Nail Art 1");
}

#[test]
fn ribbon_discovery_yields_six_repetitions() {
    init_logging();
    let (state, _effects) = loaded_state();

    let urls: Vec<ResolvedImage> = (1..=4)
        .map(|n| resolved(n, &format!("http://salon.test/assets/scroll/image{n}.png")))
        .collect();
    let (mut state, _effects) = update(
        state,
        Msg::DiscoveryComplete {
            surface: Surface::Ribbon,
            resolved: urls,
        },
    );
    assert!(state.consume_dirty());

    let view = state.view();
    assert_eq!(view.ribbon_status, SurfaceStatus::Ready);
    assert_eq!(view.ribbon.len(), 6 * 4);
    for window in view.ribbon.windows(2) {
        assert_ne!(window[0], window[1], "adjacent ribbon duplicates");
    }
}

#[test]
fn empty_ribbon_discovery_loops_the_fallback_images() {
    init_logging();
    let (state, _effects) = loaded_state();

    let (state, _effects) = update(
        state,
        Msg::DiscoveryComplete {
            surface: Surface::Ribbon,
            resolved: Vec::new(),
        },
    );

    let view = state.view();
    assert_eq!(view.ribbon_status, SurfaceStatus::FellBack);
    assert_eq!(view.ribbon.len(), 6 * 2);
    for url in &view.ribbon {
        assert!(gallery_core::fallback_urls().contains(url));
    }
}

#[test]
fn tick_changes_nothing() {
    init_logging();
    let (mut state, _effects) = loaded_state();
    assert!(state.consume_dirty());
    let before = state.view();

    let (mut state, effects) = update(state, Msg::Tick);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.view(), before);
}
