use std::sync::Once;

use gallery_core::{update, GalleryState, Msg, ResolvedImage, Surface};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(gallery_logging::initialize_for_tests);
}

/// A state whose grid holds two items with ids 1 and 2.
fn populated_state() -> GalleryState {
    let (state, _effects) = update(
        GalleryState::default(),
        Msg::PageLoaded {
            promo_dismissed: true,
        },
    );
    let (state, _effects) = update(
        state,
        Msg::DiscoveryComplete {
            surface: Surface::Grid,
            resolved: vec![
                ResolvedImage {
                    index: 1,
                    url: "one.jpg".to_string(),
                },
                ResolvedImage {
                    index: 2,
                    url: "two.jpg".to_string(),
                },
            ],
        },
    );
    state
}

#[test]
fn tile_click_opens_lightbox_with_that_item() {
    init_logging();
    let mut state = populated_state();
    state.consume_dirty();

    let (mut state, effects) = update(state, Msg::TileClicked { id: 2 });
    assert!(effects.is_empty());
    assert!(state.consume_dirty());

    let lightbox = state.view().lightbox.expect("lightbox open");
    assert_eq!(lightbox.title, "Nail Art 2");
    assert_eq!(lightbox.image_url, "two.jpg");
}

#[test]
fn clicking_another_tile_overwrites_the_open_item() {
    init_logging();
    let state = populated_state();
    let (state, _effects) = update(state, Msg::TileClicked { id: 1 });
    let (state, _effects) = update(state, Msg::TileClicked { id: 2 });

    let lightbox = state.view().lightbox.expect("lightbox open");
    assert_eq!(lightbox.image_url, "two.jpg");
}

#[test]
fn unknown_tile_id_is_ignored() {
    init_logging();
    let mut state = populated_state();
    state.consume_dirty();

    let (mut state, effects) = update(state, Msg::TileClicked { id: 99 });
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert!(state.view().lightbox.is_none());
}

#[test]
fn each_close_affordance_closes_the_lightbox() {
    init_logging();
    for close in [
        Msg::LightboxCloseClicked,
        Msg::BackdropClicked,
        Msg::EscapePressed,
    ] {
        let state = populated_state();
        let (state, _effects) = update(state, Msg::TileClicked { id: 1 });
        assert!(state.view().lightbox.is_some());

        let (state, _effects) = update(state, close);
        assert!(state.view().lightbox.is_none());
    }
}

#[test]
fn escape_while_closed_is_a_noop() {
    init_logging();
    let mut state = populated_state();
    state.consume_dirty();

    let (mut state, effects) = update(state, Msg::EscapePressed);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}
