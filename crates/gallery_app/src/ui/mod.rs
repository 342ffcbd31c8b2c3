//! View layer: pure functions from the view model to egui widgets,
//! returning the messages the user's interactions produced.

pub mod grid;
pub mod lightbox;
pub mod popup;
pub mod ribbon;
pub mod status;
