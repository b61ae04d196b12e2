pub mod content;
pub mod lightbox;
pub mod manifest;
pub mod menu;
pub mod scroll;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod backend;
