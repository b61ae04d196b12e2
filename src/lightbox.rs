use crate::manifest::GalleryItem;

/// Where a click inside the open overlay landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayTarget {
    Backdrop,
    CloseButton,
    /// The enlarged image and its caption. Clicks here stop at the content
    /// region and never reach the backdrop.
    Content,
}

/// Holds at most one enlarged image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    selected: Option<GalleryItem>,
}

impl Lightbox {
    pub fn selected(&self) -> Option<&GalleryItem> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn select(&mut self, item: GalleryItem) {
        self.selected = Some(item);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn click(&mut self, target: OverlayTarget) {
        match target {
            OverlayTarget::Backdrop | OverlayTarget::CloseButton => self.clear(),
            OverlayTarget::Content => {}
        }
    }

    pub fn key(&mut self, key: &str) {
        if key == "Escape" {
            self.clear();
        }
    }
}
