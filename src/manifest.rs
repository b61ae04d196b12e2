//! Image manifest shared by the server and the page.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub image_url: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_hint: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageManifest {
    #[serde(default)]
    pub images: Vec<GalleryItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tutorial_video: Option<String>,
}

impl ImageManifest {
    pub fn lookup(&self, id: &str) -> Option<&GalleryItem> {
        self.images.iter().find(|item| item.id == id)
    }

    /// Resolves each id in order, skipping the ones the manifest lacks.
    pub fn resolve_all<'a>(&'a self, ids: &'a [&'a str]) -> impl Iterator<Item = &'a GalleryItem> + 'a {
        ids.iter().filter_map(move |id| self.lookup(id))
    }
}
