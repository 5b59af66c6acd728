//! Asset-list state: the last list the server reported.
//!
//! DESIGN
//! ======
//! `items` is replaced wholesale on every successful fetch. Nothing is
//! merged, diffed, or kept across loads. In-flight fetches are counted
//! separately so the loading indicator never rebuilds the rows.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

use crate::net::types::{Asset, AssetId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetsState {
    pub items: Vec<Asset>,
}

impl AssetsState {
    /// Replace the rendered list with `assets`, in the order given.
    pub fn replace(&mut self, assets: Vec<Asset>) {
        self.items = assets;
    }

    /// Display rows for the current items.
    pub fn rows(&self) -> Vec<AssetRowView> {
        self.items.iter().map(AssetRowView::from_asset).collect()
    }
}

/// Text and delete target for one rendered asset block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetRowView {
    pub name: String,
    /// `(status, health)`
    pub condition: String,
    pub installed: String,
    pub location: String,
    /// `None` disables the delete control.
    pub delete_target: Option<AssetId>,
}

impl AssetRowView {
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            name: asset.asset_name.clone(),
            condition: format!("({}, {})", asset.status, asset.health),
            installed: format!("Installed: {}", asset.installed_date),
            location: format!("Location: {}", asset.location),
            delete_target: asset.asset_id.clone(),
        }
    }

}

/// Number of list fetches currently in flight.
///
/// Overlapping reloads are not serialized, so a single flag would clear as
/// soon as the first one settled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchTracker {
    in_flight: u32,
}

impl FetchTracker {
    pub fn begin(&mut self) {
        self.in_flight += 1;
    }

    pub fn end(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}
