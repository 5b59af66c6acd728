//! UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the signal-backed view owned by the
//! `BrowserAssetClient` in context, and hand user actions to the controller.

pub mod asset_form;
pub mod asset_list;
pub mod asset_row;
pub mod search_bar;
