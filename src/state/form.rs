//! Raw values of the creation form's five inputs.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::NewAsset;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetFormState {
    pub asset_name: String,
    pub status: String,
    pub health: String,
    pub installed_date: String,
    pub location: String,
}

impl AssetFormState {
    /// Request body carrying the field values exactly as typed.
    pub fn to_new_asset(&self) -> NewAsset {
        NewAsset {
            asset_name: self.asset_name.clone(),
            status: self.status.clone(),
            health: self.health.clone(),
            installed_date: self.installed_date.clone(),
            location: self.location.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::AssetName => &self.asset_name,
            FormField::Status => &self.status,
            FormField::Health => &self.health,
            FormField::InstalledDate => &self.installed_date,
            FormField::Location => &self.location,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::AssetName => &mut self.asset_name,
            FormField::Status => &mut self.status,
            FormField::Health => &mut self.health,
            FormField::InstalledDate => &mut self.installed_date,
            FormField::Location => &mut self.location,
        };
        *slot = value;
    }
}

/// One input of the creation form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    AssetName,
    Status,
    Health,
    InstalledDate,
    Location,
}

impl FormField {
    /// Rendering order.
    pub const ALL: [Self; 5] = [Self::AssetName, Self::Status, Self::Health, Self::InstalledDate, Self::Location];

    /// DOM id of the input element; host pages and stylesheets rely on these.
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::AssetName => "assetName",
            Self::Status => "status",
            Self::Health => "health",
            Self::InstalledDate => "installedDate",
            Self::Location => "location",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AssetName => "Asset Name",
            Self::Status => "Status",
            Self::Health => "Health",
            Self::InstalledDate => "Installed Date",
            Self::Location => "Location",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::InstalledDate => "date",
            _ => "text",
        }
    }

    /// Only the name is required by the browser before submit.
    pub fn required(self) -> bool {
        matches!(self, Self::AssetName)
    }
}
