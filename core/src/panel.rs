//! Settings panel orchestration
//!
//! The panel keeps a draft copy of the applied article state. The draft:
//! - starts as the applied state and is fully replaced whenever the applied
//!   state changes (never merged)
//! - takes single-field edits from the controls, checked against the catalog
//! - goes to the owner whole on apply
//! - reverts to the catalog defaults on reset
//!
//! Apply carries a value, reset only carries intent. The owner already knows
//! its defaults, or sends new ones down as the next applied state.

use article_params_types::{ArticleOption, ArticleState, ControlKind, FieldId, OptionCatalog};

use crate::open_state::ActiveField;

/// What the panel asks its owner to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelIntent {
    /// Replace the applied state with this draft
    Apply(ArticleState),
    /// Settings were reset to defaults
    Reset,
}

#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("option '{value}' is not in the {} option set", .field.config_key())]
    UnknownOption { field: FieldId, value: String },
}

/// Render description for one field's control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldControl<'a> {
    pub field: FieldId,
    pub kind: ControlKind,
    pub options: &'a [ArticleOption],
    pub selected: &'a ArticleOption,
    /// Only meaningful for dropdowns
    pub open: bool,
}

/// Draft state and dropdown coordination for the settings panel
#[derive(Debug, Clone)]
pub struct SettingsPanel {
    draft: ArticleState,
    synced_from: ArticleState,
    active: ActiveField,
}

impl SettingsPanel {
    pub fn new(applied: &ArticleState) -> Self {
        Self {
            draft: applied.clone(),
            synced_from: applied.clone(),
            active: ActiveField::default(),
        }
    }

    pub fn draft(&self) -> &ArticleState {
        &self.draft
    }

    pub fn active_field(&self) -> ActiveField {
        self.active
    }

    /// Replace the draft if the applied state changed since the last sync.
    ///
    /// Returns whether the draft was replaced.
    pub fn sync_applied(&mut self, applied: &ArticleState) -> bool {
        if *applied == self.synced_from {
            return false;
        }
        tracing::debug!("Applied state changed, resyncing draft");
        self.synced_from = applied.clone();
        self.draft = applied.clone();
        true
    }

    /// Write one field of the draft. Closes the field's dropdown.
    pub fn select(
        &mut self,
        catalog: &OptionCatalog,
        field: FieldId,
        option: &ArticleOption,
    ) -> Result<(), PanelError> {
        if !catalog.contains(field, option) {
            tracing::error!(
                field = field.config_key(),
                value = %option.value,
                "BUG: option outside its field's set reached the panel"
            );
            return Err(PanelError::UnknownOption {
                field,
                value: option.value.clone(),
            });
        }
        self.draft.set(field, option.clone());
        self.active.dismiss(field);
        Ok(())
    }

    /// Header of a field's dropdown was activated
    pub fn toggle_field(&mut self, field: FieldId) {
        self.active.toggle(field);
    }

    /// Open or close one field's dropdown on behalf of that dropdown
    pub fn set_field_open(&mut self, field: FieldId, open: bool) {
        self.active.set(field, open);
    }

    /// Outside click reported by a field's dropdown
    pub fn dismiss_field(&mut self, field: FieldId) -> bool {
        self.active.dismiss(field)
    }

    /// Close whichever dropdown is open
    pub fn close_fields(&mut self) {
        self.active.close();
    }

    /// Submit the whole draft
    pub fn apply(&self) -> PanelIntent {
        PanelIntent::Apply(self.draft.clone())
    }

    /// Revert the draft to `defaults`
    pub fn reset(&mut self, defaults: &ArticleState) -> PanelIntent {
        self.draft = defaults.clone();
        self.active.close();
        PanelIntent::Reset
    }

    /// Which control renders `field` and with what value
    pub fn control_for<'a>(&'a self, catalog: &'a OptionCatalog, field: FieldId) -> FieldControl<'a> {
        FieldControl {
            field,
            kind: field.control(),
            options: catalog.options(field),
            selected: self.draft.get(field),
            open: self.active.is_open(field),
        }
    }

    /// One control description per field, in panel order
    pub fn controls<'a>(&'a self, catalog: &'a OptionCatalog) -> Vec<FieldControl<'a>> {
        FieldId::all()
            .iter()
            .map(|&field| self.control_for(catalog, field))
            .collect()
    }
}
