//! Article parameters panel core
//!
//! Framework-free state machines behind the settings side panel:
//!
//! ```text
//!   pointer-down ──► Dismissible ──► open flag = false
//!                                          │
//!   header click ──► Dropdown / ActiveField ┤
//!                                          ▼
//!   option click ──► OptionList ──► SettingsPanel.draft ──► Apply(draft) / Reset
//! ```
//!
//! The Dioxus frontend renders these states; everything here is testable on
//! the host without a browser.

pub mod catalog;
pub mod dismiss;
pub mod dropdown;
pub mod open_state;
pub mod option_list;
pub mod panel;
pub mod radio;


// Re-exports for convenience
pub use article_params_types::{ArticleOption, ArticleState, ControlKind, FieldId, OptionCatalog};
pub use catalog::{CATALOG_TOML, CatalogError, load_catalog_str, load_or_builtin, validate_catalog};
pub use dismiss::{
    ActiveChange, Dismissible, LocalPointerSource, MissingRegion, PointerSource, Region, RegionRef,
};
pub use dropdown::{DropdownEvent, DropdownState, header_label};
pub use open_state::{ActiveField, OpenState, ToggleFn};
pub use option_list::{Activation, ActivationKey, OptionItem, activate, option_items};
pub use panel::{FieldControl, PanelError, PanelIntent, SettingsPanel};
pub use radio::RadioGroup;
