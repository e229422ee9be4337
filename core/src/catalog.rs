//! Option catalog loading
//!
//! The five option sets are static configuration. They ship as TOML
//! ([`CATALOG_TOML`]) with [`OptionCatalog::builtin`] as the fallback, and are
//! validated once at load time:
//! - every set is non-empty
//! - values are unique within a set
//! - every default is a member of its set
//!
//! Nothing downstream re-validates; the panel relies on these checks.

use std::collections::HashSet;

use article_params_types::{FieldId, OptionCatalog};

/// Option sets bundled with the app
pub const CATALOG_TOML: &str = include_str!("catalog.toml");

/// Errors that can occur while loading an option catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Parse error in option catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("option set for {} is empty", .field.config_key())]
    EmptySet { field: FieldId },

    #[error("duplicate value '{value}' in {} option set", .field.config_key())]
    DuplicateValue { field: FieldId, value: String },

    #[error("default {} '{value}' is not in its option set", .field.config_key())]
    DefaultNotInSet { field: FieldId, value: String },
}

/// Check the catalog invariants
pub fn validate_catalog(catalog: &OptionCatalog) -> Result<(), CatalogError> {
    for &field in FieldId::all() {
        let options = catalog.options(field);
        if options.is_empty() {
            return Err(CatalogError::EmptySet { field });
        }

        let mut seen = HashSet::new();
        for option in options {
            if !seen.insert(option.value.as_str()) {
                return Err(CatalogError::DuplicateValue {
                    field,
                    value: option.value.clone(),
                });
            }
        }

        let default = catalog.defaults.get(field);
        if !catalog.contains(field, default) {
            return Err(CatalogError::DefaultNotInSet {
                field,
                value: default.value.clone(),
            });
        }
    }
    Ok(())
}

/// Parse and validate a catalog from TOML text
pub fn load_catalog_str(content: &str) -> Result<OptionCatalog, CatalogError> {
    let catalog: OptionCatalog = toml::from_str(content)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Load a catalog from TOML text, falling back to the builtin one
pub fn load_or_builtin(content: &str) -> OptionCatalog {
    match load_catalog_str(content) {
        Ok(catalog) => {
            tracing::debug!("Loaded option catalog");
            catalog
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load option catalog, using builtin");
            OptionCatalog::builtin()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_CATALOG: &str = r##"
font_family = [
    { title = "Open Sans", value = "Open Sans", class_name = "open-sans" },
    { title = "Ubuntu", value = "Ubuntu", class_name = "ubuntu" },
]
font_size = [
    { title = "14px", value = "14px" },
    { title = "18px", value = "18px" },
]
font_color = [{ title = "Black", value = "#000000", option_class_name = "option-black" }]
background_color = [{ title = "White", value = "#FFFFFF" }]
content_width = [{ title = "Wide", value = "1394px" }]

[defaults]
font_family = { title = "Open Sans", value = "Open Sans", class_name = "open-sans" }
font_size = { title = "14px", value = "14px" }
font_color = { title = "Black", value = "#000000" }
background_color = { title = "White", value = "#FFFFFF" }
content_width = { title = "Wide", value = "1394px" }
"##;

    #[test]
    fn test_builtin_catalog_is_valid() {
        validate_catalog(&OptionCatalog::builtin()).unwrap();
    }

    #[test]
    fn test_parse_catalog_toml() {
        let catalog = load_catalog_str(SMALL_CATALOG).unwrap();
        assert_eq!(catalog.font_size.len(), 2);
        assert_eq!(catalog.defaults.font_size.value, "14px");
        assert_eq!(catalog.font_family[1].class_name, "ubuntu");
        assert_eq!(
            catalog.font_color[0].option_class_name.as_deref(),
            Some("option-black")
        );
    }

    #[test]
    fn test_default_outside_set_is_rejected() {
        let text = SMALL_CATALOG.replace(
            "font_size = { title = \"14px\", value = \"14px\" }",
            "font_size = { title = \"40px\", value = \"40px\" }",
        );
        let err = load_catalog_str(&text).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DefaultNotInSet { field: FieldId::FontSize, ref value } if value == "40px"
        ));
    }

    #[test]
    fn test_duplicate_value_is_rejected() {
        let mut catalog = OptionCatalog::builtin();
        let dup = catalog.font_color[0].clone();
        catalog.font_color.push(dup);
        let err = validate_catalog(&catalog).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateValue { field: FieldId::FontColor, .. }
        ));
    }

    #[test]
    fn test_empty_set_is_rejected() {
        let mut catalog = OptionCatalog::builtin();
        catalog.content_width.clear();
        let err = validate_catalog(&catalog).unwrap_err();
        assert!(matches!(err, CatalogError::EmptySet { field: FieldId::ContentWidth }));
        assert_eq!(err.to_string(), "option set for content_width is empty");
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = load_catalog_str("font_family = 3").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_bundled_catalog_matches_builtin() {
        assert_eq!(load_catalog_str(CATALOG_TOML).unwrap(), OptionCatalog::builtin());
        assert_eq!(load_or_builtin(CATALOG_TOML), OptionCatalog::builtin());
    }

    #[test]
    fn test_invalid_catalog_falls_back_to_builtin() {
        assert_eq!(load_or_builtin("font_family = 3"), OptionCatalog::builtin());

        let text = SMALL_CATALOG.replace(
            "content_width = [{ title = \"Wide\", value = \"1394px\" }]",
            "content_width = []",
        );
        assert_eq!(load_or_builtin(&text), OptionCatalog::builtin());

        // A valid catalog is used as given
        assert_eq!(load_or_builtin(SMALL_CATALOG).font_size.len(), 2);
    }
}
