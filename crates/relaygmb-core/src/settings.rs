use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "Consigne automatique";
pub const DEFAULT_COUNTRY: &str = "France";
pub const DEFAULT_SEO_TEMPLATE: &str = "Locker Mondial Relay 24/7 - {Ville}";

/// Primary categories offered for courier pickup points.
///
/// Other values are accepted; these are the ones GMB is known to map cleanly.
pub const KNOWN_CATEGORIES: [&str; 5] = [
    "Consigne automatique",
    "Point relais",
    "Point de retrait",
    "Centre de distribution",
    "Point de collecte",
];

/// Values applied identically to every record of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    pub description: String,
    pub category: String,
    /// Written to `Pays/Région`.
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

impl GlobalSettings {
    #[must_use]
    pub fn new(description: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            category: category.into(),
            country: default_country(),
        }
    }

    #[must_use]
    pub fn is_known_category(&self) -> bool {
        KNOWN_CATEGORIES.contains(&self.category.as_str())
    }
}

/// Options for rewriting listing names from a template.
///
/// The template may contain `{Ville}`, `{CP}` and `{Adresse}`; each flag
/// decides whether its token is filled in (or appended) or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoOptions {
    pub template: String,
    pub include_city: bool,
    pub include_postal_code: bool,
    pub include_street: bool,
    pub remove_special: bool,
    pub capitalize: bool,
}

impl Default for SeoOptions {
    fn default() -> Self {
        Self {
            template: DEFAULT_SEO_TEMPLATE.to_string(),
            include_city: true,
            include_postal_code: true,
            include_street: true,
            remove_special: true,
            capitalize: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_settings_defaults_country() {
        let settings = GlobalSettings::new("Retrait 24/7", "Point relais");
        assert_eq!(settings.country, "France");
        assert!(settings.is_known_category());
    }

    #[test]
    fn unknown_category_is_flagged() {
        let settings = GlobalSettings::new("x", "Boulangerie");
        assert!(!settings.is_known_category());
    }

    #[test]
    fn seo_options_deserialize_fills_missing_fields() {
        let opts: SeoOptions = serde_json::from_str(r#"{"template": "Relais {CP}"}"#).unwrap();
        assert_eq!(opts.template, "Relais {CP}");
        assert!(opts.include_city);
        assert!(opts.capitalize);
    }
}
