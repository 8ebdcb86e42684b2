/// Localized text lookups.
pub trait Lang {
    /// Tech tree specific text, `fallback` if the key has no translation.
    fn tech_tree_string(&self, key: &str, fallback: &str) -> String;

    /// Interface text in `language`, an empty language means the active one.
    fn string(&self, key: &str, language: &str) -> String;
}

/// Returns every key and fallback untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTranslation;

impl Lang for NoTranslation {
    fn tech_tree_string(&self, _key: &str, fallback: &str) -> String {
        fallback.to_string()
    }

    fn string(&self, key: &str, _language: &str) -> String {
        key.to_string()
    }
}
