use serde::{Deserialize, Serialize};

/// Precomputed index of the cheat sheets available on a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub cheatsheets: Vec<ManifestEntry>,
}

/// One listed document: the fetch name and a human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

impl ManifestEntry {
    /// Builds an entry for `name`, deriving the display label from it.
    #[must_use]
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let display_name = display_name(&name);
        Self { name, display_name }
    }
}

/// Derives a display label from a kebab-case or snake_case document name:
/// each token gets its first letter uppercased and the rest lowercased,
/// joined with spaces (`"gokul_YADAV"` becomes `"Gokul Yadav"`).
#[must_use]
pub fn display_name(name: &str) -> String {
    name.split(['-', '_'])
        .filter(|token| !token.is_empty())
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_and_snake_case_both_split() {
        assert_eq!(display_name("nidhi-sharma"), "Nidhi Sharma");
        assert_eq!(display_name("gokul_yadav"), "Gokul Yadav");
        assert_eq!(display_name("a-b_c"), "A B C");
    }

    #[test]
    fn mixed_case_tokens_are_normalized() {
        assert_eq!(display_name("JOHN-dOE"), "John Doe");
        assert_eq!(display_name("plain"), "Plain");
    }

    #[test]
    fn empty_tokens_are_dropped() {
        assert_eq!(display_name("a--b"), "A B");
        assert_eq!(display_name("_leading"), "Leading");
    }

    #[test]
    fn entry_serializes_with_camel_case_display_name() {
        let entry = ManifestEntry::from_name("jane-doe");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""displayName":"Jane Doe""#));
    }
}
