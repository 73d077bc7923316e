use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// The object representation of an icon mappings JSON document.
///
/// The document shape is
/// `{"mappings":[{"iconSize":24,"icons":[{"x":0,"y":0,"name":"home","category":"action"}, ..]}, ..]}`.
///
/// Parsing is deliberately lenient: unknown fields are ignored and missing
/// fields default to zero or the empty string, so `{}` is a valid (empty)
/// document. Only syntactically invalid JSON, or a document whose present
/// fields have the wrong shape, is an error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Mappings {
    pub mappings: Vec<AtlasMapping>,
}

/// One packed sheet. All icons in it share the same square size.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AtlasMapping {
    #[serde(rename = "iconSize")]
    pub icon_size: u32,
    pub icons: Vec<IconMapping>,
}

/// A single icon entry: the top-left pixel offset of its square inside the
/// sheet, plus its name and category.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IconMapping {
    pub x: u32,
    pub y: u32,
    pub name: String,
    pub category: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MappingsParseError {
    #[error("mappings document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Mappings {
    /// Parses a mappings JSON document.
    pub fn parse(json: &str) -> Result<Self, MappingsParseError> {
        let mappings = serde_json::from_str(json)?;

        Ok(mappings)
    }

    pub fn parse_from_file(path: &Path) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mappings = Mappings::parse(&text).map_err(std::io::Error::other)?;

        Ok(mappings)
    }

    /// Total number of icon entries across all sheets, duplicates included.
    pub fn icon_count(&self) -> usize {
        self.mappings.iter().map(|atlas| atlas.icons.len()).sum()
    }
}

impl fmt::Display for AtlasMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "icon atlas ({} icons, {}px)",
            self.icons.len(),
            self.icon_size
        )
    }
}

impl fmt::Display for IconMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "icon \"{}\" ({}), mapped at ({};{})",
            self.name, self.category, self.x, self.y
        )
    }
}

#[cfg(test)]
mod test {
    use crate::mappings::Mappings;

    static EXAMPLE: &'static str = include_str!("../resources/example.mappings.json");

    #[test]
    fn test_parse_example_mappings() {
        let mappings = Mappings::parse(EXAMPLE).unwrap();

        assert_eq!(mappings.mappings.len(), 2);
        assert_eq!(mappings.icon_count(), 8);

        let first_atlas = &mappings.mappings[0];
        assert_eq!(first_atlas.icon_size, 24);
        assert_eq!(first_atlas.icons.len(), 6);

        let first_icon = &first_atlas.icons[0];
        assert_eq!(first_icon.name, "home");
        assert_eq!(first_icon.category, "action");
        assert_eq!(first_icon.x, 0);
        assert_eq!(first_icon.y, 0);

        let second_atlas = &mappings.mappings[1];
        assert_eq!(second_atlas.icon_size, 24);
        assert_eq!(second_atlas.icons[0].name, "alarm");
    }

    #[test]
    fn test_empty_document_is_valid() {
        let mappings = Mappings::parse("{}").unwrap();

        assert!(mappings.mappings.is_empty());
        assert_eq!(mappings.icon_count(), 0);
    }

    #[test]
    fn test_missing_fields_default() {
        let mappings =
            Mappings::parse(r#"{"mappings":[{"icons":[{"name":"home"}]}]}"#).unwrap();

        let atlas = &mappings.mappings[0];
        assert_eq!(atlas.icon_size, 0);

        let icon = &atlas.icons[0];
        assert_eq!(icon.x, 0);
        assert_eq!(icon.y, 0);
        assert_eq!(icon.category, "");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let mappings = Mappings::parse(
            r#"{"version":3,"mappings":[{"iconSize":24,"padding":2,"icons":[]}]}"#,
        )
        .unwrap();

        assert_eq!(mappings.mappings[0].icon_size, 24);
    }

    #[test]
    fn test_malformed_document_errors() {
        assert!(Mappings::parse("not json at all").is_err());
        assert!(Mappings::parse(r#"{"mappings":"nope"}"#).is_err());
        assert!(Mappings::parse(r#"[1,2,3]"#).is_err());
    }
}
