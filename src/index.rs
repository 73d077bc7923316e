use crate::mappings::{AtlasMapping, IconMapping, Mappings};
use std::collections::HashMap;

/// Queryable view over a parsed [Mappings] document.
///
/// Built in a single pass over all sheets, in document order. The index is
/// immutable once built (and so safe to share between threads for reads);
/// when the underlying document changes, build a fresh index instead of
/// patching this one.
///
/// Icon and category names are matched case-insensitively: lookups lowercase
/// their argument, while the stored names keep the casing the document used.
pub struct IconIndex {
    mappings: Mappings,
    names: Vec<String>,
    by_name: HashMap<String, IconLocation>,
    category_buckets: Vec<CategoryBucket>,
    by_category: HashMap<String, usize>,
}

/// Position of an icon entry inside the owned [Mappings].
#[derive(Debug, Clone, Copy)]
struct IconLocation {
    atlas: usize,
    icon: usize,
}

struct CategoryBucket {
    /// Category name as first seen in the document.
    display: String,
    names: Vec<String>,
}

impl IconIndex {
    pub fn new(mappings: Mappings) -> Self {
        let mut names = Vec::with_capacity(mappings.icon_count());
        let mut by_name = HashMap::new();
        let mut category_buckets: Vec<CategoryBucket> = Vec::new();
        let mut by_category = HashMap::new();

        for (atlas_idx, atlas) in mappings.mappings.iter().enumerate() {
            for (icon_idx, icon) in atlas.icons.iter().enumerate() {
                // first occurrence of a name wins
                by_name
                    .entry(icon.name.to_lowercase())
                    .or_insert(IconLocation {
                        atlas: atlas_idx,
                        icon: icon_idx,
                    });

                let bucket_idx = *by_category
                    .entry(icon.category.to_lowercase())
                    .or_insert_with(|| {
                        category_buckets.push(CategoryBucket {
                            display: icon.category.clone(),
                            names: Vec::new(),
                        });
                        category_buckets.len() - 1
                    });
                category_buckets[bucket_idx].names.push(icon.name.clone());

                names.push(icon.name.clone());
            }
        }

        Self {
            mappings,
            names,
            by_name,
            category_buckets,
            by_category,
        }
    }

    /// The document this index was built from.
    pub fn mappings(&self) -> &Mappings {
        &self.mappings
    }

    /// Every icon name, in document order. Duplicate entries are kept.
    pub fn all_names(&self) -> &[String] {
        &self.names
    }

    pub fn icon_count(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Distinct category names in first-seen order, with the casing the
    /// document used.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.category_buckets.iter().map(|b| b.display.as_str())
    }

    /// Names of all icons in the named category, in document order.
    ///
    /// An unknown category is not an error: it yields an empty slice, same
    /// as a category that filtered down to nothing.
    pub fn names_in_category(&self, category: &str) -> &[String] {
        self.by_category
            .get(&category.to_lowercase())
            .map(|&idx| self.category_buckets[idx].names.as_slice())
            .unwrap_or(&[])
    }

    /// The category owning the named icon.
    ///
    /// If the same name appears under several categories, the earliest
    /// occurrence in document order decides.
    pub fn category_of(&self, name: &str) -> Option<&str> {
        self.entry(name).map(|icon| icon.category.as_str())
    }

    /// Resolves a name to its sheet and icon entry. First match wins under
    /// duplicate names.
    pub fn locate(&self, name: &str) -> Option<(&AtlasMapping, &IconMapping)> {
        let location = self.by_name.get(&name.to_lowercase())?;
        let atlas = &self.mappings.mappings[location.atlas];

        Some((atlas, &atlas.icons[location.icon]))
    }

    /// All icon names containing the query, ignoring case and surrounding
    /// whitespace. An empty query matches everything.
    pub fn names_matching(&self, query: &str) -> Vec<&str> {
        let query = query.to_lowercase();
        let query = query.trim();

        self.names
            .iter()
            .map(String::as_str)
            .filter(|name| name.to_lowercase().contains(query))
            .collect()
    }

    fn entry(&self, name: &str) -> Option<&IconMapping> {
        let location = self.by_name.get(&name.to_lowercase())?;

        Some(&self.mappings.mappings[location.atlas].icons[location.icon])
    }
}

#[cfg(test)]
mod test {
    use crate::index::IconIndex;
    use crate::mappings::Mappings;

    fn index_of(json: &str) -> IconIndex {
        IconIndex::new(Mappings::parse(json).unwrap())
    }

    #[test]
    fn test_two_icon_document() {
        let index = index_of(
            r#"{"mappings":[{"iconSize":24,"icons":[
                {"x":0,"y":0,"name":"home","category":"action"},
                {"x":24,"y":0,"name":"search","category":"action"}]}]}"#,
        );

        assert_eq!(index.all_names(), ["home", "search"]);
        assert_eq!(index.categories().collect::<Vec<_>>(), ["action"]);
        assert_eq!(index.names_in_category("action"), ["home", "search"]);

        let (atlas, icon) = index.locate("home").unwrap();
        assert_eq!(atlas.icon_size, 24);
        assert_eq!(icon.x, 0);
        assert_eq!(icon.y, 0);
        assert_eq!(icon.category, "action");
    }

    #[test]
    fn test_empty_document() {
        let index = index_of("{}");

        assert!(index.is_empty());
        assert!(index.all_names().is_empty());
        assert_eq!(index.categories().count(), 0);
        assert!(index.locate("anything").is_none());
    }

    #[test]
    fn test_name_count_matches_document() {
        static EXAMPLE: &'static str = include_str!("../resources/example.mappings.json");
        let mappings = Mappings::parse(EXAMPLE).unwrap();
        let total = mappings.icon_count();

        let index = IconIndex::new(mappings);

        assert_eq!(index.all_names().len(), total);
        assert_eq!(index.icon_count(), total);
    }

    #[test]
    fn test_locate_is_case_insensitive() {
        let index = index_of(
            r#"{"mappings":[{"iconSize":24,"icons":[
                {"x":24,"y":0,"name":"search","category":"action"}]}]}"#,
        );

        let (_, lower) = index.locate("search").unwrap();
        let (_, title) = index.locate("Search").unwrap();
        let (_, upper) = index.locate("SEARCH").unwrap();

        assert!(std::ptr::eq(lower, title));
        assert!(std::ptr::eq(lower, upper));
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let index = index_of(
            r#"{"mappings":[{"iconSize":24,"icons":[
                {"x":0,"y":0,"name":"home","category":"action"}]}]}"#,
        );

        assert!(index.names_in_category("maps").is_empty());
        assert!(!index.categories().any(|c| c == "maps"));
    }

    #[test]
    fn test_first_category_wins_for_duplicate_names() {
        let index = index_of(
            r#"{"mappings":[{"iconSize":24,"icons":[
                {"x":0,"y":0,"name":"x","category":"a"},
                {"x":24,"y":0,"name":"x","category":"b"}]}]}"#,
        );

        assert_eq!(index.category_of("x"), Some("a"));
        // both occurrences stay visible in the flat list and their buckets
        assert_eq!(index.all_names(), ["x", "x"]);
        assert_eq!(index.names_in_category("b"), ["x"]);
    }

    #[test]
    fn test_category_casing_is_preserved() {
        let index = index_of(
            r#"{"mappings":[{"iconSize":24,"icons":[
                {"x":0,"y":0,"name":"home","category":"Action"},
                {"x":24,"y":0,"name":"search","category":"action"}]}]}"#,
        );

        assert_eq!(index.categories().collect::<Vec<_>>(), ["Action"]);
        assert_eq!(index.names_in_category("ACTION"), ["home", "search"]);
        assert_eq!(index.category_of("home"), Some("Action"));
    }

    #[test]
    fn test_names_matching() {
        let index = index_of(
            r#"{"mappings":[{"iconSize":24,"icons":[
                {"x":0,"y":0,"name":"arrow_back","category":"navigation"},
                {"x":24,"y":0,"name":"arrow_forward","category":"navigation"},
                {"x":48,"y":0,"name":"home","category":"action"}]}]}"#,
        );

        assert_eq!(
            index.names_matching("ARROW"),
            ["arrow_back", "arrow_forward"]
        );
        assert_eq!(index.names_matching("  back "), ["arrow_back"]);
        assert_eq!(index.names_matching("").len(), 3);
        assert!(index.names_matching("zzz").is_empty());
    }
}
