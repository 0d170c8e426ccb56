//! The static recipe catalog.
//!
//! The catalog is loaded once from the bundled `assets/recipes.json` and shared read-only
//! by every consumer (views, the shopping list importer and the recommendation engine).

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

const BUNDLED_RECIPES: &str = include_str!("../assets/recipes.json");

/// How many recipes the home screen lists.
pub const FEATURED_LIMIT: usize = 10;

static BUNDLED_CATALOG: OnceCell<Arc<RecipeCatalog>> = OnceCell::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub image: String,
    pub cook_time: String,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Malformed recipe data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Recipe ids must be positive, found 0 on '{0}'")]
    ZeroId(String),

    #[error("Duplicate recipe id {0}")]
    DuplicateId(u32),

    #[error("Recipe {id} is invalid: {reason}")]
    Invalid { id: u32, reason: &'static str },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Builds a catalog, checking the invariants every consumer relies on.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(recipes.len());
        for recipe in &recipes {
            if recipe.id == 0 {
                return Err(CatalogError::ZeroId(recipe.name.clone()));
            }
            if !seen.insert(recipe.id) {
                return Err(CatalogError::DuplicateId(recipe.id));
            }
            if recipe.servings == 0 {
                return Err(CatalogError::Invalid {
                    id: recipe.id,
                    reason: "servings must be at least 1",
                });
            }
            if recipe.ingredients.is_empty() {
                return Err(CatalogError::Invalid {
                    id: recipe.id,
                    reason: "no ingredients",
                });
            }
            if recipe.instructions.is_empty() {
                return Err(CatalogError::Invalid {
                    id: recipe.id,
                    reason: "no instructions",
                });
            }
        }
        Ok(Self { recipes })
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(raw)?;
        Self::new(recipes)
    }

    /// The dataset shipped with the app, parsed on first use.
    pub fn bundled() -> Result<Arc<Self>, CatalogError> {
        BUNDLED_CATALOG
            .get_or_try_init(|| {
                let catalog = Self::from_json(BUNDLED_RECIPES)?;
                tracing::debug!(recipes = catalog.len(), "loaded bundled recipe catalog");
                Ok::<_, CatalogError>(Arc::new(catalog))
            })
            .cloned()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Unknown ids are an explicit absence, never an error.
    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Case-insensitive match on name or description, in catalog order.
    pub fn search(&self, term: &str) -> Vec<&Recipe> {
        let needle = term.to_lowercase();
        self.recipes
            .iter()
            .filter(|recipe| {
                recipe.name.to_lowercase().contains(&needle)
                    || recipe.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn featured(&self, term: &str) -> Vec<&Recipe> {
        let mut matches = self.search(term);
        matches.truncate(FEATURED_LIMIT);
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: u32, name: &str) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            description: format!("{name} description"),
            image: String::new(),
            cook_time: "10 mins".to_string(),
            servings: 2,
            difficulty: Difficulty::Easy,
            ingredients: vec!["water".to_string()],
            instructions: vec!["boil".to_string()],
        }
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = RecipeCatalog::bundled().unwrap();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.recipes()[0].name, "Jollof Rice");
        assert_eq!(catalog.recipes()[0].cook_time, "60 mins");
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let catalog = RecipeCatalog::bundled().unwrap();
        assert!(catalog.get(3).is_some());
        assert!(catalog.get(999).is_none());
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let catalog = RecipeCatalog::bundled().unwrap();
        let names: Vec<_> = catalog.search("SOUP").iter().map(|r| r.id).collect();
        assert_eq!(names, vec![2, 4, 6]);
        assert_eq!(catalog.search("").len(), catalog.len());
        assert!(catalog.search("lasagne").is_empty());
    }

    #[test]
    fn test_featured_is_capped() {
        let recipes = (1..=14).map(|id| recipe(id, "Stew")).collect();
        let catalog = RecipeCatalog::new(recipes).unwrap();
        assert_eq!(catalog.featured("stew").len(), FEATURED_LIMIT);
    }

    #[test]
    fn test_rejects_duplicate_and_zero_ids() {
        let dup = RecipeCatalog::new(vec![recipe(1, "A"), recipe(1, "B")]);
        assert!(matches!(dup, Err(CatalogError::DuplicateId(1))));

        let zero = RecipeCatalog::new(vec![recipe(0, "A")]);
        assert!(matches!(zero, Err(CatalogError::ZeroId(_))));
    }

    #[test]
    fn test_rejects_empty_ingredients() {
        let mut bad = recipe(4, "Empty");
        bad.ingredients.clear();
        let result = RecipeCatalog::new(vec![bad]);
        assert!(matches!(result, Err(CatalogError::Invalid { id: 4, .. })));
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        assert!(matches!(
            RecipeCatalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
