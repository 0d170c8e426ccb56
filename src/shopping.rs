//! Session shopping list.
//!
//! Entries are keyed by a case-insensitive name: adding an item whose name already exists
//! bumps the existing entry's quantity instead of creating a duplicate.

use crate::catalog::Recipe;
use serde::{Deserialize, Serialize};

/// Group label for entries that did not come from a recipe.
pub const OTHER_ITEMS_LABEL: &str = "Other Items";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: u64,
    pub name: String,
    pub quantity: u32,
    pub unit: String,
    pub recipe_id: Option<u32>,
    pub recipe_name: Option<String>,
}

impl ShoppingItem {
    pub fn group_label(&self) -> &str {
        match self.recipe_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => OTHER_ITEMS_LABEL,
        }
    }

    /// `"2 cups"`, or just `"2"` when there is no unit.
    pub fn amount_label(&self) -> String {
        let unit = self.unit.trim();
        if unit.is_empty() {
            self.quantity.to_string()
        } else {
            format!("{} {}", self.quantity, unit)
        }
    }
}

/// A candidate for [`ShoppingList::add`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub quantity: Option<u32>,
    pub unit: Option<String>,
    pub recipe_id: Option<u32>,
    pub recipe_name: Option<String>,
}

impl NewItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn from_recipe(mut self, recipe: &Recipe) -> Self {
        self.recipe_id = Some(recipe.id);
        self.recipe_name = Some(recipe.name.clone());
        self
    }

    // Zero behaves like an absent quantity.
    fn effective_quantity(&self) -> u32 {
        self.quantity.filter(|q| *q > 0).unwrap_or(1)
    }
}

/// Field overwrites for [`ShoppingList::update`]. `None` leaves a field untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub quantity: Option<u32>,
    pub unit: Option<String>,
    pub recipe_id: Option<Option<u32>>,
    pub recipe_name: Option<Option<String>>,
}

impl ItemPatch {
    /// The patch produced by the inline edit row: name, quantity and unit.
    pub fn edit(name: impl Into<String>, quantity: u32, unit: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            quantity: Some(quantity),
            unit: Some(unit.into()),
            ..Self::default()
        }
    }

    fn apply(self, item: &mut ShoppingItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity.max(1);
        }
        if let Some(unit) = self.unit {
            item.unit = unit;
        }
        if let Some(recipe_id) = self.recipe_id {
            item.recipe_id = recipe_id;
        }
        if let Some(recipe_name) = self.recipe_name {
            item.recipe_name = recipe_name;
        }
    }
}

/// Reads a quantity typed into a form: leading digits, with anything unusable or zero
/// becoming 1.
pub fn parse_quantity(raw: &str) -> u32 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse::<u32>().ok().filter(|q| *q > 0).unwrap_or(1)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemGroup {
    pub label: String,
    pub items: Vec<ShoppingItem>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    next_id: u64,
}

impl Default for ShoppingList {
    fn default() -> Self {
        Self::new()
    }
}

impl ShoppingList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Adds a candidate, merging into an existing entry with the same name (ignoring case).
    ///
    /// On a merge only the quantity changes; the existing entry keeps its casing, unit and
    /// recipe. Returns the id of the entry that was created or merged into.
    pub fn add(&mut self, candidate: NewItem) -> u64 {
        let key = candidate.name.to_lowercase();
        let increment = candidate.effective_quantity();

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.name.to_lowercase() == key)
        {
            existing.quantity = existing.quantity.saturating_add(increment);
            tracing::debug!(
                id = existing.id,
                name = %existing.name,
                quantity = existing.quantity,
                "merged shopping list entry"
            );
            return existing.id;
        }

        let id = self.next_id;
        self.next_id += 1;
        tracing::debug!(id, name = %candidate.name, quantity = increment, "added shopping list entry");
        self.items.push(ShoppingItem {
            id,
            name: candidate.name,
            quantity: increment,
            unit: candidate.unit.unwrap_or_default(),
            recipe_id: candidate.recipe_id,
            recipe_name: candidate.recipe_name,
        });
        id
    }

    /// Adds one ingredient line of `recipe` with quantity 1 and no unit.
    pub fn add_recipe_ingredient(&mut self, recipe: &Recipe, ingredient: &str) -> u64 {
        self.add(
            NewItem::named(ingredient)
                .quantity(1)
                .unit("")
                .from_recipe(recipe),
        )
    }

    /// Adds every ingredient of `recipe`, returning how many lines were added or merged.
    pub fn add_recipe_ingredients(&mut self, recipe: &Recipe) -> usize {
        for ingredient in &recipe.ingredients {
            self.add_recipe_ingredient(recipe, ingredient);
        }
        recipe.ingredients.len()
    }

    /// Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: u64) -> Option<ShoppingItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(index);
        tracing::debug!(id, name = %removed.name, "removed shopping list entry");
        Some(removed)
    }

    /// Overwrites the patched fields of entry `id`. Unknown ids are a no-op.
    ///
    /// Renames are not deduplicated: two entries may end up sharing a name.
    pub fn update(&mut self, id: u64, patch: ItemPatch) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                patch.apply(item);
                tracing::debug!(id, name = %item.name, quantity = item.quantity, "updated shopping list entry");
                true
            }
            None => false,
        }
    }

    /// Buckets entries by originating recipe, in first-occurrence order.
    pub fn group_by_recipe(&self) -> Vec<ItemGroup> {
        let mut groups: Vec<ItemGroup> = Vec::new();
        for item in &self.items {
            let label = item.group_label();
            match groups.iter_mut().find(|group| group.label == label) {
                Some(group) => group.items.push(item.clone()),
                None => groups.push(ItemGroup {
                    label: label.to_string(),
                    items: vec![item.clone()],
                }),
            }
        }
        groups
    }
}
