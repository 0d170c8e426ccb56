//! Integration tests for the shopping list and the session state that drives it
//!
//! Covers name merging, recipe grouping and the recipe detail actions

use mamas_kitchen::catalog::RecipeCatalog;
use mamas_kitchen::config::AppConfig;
use mamas_kitchen::shopping::{ItemPatch, NewItem, OTHER_ITEMS_LABEL, ShoppingList};
use mamas_kitchen::state::AppState;

fn session() -> AppState {
    AppState::new(
        RecipeCatalog::bundled().expect("bundled catalog"),
        AppConfig::default(),
    )
}

mod merge_tests {
    use super::*;

    #[test]
    fn test_same_name_different_case_merges() {
        let mut list = ShoppingList::new();
        list.add(NewItem::named("Tomato").quantity(2));
        list.add(NewItem::named("tomato").quantity(3));

        assert_eq!(list.len(), 1);
        let item = &list.items()[0];
        assert_eq!(item.name, "Tomato");
        assert_eq!(item.quantity, 5);
    }

    #[test]
    fn test_names_stay_unique_ignoring_case() {
        let mut list = ShoppingList::new();
        for name in ["Onion", "ONION", "Pepper", "onion", "pepper", "Salt"] {
            list.add(NewItem::named(name));
        }

        let mut names: Vec<String> = list.items().iter().map(|i| i.name.to_lowercase()).collect();
        names.sort();
        assert_eq!(names, vec!["onion", "pepper", "salt"]);
        assert_eq!(list.items()[0].quantity, 3);
    }

    #[test]
    fn test_merge_ignores_incoming_unit_and_recipe() {
        let state = session();
        let jollof = state.catalog.get(1).expect("jollof");
        let mut list = ShoppingList::new();
        list.add(NewItem::named("Onions").quantity(1).unit("bulbs"));
        list.add(NewItem::named("onions").quantity(2).unit("kg").from_recipe(jollof));

        let item = &list.items()[0];
        assert_eq!(item.quantity, 3);
        assert_eq!(item.unit, "bulbs");
        assert_eq!(item.recipe_name, None);
        assert_eq!(item.group_label(), OTHER_ITEMS_LABEL);
    }

    #[test]
    fn test_rename_can_collide_without_merging() {
        let mut list = ShoppingList::new();
        list.add(NewItem::named("Rice"));
        let yam = list.add(NewItem::named("Yam"));

        assert!(list.update(yam, ItemPatch::edit("rice", 4, "")));
        assert_eq!(list.len(), 2);

        // The next add merges into the first match in insertion order.
        list.add(NewItem::named("RICE"));
        assert_eq!(list.items()[0].quantity, 2);
        assert_eq!(list.items()[1].quantity, 4);
    }
}

mod grouping_tests {
    use super::*;

    #[test]
    fn test_recipe_and_manual_items_split_into_two_groups() {
        let state = session();
        let jollof = state.catalog.get(1).expect("jollof");
        let mut list = ShoppingList::new();
        list.add(NewItem::named("Rice").from_recipe(jollof));
        list.add(NewItem::named("Tomatoes").from_recipe(jollof));
        list.add(NewItem::named("Bread"));
        list.add(NewItem::named("Onions").from_recipe(jollof));

        let groups = list.group_by_recipe();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Jollof Rice");
        let names: Vec<&str> = groups[0].items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Rice", "Tomatoes", "Onions"]);
        assert_eq!(groups[1].label, OTHER_ITEMS_LABEL);
        assert_eq!(groups[1].items.len(), 1);
    }

    #[test]
    fn test_groups_cover_every_item_once() {
        let mut state = session();
        state.add_all_ingredients(1);
        state.add_all_ingredients(2);
        state.shopping.add(NewItem::named("Plantain").quantity(4));

        let groups = state.shopping.group_by_recipe();
        let mut grouped: Vec<u64> = groups
            .iter()
            .flat_map(|g| g.items.iter().map(|i| i.id))
            .collect();
        grouped.sort();
        let mut all: Vec<u64> = state.shopping.items().iter().map(|i| i.id).collect();
        all.sort();
        assert_eq!(grouped, all);
    }

    #[test]
    fn test_empty_list_has_no_groups() {
        assert!(ShoppingList::new().group_by_recipe().is_empty());
    }
}

mod session_tests {
    use super::*;

    #[test]
    fn test_add_all_ingredients_of_a_recipe() {
        let mut state = session();
        let expected = state.catalog.get(6).expect("pounded yam").ingredients.len();

        assert_eq!(state.add_all_ingredients(6), Some(expected));
        assert_eq!(state.shopping.len(), expected);
        assert!(
            state
                .shopping
                .items()
                .iter()
                .all(|i| i.recipe_name.as_deref() == Some("Pounded Yam") && i.quantity == 1)
        );
    }

    #[test]
    fn test_adding_a_recipe_twice_doubles_quantities() {
        let mut state = session();
        state.add_all_ingredients(10);
        state.add_all_ingredients(10);

        let expected = state.catalog.get(10).expect("puff puff").ingredients.len();
        assert_eq!(state.shopping.len(), expected);
        assert!(state.shopping.items().iter().all(|i| i.quantity == 2));
    }

    #[test]
    fn test_unknown_recipe_adds_nothing() {
        let mut state = session();
        assert_eq!(state.add_all_ingredients(999), None);
        assert!(!state.add_ingredient(999, "Rice"));
        assert!(state.shopping.is_empty());
    }

    #[test]
    fn test_remove_then_readd_gets_fresh_id() {
        let mut state = session();
        assert!(state.add_ingredient(3, "1kg beef sirloin, thinly sliced"));
        let first = state.shopping.items()[0].id;

        assert!(state.shopping.remove(first).is_some());
        assert!(state.shopping.remove(first).is_none());

        state.add_ingredient(3, "1kg beef sirloin, thinly sliced");
        assert_ne!(state.shopping.items()[0].id, first);
    }
}
