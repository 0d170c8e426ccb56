use crate::ui::use_app_state;
use crate::views::shared::{CardLayout, EmptySearch, RecipeCard, SearchBar};
use dioxus::prelude::*;

#[component]
pub fn RecipesView(selected_recipe: Signal<Option<u32>>) -> Element {
    let app = use_app_state();
    let search = use_signal(String::new);
    let mut layout = use_signal(|| CardLayout::Grid);
    let matches: Vec<_> = app
        .read()
        .catalog
        .search(&search())
        .into_iter()
        .cloned()
        .collect();
    let count = matches.len();
    let option_class = |option: CardLayout| {
        if layout() == option {
            "layout-option active"
        } else {
            "layout-option"
        }
    };
    let grid_class = option_class(CardLayout::Grid);
    let list_class = option_class(CardLayout::List);

    rsx! {
        div { class: "main-container",
            div { class: "page-header",
                div { class: "page-title split",
                    div {
                        h1 { "All Recipes" }
                        p { class: "page-subtitle", "{count} Nigerian recipes" }
                    }
                    div { class: "layout-toggle",
                        button {
                            class: grid_class,
                            r#type: "button",
                            title: "Grid view",
                            onclick: move |_| layout.set(CardLayout::Grid),
                            "▦"
                        }
                        button {
                            class: list_class,
                            r#type: "button",
                            title: "List view",
                            onclick: move |_| layout.set(CardLayout::List),
                            "☰"
                        }
                    }
                }
                SearchBar { value: search, placeholder: "Search recipes..." }
            }
            div { class: "page-body",
                if matches.is_empty() {
                    EmptySearch {}
                } else {
                    div { class: "recipe-stack",
                        for recipe in matches {
                            RecipeCard {
                                key: "{recipe.id}",
                                recipe: recipe.clone(),
                                layout: layout(),
                                selected_recipe,
                            }
                        }
                    }
                }
            }
        }
    }
}
