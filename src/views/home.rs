use crate::theme::theme_definition;
use crate::types::ThemeMode;
use crate::ui::use_app_state;
use crate::views::shared::{CardLayout, EmptySearch, RecipeCard, SearchBar};
use dioxus::prelude::*;

#[component]
pub fn HomeView(selected_recipe: Signal<Option<u32>>, theme: Signal<ThemeMode>) -> Element {
    let app = use_app_state();
    let search = use_signal(String::new);
    let featured: Vec<_> = app
        .read()
        .catalog
        .featured(&search())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div { class: "main-container",
            div { class: "page-header",
                ThemeToggle { theme }
                div { class: "page-title centered",
                    h1 { "🍲 Mama's Kitchen" }
                    p { class: "page-subtitle", "Discover authentic Nigerian recipes" }
                }
                SearchBar { value: search, placeholder: "Search recipes..." }
            }
            div { class: "page-body",
                h2 { class: "section-title", "Popular Recipes" }
                if featured.is_empty() {
                    EmptySearch {}
                } else {
                    div { class: "recipe-stack",
                        for recipe in featured {
                            RecipeCard {
                                key: "{recipe.id}",
                                recipe: recipe.clone(),
                                layout: CardLayout::Grid,
                                selected_recipe,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ThemeToggle(theme: Signal<ThemeMode>) -> Element {
    let mut theme = theme;
    let icon = if theme().is_dark() { "☀" } else { "🌙" };
    let label = theme_definition(theme()).toggle_label;
    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            title: label,
            onclick: move |_| theme.set(theme().toggled()),
            "{icon}"
        }
    }
}
