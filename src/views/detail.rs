use crate::notice::Notice;
use crate::ui::use_app_state;
use crate::views::shared::{Snackbar, difficulty_class};
use dioxus::prelude::*;

#[component]
pub fn RecipeDetailView(recipe_id: u32, selected_recipe: Signal<Option<u32>>) -> Element {
    let mut app = use_app_state();
    let mut selected_recipe = selected_recipe;
    let mut notice = use_signal(Notice::default);

    let Some(recipe) = app.read().catalog.get(recipe_id).cloned() else {
        return rsx! {
            div { class: "detail-overlay",
                div { class: "empty-state",
                    div { class: "empty-icon", "😕" }
                    p { class: "text-secondary", "Recipe not found" }
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| selected_recipe.set(None),
                        "Back"
                    }
                }
            }
        };
    };

    let ingredients = recipe.ingredients.clone();
    let instructions = recipe.instructions.clone();

    rsx! {
        div { class: "detail-overlay",
            div { class: "detail-hero",
                img { src: "{recipe.image}", alt: "{recipe.name}" }
                button {
                    class: "back-button",
                    r#type: "button",
                    title: "Back",
                    onclick: move |_| selected_recipe.set(None),
                    "←"
                }
                div { class: "detail-hero-caption",
                    h1 { "{recipe.name}" }
                    div { class: "recipe-card-meta",
                        span { "⏱ {recipe.cook_time}" }
                        span { "👥 {recipe.servings} servings" }
                        span { class: difficulty_class(recipe.difficulty), "{recipe.difficulty}" }
                    }
                }
            }
            div { class: "page-body",
                section { class: "detail-section",
                    p { class: "text-secondary", "{recipe.description}" }
                }
                section { class: "detail-section",
                    div { class: "section-heading",
                        h2 { class: "section-title", "Ingredients" }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| {
                                if let Some(count) = app.write().add_all_ingredients(recipe_id) {
                                    notice.write().show(format!("Added {count} ingredients to your shopping list"));
                                }
                            },
                            "+ Add All"
                        }
                    }
                    ul { class: "ingredient-list",
                        for (index, (label, ingredient)) in ingredients.into_iter().map(|i| (i.clone(), i)).enumerate() {
                            li { key: "{index}", class: "ingredient-row",
                                span { "{label}" }
                                button {
                                    class: "icon-button",
                                    r#type: "button",
                                    title: "Add to shopping list",
                                    onclick: move |_| {
                                        if app.write().add_ingredient(recipe_id, &ingredient) {
                                            notice.write().show(format!("{ingredient} added to your shopping list"));
                                        }
                                    },
                                    "+"
                                }
                            }
                        }
                    }
                }
                section { class: "detail-section",
                    h2 { class: "section-title", "Instructions" }
                    ol { class: "instruction-list",
                        for (step, instruction) in instructions.iter().enumerate().map(|(i, s)| (i + 1, s)) {
                            li { key: "{step}", class: "instruction-row",
                                span { class: "step-number", "{step}" }
                                p { "{instruction}" }
                            }
                        }
                    }
                }
            }
            Snackbar { notice }
        }
    }
}
