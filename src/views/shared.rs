use crate::catalog::{Difficulty, Recipe};
use crate::notice::{NOTICE_HIDE_DELAY, Notice};
use dioxus::prelude::*;

pub fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "difficulty easy",
        Difficulty::Medium => "difficulty medium",
        Difficulty::Hard => "difficulty hard",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardLayout {
    Grid,
    List,
}

#[component]
pub fn RecipeCard(recipe: Recipe, layout: CardLayout, selected_recipe: Signal<Option<u32>>) -> Element {
    let mut selected_recipe = selected_recipe;
    let id = recipe.id;
    let class = match layout {
        CardLayout::Grid => "recipe-card",
        CardLayout::List => "recipe-card list",
    };
    rsx! {
        div { class: class, onclick: move |_| selected_recipe.set(Some(id)),
            if layout == CardLayout::Grid {
                div { class: "recipe-card-image",
                    img { src: "{recipe.image}", alt: "{recipe.name}" }
                    span { class: difficulty_class(recipe.difficulty), "{recipe.difficulty}" }
                }
            }
            div { class: "recipe-card-body",
                h3 { class: "recipe-card-title", "{recipe.name}" }
                p { class: "recipe-card-description", "{recipe.description}" }
                div { class: "recipe-card-meta",
                    span { "⏱ {recipe.cook_time}" }
                    span { "👥 {recipe.servings} servings" }
                }
            }
        }
    }
}

#[component]
pub fn SearchBar(value: Signal<String>, placeholder: &'static str) -> Element {
    let mut value = value;
    rsx! {
        div { class: "search-bar",
            span { class: "search-icon", "🔍" }
            input {
                r#type: "search",
                placeholder: placeholder,
                value: "{value}",
                oninput: move |ev| value.set(ev.value()),
            }
        }
    }
}

#[component]
pub fn EmptySearch() -> Element {
    rsx! {
        div { class: "empty-state",
            div { class: "empty-icon", "🔍" }
            p { class: "text-secondary", "No recipes found" }
            p { class: "text-muted", "Try searching for something else" }
        }
    }
}

/// A toast that hides itself [`NOTICE_HIDE_DELAY`] after the latest `show`.
#[component]
pub fn Snackbar(notice: Signal<Notice>) -> Element {
    let mut hide_task = use_signal(|| Option::<Task>::None);

    use_effect(move || {
        let current = notice();
        if !current.is_visible() {
            return;
        }
        if let Some(previous) = hide_task.write().take() {
            previous.cancel();
        }
        let generation = current.generation();
        let mut control = notice;
        let task = spawn(async move {
            tokio::time::sleep(NOTICE_HIDE_DELAY).await;
            control.write().expire(generation);
        });
        hide_task.set(Some(task));
    });

    let current = notice();
    let message = current.message().to_string();

    rsx! {
        if current.is_visible() {
            div { class: "snackbar", role: "status",
                span { class: "snackbar-icon", "✔" }
                p { "{message}" }
            }
        }
    }
}
