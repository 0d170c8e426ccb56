use crate::preferences::PreferenceStore;
use crate::state::AppState;
use crate::theme::theme_definition;
use crate::types::ThemeMode;
use crate::views::{ChatView, HomeView, RecipeDetailView, RecipesView, ShoppingListView};
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppTab {
    Home,
    Recipes,
    Shopping,
    Chat,
}

/// Starts the front-end with `state` provided as root context.
pub fn launch(state: AppState) {
    LaunchBuilder::new().with_context(state).launch(App);
}

/// The shared session state. Panics when called outside [`App`], which provides it.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

#[component]
pub fn App() -> Element {
    let initial = use_context::<AppState>();
    let prefer_dark = initial.config.prefer_dark;
    let store_root = initial
        .config
        .data_dir
        .clone()
        .unwrap_or_else(PreferenceStore::default_root);
    use_context_provider(|| Signal::new(initial));

    let store = use_hook(|| PreferenceStore::new(store_root));
    let theme = {
        let store = store.clone();
        use_signal(move || ThemeMode::from_dark_flag(store.load_dark_mode(prefer_dark)))
    };
    use_theme_persistence(theme, store);

    let active_tab = use_signal(|| AppTab::Home);
    let selected_recipe = use_signal(|| Option::<u32>::None);
    let definition = theme_definition(theme());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        style { dangerous_inner_html: "{definition.css}" }
        div { class: "{definition.root_class}",
            TabPanels { active_tab, selected_recipe, theme }
            if let Some(recipe_id) = selected_recipe() {
                RecipeDetailView { recipe_id, selected_recipe }
            }
            BottomNavigation { active_tab, selected_recipe }
        }
    }
}

fn use_theme_persistence(theme: Signal<ThemeMode>, store: PreferenceStore) {
    use_effect(move || {
        let dark = theme().is_dark();
        if let Err(err) = store.save_dark_mode(dark) {
            tracing::warn!("failed to save theme preference: {}", err);
        }
    });
}

#[component]
fn TabPanels(
    active_tab: Signal<AppTab>,
    selected_recipe: Signal<Option<u32>>,
    theme: Signal<ThemeMode>,
) -> Element {
    rsx! {
        div { class: "tab-panels",
            TabPanel {
                active_tab,
                tab: AppTab::Home,
                children: rsx!( HomeView { selected_recipe, theme } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Recipes,
                children: rsx!( RecipesView { selected_recipe } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Shopping,
                children: rsx!( ShoppingListView {} ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Chat,
                children: rsx!( ChatView {} ),
            }
        }
    }
}

#[component]
fn TabPanel(active_tab: Signal<AppTab>, tab: AppTab, children: Element) -> Element {
    let is_active = active_tab() == tab;
    let class_suffix = if is_active { "active" } else { "" };
    rsx! {
        div {
            class: format_args!("tab-panel {}", class_suffix),
            aria_hidden: (!is_active).to_string(),
            {children}
        }
    }
}

#[component]
fn BottomNavigation(active_tab: Signal<AppTab>, selected_recipe: Signal<Option<u32>>) -> Element {
    rsx! {
        nav { class: "bottom-nav",
            NavButton { active_tab, selected_recipe, tab: AppTab::Home, icon: "🏠", label: "Home" }
            NavButton { active_tab, selected_recipe, tab: AppTab::Recipes, icon: "📖", label: "Recipes" }
            NavButton { active_tab, selected_recipe, tab: AppTab::Shopping, icon: "🛒", label: "Shopping" }
            NavButton { active_tab, selected_recipe, tab: AppTab::Chat, icon: "🤖", label: "AI Chat" }
        }
    }
}

#[component]
fn NavButton(
    active_tab: Signal<AppTab>,
    selected_recipe: Signal<Option<u32>>,
    tab: AppTab,
    icon: &'static str,
    label: &'static str,
) -> Element {
    let mut active_tab = active_tab;
    let mut selected_recipe = selected_recipe;
    let class = if active_tab() == tab && selected_recipe().is_none() {
        "nav-item active"
    } else {
        "nav-item"
    };
    rsx! {
        button {
            class: class,
            r#type: "button",
            title: label,
            onclick: move |_| {
                selected_recipe.set(None);
                active_tab.set(tab);
            },
            span { class: "nav-icon", "{icon}" }
            span { class: "nav-label", "{label}" }
        }
    }
}
