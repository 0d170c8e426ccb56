//! Ingredient-overlap recipe recommendation.
//!
//! Lowercase the text, keep whitespace-separated tokens longer than two characters, and pick
//! the first recipe (in catalog order) whose joined ingredient text contains any token as a
//! plain substring. There is no ranking by match count.

use crate::catalog::{Recipe, RecipeCatalog};

/// Tokens of this many characters or fewer are ignored.
const MIN_TOKEN_CHARS: usize = 2;

pub const FALLBACK_REPLY: &str = "I couldn't find a perfect match for your ingredients, but here are some popular Nigerian recipes you might enjoy:

🍲 **Jollof Rice** - A classic one-pot dish
🥣 **Egusi Soup** - Rich melon seed soup
🍖 **Suya** - Spicy grilled meat skewers

Tell me more about what you have available, and I'll give you a better recommendation!";

/// Canned prompts offered on an empty conversation.
pub const SUGGESTED_PROMPTS: [&str; 4] = [
    "I have rice, tomatoes, and chicken",
    "What can I make with beans?",
    "I want something spicy",
    "Quick 30-minute meal ideas",
];

fn query_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

fn ingredient_text(recipe: &Recipe) -> String {
    recipe.ingredients.join(" ").to_lowercase()
}

pub fn recommend<'a>(text: &str, recipes: &'a [Recipe]) -> Option<&'a Recipe> {
    let tokens = query_tokens(text);
    if tokens.is_empty() {
        return None;
    }

    recipes.iter().find(|recipe| {
        let haystack = ingredient_text(recipe);
        tokens.iter().any(|token| haystack.contains(token.as_str()))
    })
}

pub fn format_recommendation(recipe: &Recipe) -> String {
    format!(
        "Based on your ingredients, I recommend making **{name}**! 🍲

{description}

**Cook time:** {cook_time}
**Serves:** {servings} people
**Difficulty:** {difficulty}

This recipe would be perfect with what you have. Would you like me to suggest any alternatives or help you with something else?",
        name = recipe.name,
        description = recipe.description,
        cook_time = recipe.cook_time,
        servings = recipe.servings,
        difficulty = recipe.difficulty,
    )
}

/// The assistant's reply to `text`: a recommendation, or the popular-recipes fallback.
pub fn compose_reply(text: &str, catalog: &RecipeCatalog) -> String {
    match recommend(text, catalog.recipes()) {
        Some(recipe) => {
            tracing::debug!(recipe_id = recipe.id, name = %recipe.name, "recommended recipe");
            format_recommendation(recipe)
        }
        None => {
            tracing::debug!("no recipe matched, replying with fallback");
            FALLBACK_REPLY.to_string()
        }
    }
}
