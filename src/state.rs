//! Session state shared by every view.
//!
//! One `AppState` is built at startup and handed to the views; nothing reaches it through
//! globals. Shopping list and chat history live only for the session.

use crate::assistant::AssistantReply;
use crate::catalog::RecipeCatalog;
use crate::chat::{ChatHistory, ChatMessage};
use crate::config::AppConfig;
use crate::shopping::ShoppingList;
use crate::types::Role;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppState {
    pub catalog: Arc<RecipeCatalog>,
    pub shopping: ShoppingList,
    pub chat: ChatHistory,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(catalog: Arc<RecipeCatalog>, config: AppConfig) -> Self {
        Self {
            catalog,
            shopping: ShoppingList::new(),
            chat: ChatHistory::new(),
            config,
        }
    }

    /// Adds a single ingredient of recipe `recipe_id`. `false` if the recipe is unknown.
    pub fn add_ingredient(&mut self, recipe_id: u32, ingredient: &str) -> bool {
        match self.catalog.get(recipe_id) {
            Some(recipe) => {
                self.shopping.add_recipe_ingredient(recipe, ingredient);
                true
            }
            None => false,
        }
    }

    pub fn add_all_ingredients(&mut self, recipe_id: u32) -> Option<usize> {
        let recipe = self.catalog.get(recipe_id)?;
        Some(self.shopping.add_recipe_ingredients(recipe))
    }

    /// Logs the user's message. Blank input is ignored and yields `None`.
    ///
    /// The text is stored as typed; only the emptiness check trims it.
    pub fn submit_user_message(&mut self, text: &str) -> Option<ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        Some(self.chat.append(Role::User, text))
    }

    pub fn receive_reply(&mut self, reply: AssistantReply) -> ChatMessage {
        self.chat.append(Role::Assistant, reply.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(RecipeCatalog::bundled().unwrap(), AppConfig::default())
    }

    #[test]
    fn test_add_all_ingredients_from_known_recipe() {
        let mut state = state();
        let expected = state.catalog.get(1).unwrap().ingredients.len();
        assert_eq!(state.add_all_ingredients(1), Some(expected));
        assert_eq!(state.shopping.len(), expected);

        let groups = state.shopping.group_by_recipe();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "Jollof Rice");
    }

    #[test]
    fn test_unknown_recipe_is_absent_not_an_error() {
        let mut state = state();
        assert_eq!(state.add_all_ingredients(404), None);
        assert!(!state.add_ingredient(404, "salt"));
        assert!(state.shopping.is_empty());
    }

    #[test]
    fn test_blank_messages_are_not_logged() {
        let mut state = state();
        assert!(state.submit_user_message("   \n").is_none());
        assert!(state.chat.is_empty());

        let stored = state.submit_user_message("I have rice").unwrap();
        assert_eq!(stored.role, Role::User);
        assert_eq!(state.chat.all(), &[stored]);
    }

    #[test]
    fn test_receive_reply_appends_assistant_message() {
        let mut state = state();
        state.submit_user_message("rice");
        let reply = state.receive_reply(AssistantReply {
            generation: 1,
            prompt: "rice".to_string(),
            content: "Try Jollof Rice".to_string(),
        });
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(state.chat.len(), 2);
    }
}
