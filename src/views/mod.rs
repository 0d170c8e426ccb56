pub mod chat;
pub mod detail;
pub mod home;
pub mod recipes;
pub mod shared;
pub mod shopping;

pub use chat::ChatView;
pub use detail::RecipeDetailView;
pub use home::HomeView;
pub use recipes::RecipesView;
pub use shopping::ShoppingListView;
