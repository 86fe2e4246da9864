//! Shared application state.
//!
//! Contains the state the UI shares across all views: the authenticated
//! session, the latest search results, the current meal selection, and the
//! favorited recipes.

use std::sync::Arc;

use futures::future;
use serde_json::Value;
use tracing::{debug, warn};

use crate::http::HttpDefaults;
use crate::models::{Recipe, User};
use crate::storage::Storage;

/// Storage key holding the raw session token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-serialized user record.
pub const USER_KEY: &str = "user";

/// The application store shared by every view of the UI.
///
/// Mutators are the only sanctioned way to change the fields. The embedding
/// application holds the single mutable handle and serializes calls (a UI
/// event loop, or an outer lock), so each mutator runs to completion before
/// the next one starts. Session changes are written through to storage and
/// to the shared default headers before the mutator returns.
pub struct AppStore {
    pub token: String,
    pub user: User,
    pub search_results: Vec<Value>,
    pub current_meal: i64,
    pub favorited_recipes: Vec<Recipe>,

    storage: Arc<dyn Storage>,
    http: Arc<HttpDefaults>,
}

impl AppStore {
    /// Create an empty store on top of the given storage backend and
    /// default-header map. Use `startup::init` to also restore a previous
    /// session; callers building the store directly start logged out.
    pub fn new(storage: Arc<dyn Storage>, http: Arc<HttpDefaults>) -> Self {
        AppStore {
            token: String::new(),
            user: User::default(),
            search_results: Vec::new(),
            current_meal: 0,
            favorited_recipes: Vec::new(),
            storage,
            http,
        }
    }

    /// The default-header map this store keeps in sync; the request layer
    /// builds its clients from it.
    pub fn http_defaults(&self) -> Arc<HttpDefaults> {
        self.http.clone()
    }

    /// Load the token and user a previous run persisted, if any, and arm
    /// the Authorization default header. Called once at startup.
    ///
    /// A stored user record that no longer parses is reported as an error
    /// rather than silently discarded.
    pub async fn restore(&mut self) -> Result<(), String> {
        let (token, user) = future::try_join(
            self.storage.get(TOKEN_KEY),
            self.storage.get(USER_KEY),
        )
        .await?;

        if let Some(user_json) = user {
            self.user = serde_json::from_str(&user_json)
                .map_err(|e| format!("Failed to parse stored user: {}", e))?;
        }

        if let Some(token) = token {
            debug!("Restored session token from storage.");
            self.http.set_bearer(&token)?;
            self.token = token;
        }

        Ok(())
    }

    /// Getter: the favorited recipes, unchanged.
    pub fn favorite_recipes(&self) -> &[Recipe] {
        &self.favorited_recipes
    }

    /// Set the session token (may be empty), persist it, and point the
    /// default `Authorization` header at it.
    pub async fn set_auth_token(&mut self, token: impl Into<String>) -> Result<(), String> {
        self.token = token.into();
        self.storage.set(TOKEN_KEY, &self.token).await?;
        self.http.set_bearer(&self.token)
    }

    /// Set the logged-in user and persist it as JSON.
    pub async fn set_user(&mut self, user: User) -> Result<(), String> {
        self.user = user;
        let serialized = serde_json::to_string(&self.user)
            .map_err(|e| format!("Failed to serialize user: {}", e))?;
        self.storage.set(USER_KEY, &serialized).await
    }

    /// End the session: drop the persisted token and user, reset both to
    /// empty, and clear ALL default headers. Search results, the current
    /// meal, and favorites are left alone.
    pub async fn logout(&mut self) -> Result<(), String> {
        self.storage.remove(TOKEN_KEY).await?;
        self.storage.remove(USER_KEY).await?;
        self.token.clear();
        self.user = User::default();
        self.http.clear();
        Ok(())
    }

    /// Replace the search results wholesale.
    pub fn set_search_results(&mut self, results: Vec<Value>) {
        self.search_results = results;
    }

    /// Replace the favorited recipes wholesale.
    pub fn set_favorited_recipes(&mut self, recipes: Vec<Recipe>) {
        debug!("Replacing favorited recipes ({} entries).", recipes.len());
        self.favorited_recipes = recipes;
    }

    /// Append a recipe to the favorites. Duplicates are permitted.
    pub fn add_recipe(&mut self, recipe: Recipe) {
        self.favorited_recipes.push(recipe);
    }

    /// Remove the first favorite equal to `recipe`. Removing a recipe that
    /// is not in the list does nothing.
    pub fn remove_recipe(&mut self, recipe: &Recipe) {
        match self.favorited_recipes.iter().position(|r| r == recipe) {
            Some(index) => {
                self.favorited_recipes.remove(index);
            }
            None => {
                warn!(
                    "Recipe '{}' is not in the favorites, nothing to remove.",
                    recipe.label
                );
            }
        }
    }

    /// Replace the current meal selection.
    pub fn set_current_meal(&mut self, meal_id: i64) {
        self.current_meal = meal_id;
    }
}
