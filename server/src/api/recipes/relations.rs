//! Loading and linking of a recipe's ingredient, category, and favorite
//! relations.

use crate::api::categories::CategoryResponse;
use crate::api::favorites::FavoriteResponse;
use crate::api::ingredients::IngredientResponse;
use crate::api::ApiError;
use crate::models::{
    Category, Favorite, Ingredient, NewRecipeCategory, NewRecipeIngredient, Recipe,
    RecipeCategory, RecipeIngredient,
};
use crate::schema::{categories, ingredients, recipe_categories, recipe_ingredients};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A recipe with all of its relations eagerly loaded.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    /// Preparation steps in their stored order
    pub steps: Vec<String>,
    pub cook_time_minutes: i32,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub ingredients: Vec<IngredientResponse>,
    pub categories: Vec<CategoryResponse>,
    pub favorites: Vec<FavoriteResponse>,
}

/// Batch-load relations for a set of recipes, preserving input order.
pub fn load_recipe_graphs(
    conn: &mut PgConnection,
    recipes: Vec<Recipe>,
) -> Result<Vec<RecipeResponse>, diesel::result::Error> {
    let ingredient_rows: Vec<(RecipeIngredient, Ingredient)> =
        RecipeIngredient::belonging_to(&recipes)
            .inner_join(ingredients::table)
            .select((RecipeIngredient::as_select(), Ingredient::as_select()))
            .load(conn)?;

    let category_rows: Vec<(RecipeCategory, Category)> = RecipeCategory::belonging_to(&recipes)
        .inner_join(categories::table)
        .select((RecipeCategory::as_select(), Category::as_select()))
        .load(conn)?;

    let favorite_rows: Vec<Favorite> = Favorite::belonging_to(&recipes)
        .select(Favorite::as_select())
        .load(conn)?;

    let grouped_ingredients = ingredient_rows.grouped_by(&recipes);
    let grouped_categories = category_rows.grouped_by(&recipes);
    let grouped_favorites = favorite_rows.grouped_by(&recipes);

    Ok(recipes
        .into_iter()
        .zip(grouped_ingredients)
        .zip(grouped_categories)
        .zip(grouped_favorites)
        .map(
            |(((recipe, ingredients), categories), favorites)| RecipeResponse {
                id: recipe.id,
                user_id: recipe.user_id,
                title: recipe.title,
                steps: recipe.steps.into_iter().flatten().collect(),
                cook_time_minutes: recipe.cook_time_minutes,
                photo_url: recipe.photo_url,
                created_at: recipe.created_at,
                updated_at: recipe.updated_at,
                ingredients: ingredients
                    .into_iter()
                    .map(|(_, ingredient)| IngredientResponse::from(ingredient))
                    .collect(),
                categories: categories
                    .into_iter()
                    .map(|(_, category)| CategoryResponse::from(category))
                    .collect(),
                favorites: favorites.into_iter().map(FavoriteResponse::from).collect(),
            },
        )
        .collect())
}

pub fn load_recipe_graph(
    conn: &mut PgConnection,
    recipe: Recipe,
) -> Result<RecipeResponse, diesel::result::Error> {
    match load_recipe_graphs(conn, vec![recipe])?.pop() {
        Some(graph) => Ok(graph),
        None => Err(diesel::result::Error::NotFound),
    }
}

/// Insert ingredient link rows. Ids are not pre-validated: a dangling id
/// trips the foreign key and surfaces as NotFound.
pub fn link_ingredients(
    conn: &mut PgConnection,
    recipe_id: Uuid,
    ingredient_ids: &[Uuid],
) -> Result<(), ApiError> {
    if ingredient_ids.is_empty() {
        return Ok(());
    }

    let rows: Vec<NewRecipeIngredient> = ingredient_ids
        .iter()
        .map(|&ingredient_id| NewRecipeIngredient {
            recipe_id,
            ingredient_id,
        })
        .collect();

    diesel::insert_into(recipe_ingredients::table)
        .values(&rows)
        .execute(conn)
        .map_err(|err| match err {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                _,
            ) => ApiError::not_found("One or more ingredient ids do not exist"),
            err => err.into(),
        })?;

    Ok(())
}

/// Insert category link rows; same contract as [`link_ingredients`].
pub fn link_categories(
    conn: &mut PgConnection,
    recipe_id: Uuid,
    category_ids: &[Uuid],
) -> Result<(), ApiError> {
    if category_ids.is_empty() {
        return Ok(());
    }

    let rows: Vec<NewRecipeCategory> = category_ids
        .iter()
        .map(|&category_id| NewRecipeCategory {
            recipe_id,
            category_id,
        })
        .collect();

    diesel::insert_into(recipe_categories::table)
        .values(&rows)
        .execute(conn)
        .map_err(|err| match err {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                _,
            ) => ApiError::not_found("One or more category ids do not exist"),
            err => err.into(),
        })?;

    Ok(())
}
