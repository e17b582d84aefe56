use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sessions)]
pub struct NewSession<'a> {
    pub user_id: i32,
    pub token_hash: &'a str,
    pub expires_at: NaiveDateTime,
}

/// Local copy of an external recipe, created the first time anyone saves it.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Recipe {
    pub id: i32,
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub image: Option<String>,
    pub user_id: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub id: i32,
    pub title: &'a str,
    pub ingredients: &'a str,
    pub instructions: &'a str,
    pub image: Option<&'a str>,
    pub user_id: i32,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::user_recipes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRecipe {
    pub id: i32,
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub image_url: String,
    pub user_id: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::user_recipes)]
pub struct NewUserRecipe<'a> {
    pub title: &'a str,
    pub ingredients: &'a str,
    pub instructions: &'a str,
    pub image_url: &'a str,
    pub user_id: i32,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::saved_recipes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SavedRecipe {
    pub id: i32,
    pub user_id: i32,
    pub recipe_id: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::saved_recipes)]
pub struct NewSavedRecipe {
    pub user_id: i32,
    pub recipe_id: i32,
}
