mod api;
mod auth;
mod catchers;
mod cors;
mod db;
mod error;
mod schema;
mod settings;

#[macro_use]
extern crate rocket;
#[macro_use]
extern crate diesel;
extern crate dotenv;
#[macro_use]
extern crate diesel_migrations;

use auth::tokens::{first_user_is_admin, TokenIssuer};
use cors::CORS;
use db::{run_db_migrations, DbConn};
use rocket::fairing::AdHoc;
use settings::Settings;

#[get("/")]
fn index() -> &'static str {
    "Storefront API"
}

#[launch]
async fn rocket() -> _ {
    dotenv::dotenv().ok();

    let settings = Settings::new();
    let issuer = TokenIssuer::new(&settings, first_user_is_admin);

    rocket::build()
        .attach(CORS)
        .attach(DbConn::fairing())
        .attach(AdHoc::on_ignite("Database Migrations", run_db_migrations))
        .manage(issuer)
        .register(
            "/",
            catchers![
                catchers::bad_request,
                catchers::unauthorized,
                catchers::not_found,
                catchers::unprocessable_entity,
                catchers::internal_error,
            ],
        )
        .mount(
            "/",
            routes![
                index,
                crate::api::user_management::register::register,
                crate::api::user_management::login::login,
                crate::api::user_management::logout::logout,
                crate::api::user_management::refresh::refresh,
                crate::api::user_management::get_user::get_user,
                crate::api::user_management::delete_user::delete_user,
                crate::api::store_management::list::get_stores,
                crate::api::store_management::create::create_store,
                crate::api::store_management::get_store::get_store,
                crate::api::store_management::delete_store::delete_store,
                crate::api::item_management::list::get_items,
                crate::api::item_management::create::create_item,
                crate::api::item_management::get_item::get_item,
                crate::api::item_management::edit::edit_item,
                crate::api::item_management::delete::delete_item,
                crate::api::tag_management::get_tag::get_tag,
                crate::api::tag_management::delete_tag::delete_tag,
                crate::api::tag_management::get_store_tags::get_store_tags,
                crate::api::tag_management::create_tag::create_tag,
                crate::api::tag_management::link_tag::link_tag,
                crate::api::tag_management::unlink_tag::unlink_tag,
            ],
        )
}
