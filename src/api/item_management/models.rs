use crate::schema::items;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Queryable, Debug)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub store_id: i32,
}

#[derive(Insertable)]
#[table_name = "items"]
pub struct NewItem {
    pub name: String,
    pub price: f64,
    pub store_id: i32,
}

#[derive(Deserialize)]
pub struct ItemIn {
    pub name: String,
    pub price: f64,
    pub store_id: i32,
}

#[derive(Deserialize)]
pub struct ItemUpdate {
    pub name: String,
    pub price: f64,
}

#[derive(Serialize)]
pub struct ItemOut {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub store_id: i32,
}

impl From<Item> for ItemOut {
    fn from(item: Item) -> ItemOut {
        ItemOut {
            id: item.id,
            name: item.name,
            price: item.price,
            store_id: item.store_id,
        }
    }
}
