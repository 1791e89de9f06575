use crate::schema::stores;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Queryable, Debug)]
pub struct Store {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[table_name = "stores"]
pub struct NewStore {
    pub name: String,
}

#[derive(Deserialize)]
pub struct StoreIn {
    pub name: String,
}

#[derive(Serialize)]
pub struct StoreOut {
    pub id: i32,
    pub name: String,
}

impl From<Store> for StoreOut {
    fn from(store: Store) -> StoreOut {
        StoreOut {
            id: store.id,
            name: store.name,
        }
    }
}
