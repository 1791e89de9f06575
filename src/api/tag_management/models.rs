use crate::api::item_management::models::ItemOut;
use crate::schema::{tags, tags_items};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Queryable, Debug)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    pub store_id: i32,
}

#[derive(Insertable)]
#[table_name = "tags"]
pub struct NewTag {
    pub name: String,
    pub store_id: i32,
}

#[derive(Insertable)]
#[table_name = "tags_items"]
pub struct NewTagItem {
    pub tag_id: i32,
    pub item_id: i32,
}

#[derive(Deserialize)]
pub struct TagIn {
    pub name: String,
}

#[derive(Serialize)]
pub struct TagOut {
    pub id: i32,
    pub name: String,
    pub store_id: i32,
}

impl From<Tag> for TagOut {
    fn from(tag: Tag) -> TagOut {
        TagOut {
            id: tag.id,
            name: tag.name,
            store_id: tag.store_id,
        }
    }
}

/// Body returned when a link is removed; carries both sides of the
/// former association.
#[derive(Serialize)]
pub struct UnlinkOut {
    pub message: String,
    pub item: ItemOut,
    pub tag: TagOut,
}
