pub(crate) mod item_management;
pub(crate) mod store_management;
pub(crate) mod tag_management;
pub(crate) mod user_management;

use serde::Serialize;

#[derive(Serialize, Debug)]
pub(crate) struct Message {
    pub message: String,
}

impl Message {
    pub(crate) fn new(message: impl Into<String>) -> Message {
        Message {
            message: message.into(),
        }
    }
}
