table! {
    users (id) {
        id -> Int4,
        username -> Varchar,
        password_hash -> Varchar,
    }
}

table! {
    revoked_token (id) {
        id -> Int4,
        jti -> Varchar,
    }
}

table! {
    stores (id) {
        id -> Int4,
        name -> Varchar,
    }
}

table! {
    items (id) {
        id -> Int4,
        name -> Varchar,
        price -> Float8,
        store_id -> Int4,
    }
}

table! {
    tags (id) {
        id -> Int4,
        name -> Varchar,
        store_id -> Int4,
    }
}

table! {
    tags_items (id) {
        id -> Int4,
        tag_id -> Int4,
        item_id -> Int4,
    }
}

joinable!(items -> stores (store_id));
joinable!(tags -> stores (store_id));
joinable!(tags_items -> tags (tag_id));
joinable!(tags_items -> items (item_id));

allow_tables_to_appear_in_same_query!(
    users,
    stores,
    items,
    tags,
    tags_items,
);
