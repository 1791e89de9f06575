pub(crate) mod delete_user;
pub(crate) mod get_user;
pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod models;
pub(crate) mod refresh;
pub(crate) mod register;
