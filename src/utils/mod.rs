pub mod generator;
pub mod messages;
pub mod storage;
pub mod store;
pub mod users;
