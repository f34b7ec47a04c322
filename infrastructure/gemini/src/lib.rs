pub mod client;
pub mod item_identifier;
