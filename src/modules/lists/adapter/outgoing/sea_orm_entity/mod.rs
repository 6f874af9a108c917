pub mod list_items;
pub mod lists;
