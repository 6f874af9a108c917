pub mod archive_list;
pub mod create_item;
pub mod create_list;
pub mod delete_item;
pub mod delete_list;
pub mod get_list;
pub mod list_dto;
pub mod list_items;
pub mod list_lists;
pub mod toggle_item;
pub mod update_item;
pub mod update_list;

pub use archive_list::{archive_list_handler, unarchive_list_handler};
pub use create_item::create_item_handler;
pub use create_list::create_list_handler;
pub use delete_item::delete_item_handler;
pub use delete_list::delete_list_handler;
pub use get_list::get_list_handler;
pub use list_dto::{ItemDto, ListDto, ListWithItemsDto};
pub use list_items::list_items_handler;
pub use list_lists::list_lists_handler;
pub use toggle_item::toggle_item_handler;
pub use update_item::update_item_handler;
pub use update_list::update_list_handler;
