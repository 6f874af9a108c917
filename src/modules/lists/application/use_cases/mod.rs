pub mod archive_list;
pub mod create_item;
pub mod create_list;
pub mod delete_item;
pub mod delete_list;
pub mod fetch_items;
pub mod fetch_list;
pub mod fetch_lists;
pub mod toggle_item;
pub mod update_item;
pub mod update_list;

#[cfg(test)]
pub(crate) mod support;

pub use archive_list::{ArchiveListError, ArchiveListUseCase, IArchiveListUseCase};
pub use create_item::{CreateItemError, CreateItemRequest, CreateItemUseCase, ICreateItemUseCase};
pub use create_list::{CreateListError, CreateListRequest, CreateListUseCase, ICreateListUseCase};
pub use delete_item::{DeleteItemError, DeleteItemUseCase, IDeleteItemUseCase};
pub use delete_list::{DeleteListError, DeleteListUseCase, IDeleteListUseCase};
pub use fetch_items::{FetchItemsError, FetchItemsUseCase, IFetchItemsUseCase};
pub use fetch_list::{FetchListError, FetchListUseCase, IFetchListUseCase, ListWithItems};
pub use fetch_lists::{FetchListsError, FetchListsUseCase, IFetchListsUseCase};
pub use toggle_item::{IToggleItemUseCase, ToggleItemError, ToggleItemUseCase};
pub use update_item::{IUpdateItemUseCase, UpdateItemError, UpdateItemRequest, UpdateItemUseCase};
pub use update_list::{IUpdateListUseCase, UpdateListError, UpdateListRequest, UpdateListUseCase};
