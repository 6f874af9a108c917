pub mod list_query_postgres;
pub mod list_repository_postgres;
pub mod sea_orm_entity;

pub use list_query_postgres::ListQueryPostgres;
pub use list_repository_postgres::ListRepositoryPostgres;
