//! Repositories for database operations

pub mod article;
pub mod user;

pub use article::ArticleRepository;
pub use user::UserRepository;
