//! Data models for the articles service

pub mod article;
pub mod user;

pub use article::{Article, NewArticle};
pub use user::User;
