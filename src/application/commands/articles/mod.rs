// src/application/commands/articles/mod.rs
mod categorize;
mod create;
mod delete;
mod language;
mod publish;
mod remove_translation;
mod service;
mod upsert_translation;

pub use categorize::AssignCategoryCommand;
pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use publish::SetPublishStateCommand;
pub use remove_translation::RemoveTranslationCommand;
pub use service::ArticleCommandService;
pub use upsert_translation::UpsertTranslationCommand;
