use crate::domain::article::Article;
use crate::domain::category::entity::{Category, CategoryUpdate, NewCategory};
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;
    /// Delete the category. Articles referencing it keep existing with an
    /// empty category reference.
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn list(&self) -> DomainResult<Vec<Category>>;
    /// Articles referencing `id`, newest first; drafts included, the
    /// inline views are a management surface.
    async fn articles_in(&self, id: CategoryId) -> DomainResult<Vec<Article>>;
}
