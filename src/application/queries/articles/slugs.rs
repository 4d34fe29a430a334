// src/application/queries/articles/slugs.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::SlugMapDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleSlugsQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// `language -> slug` for one article, covering exactly the languages a
    /// translation row exists for.
    pub async fn get_article_slugs(
        &self,
        query: GetArticleSlugsQuery,
    ) -> ApplicationResult<SlugMapDto> {
        let id = ArticleId::new(query.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let slugs = self.read_repo.slug_map(id).await?;
        Ok(SlugMapDto {
            id: id.into(),
            slugs: slugs
                .into_iter()
                .map(|(language, slug)| (language.into(), slug.into()))
                .collect(),
        })
    }
}
