// src/application/commands/articles/create.rs
use super::{ArticleCommandService, language::supported_language};
use crate::{
    application::{dto::ArticleDetailDto, error::ApplicationResult},
    domain::{
        article::{ArticleContent, ArticleSlug, ArticleTitle, NewArticle, NewTranslation},
        category::CategoryId,
    },
};

pub struct CreateArticleCommand {
    pub language: String,
    pub title: String,
    pub content: String,
    pub slug: Option<String>,
    pub publish: bool,
    pub category_id: Option<i64>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    language: Option<String>,
    title: Option<String>,
    content: Option<String>,
    slug: Option<String>,
    publish: bool,
    category_id: Option<i64>,
}

impl CreateArticleCommandBuilder {
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn publish(mut self, publish: bool) -> Self {
        self.publish = publish;
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            language: self.language.ok_or("language is required")?,
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            slug: self.slug,
            publish: self.publish,
            category_id: self.category_id,
        })
    }
}

impl ArticleCommandService {
    /// Create an article together with its initial translation. An omitted
    /// slug is derived from the title and suffixed until globally free; an
    /// explicit slug that is already taken is a conflict.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDetailDto> {
        let language = supported_language(&self.settings, command.language)?;
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let category_id = command.category_id.map(CategoryId::new).transpose()?;

        let slug = match command.slug {
            Some(value) => {
                self.slug_service
                    .claim_explicit_slug(ArticleSlug::new(value)?, None)
                    .await?
            }
            None => self.slug_service.generate_unique_slug(&title, None).await?,
        };

        let now = self.clock.now();
        let new_article = NewArticle {
            published: command.publish,
            category_id,
            created_at: now,
            updated_at: now,
            translation: NewTranslation {
                language,
                title,
                slug,
                content,
            },
        };

        let created = self.write_repo.insert(new_article).await?;
        Ok(created.into())
    }
}
