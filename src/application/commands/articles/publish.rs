// src/application/commands/articles/publish.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDetailDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleUpdate},
};

pub struct SetPublishStateCommand {
    pub id: i64,
    pub publish: bool,
}

impl ArticleCommandService {
    pub async fn set_publish_state(
        &self,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<ArticleDetailDto> {
        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if article.published == command.publish {
            return Ok(article.into());
        }

        let now = self.clock.now();
        if command.publish {
            article.publish(now);
        } else {
            article.unpublish(now);
        }

        let update = ArticleUpdate::new(id, article.updated_at).with_published(article.published);
        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
