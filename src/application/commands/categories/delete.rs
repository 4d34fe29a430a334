// src/application/commands/categories/delete.rs
use super::CategoryCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::category::CategoryId,
};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    /// Delete the category. Articles that referenced it survive with an
    /// empty category reference.
    pub async fn delete_category(&self, command: DeleteCategoryCommand) -> ApplicationResult<()> {
        let id = CategoryId::new(command.id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        self.repo.delete(id).await?;
        Ok(())
    }
}
