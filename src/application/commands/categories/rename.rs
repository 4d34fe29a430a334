// src/application/commands/categories/rename.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryId, CategoryName, CategoryUpdate},
};

pub struct RenameCategoryCommand {
    pub id: i64,
    pub name: String,
}

impl CategoryCommandService {
    pub async fn rename_category(
        &self,
        command: RenameCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(command.id)?;
        let name = CategoryName::new(command.name)?;

        let mut category = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let now = self.clock.now();
        category.rename(name.clone(), now);

        let updated = self
            .repo
            .update(CategoryUpdate {
                id,
                name,
                updated_at: category.updated_at,
            })
            .await?;
        Ok(updated.into())
    }
}
