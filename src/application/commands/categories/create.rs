// src/application/commands/categories/create.rs
use super::CategoryCommandService;
use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::category::{CategoryName, NewCategory},
};

pub struct CreateCategoryCommand {
    pub name: String,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let now = self.clock.now();

        let created = self
            .repo
            .insert(NewCategory {
                name,
                created_at: now,
                updated_at: now,
            })
            .await?;
        Ok(created.into())
    }
}
