// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, categories::CategoryCommandService},
        ports::{time::Clock, util::SlugGenerator},
        queries::{articles::ArticleQueryService, categories::CategoryQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        category::CategoryRepository,
        language::LanguageSettings,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    settings: Arc<LanguageSettings>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        settings: LanguageSettings,
    ) -> Self {
        let settings = Arc::new(settings);

        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&slugger),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
            Arc::clone(&settings),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&settings),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&clock),
        ));

        let category_queries = Arc::new(CategoryQueryService::new(
            Arc::clone(&category_repo),
            Arc::clone(&settings),
        ));

        Self {
            article_commands,
            article_queries,
            category_commands,
            category_queries,
            settings,
        }
    }

    pub fn settings(&self) -> Arc<LanguageSettings> {
        Arc::clone(&self.settings)
    }
}
