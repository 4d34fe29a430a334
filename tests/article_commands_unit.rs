// tests/article_commands_unit.rs
use glossa_core::application::commands::articles::{
    AssignCategoryCommand, CreateArticleCommand, RemoveTranslationCommand, SetPublishStateCommand,
    UpsertTranslationCommand,
};
use glossa_core::application::commands::categories::{
    CreateCategoryCommand, DeleteCategoryCommand,
};
use glossa_core::application::error::ApplicationError;
use glossa_core::domain::errors::DomainError;

mod support;

use support::{InMemoryStore, default_settings, in_memory_services};

fn create_command(language: &str, title: &str) -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .language(language)
        .title(title)
        .content(format!("Content of {title}"))
        .build()
        .expect("complete command")
}

#[tokio::test]
async fn generated_slugs_are_suffixed_until_free() {
    let store = InMemoryStore::new();
    let services = in_memory_services(&store, default_settings());

    let first = services
        .article_commands
        .create_article(create_command("en", "Hello World"))
        .await
        .unwrap();
    let second = services
        .article_commands
        .create_article(create_command("en", "Hello World"))
        .await
        .unwrap();

    assert_eq!(first.translations[0].slug, "hello-world");
    assert_eq!(second.translations[0].slug, "hello-world-2");
}

#[tokio::test]
async fn explicit_duplicate_slug_is_a_conflict() {
    let store = InMemoryStore::new();
    let services = in_memory_services(&store, default_settings());

    let mut command = create_command("en", "First");
    command.slug = Some("taken".into());
    services.article_commands.create_article(command).await.unwrap();

    let mut command = create_command("en", "Second");
    command.slug = Some("taken".into());
    let err = services
        .article_commands
        .create_article(command)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Conflict(_))
    ));
}

#[tokio::test]
async fn unconfigured_language_is_rejected() {
    let store = InMemoryStore::new();
    let services = in_memory_services(&store, default_settings());

    let err = services
        .article_commands
        .create_article(create_command("es", "Hola"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn upserting_a_translation_keeps_its_own_slug() {
    let store = InMemoryStore::new();
    let services = in_memory_services(&store, default_settings());

    let article = services
        .article_commands
        .create_article(create_command("en", "Hello"))
        .await
        .unwrap();

    // Re-submitting the same slug for the same language is not a conflict.
    let updated = services
        .article_commands
        .upsert_translation(UpsertTranslationCommand {
            id: article.id,
            language: "en".into(),
            title: "Hello Again".into(),
            content: "Updated content".into(),
            slug: Some("hello".into()),
        })
        .await
        .unwrap();

    assert_eq!(updated.translations.len(), 1);
    assert_eq!(updated.translations[0].title, "Hello Again");
    assert_eq!(updated.translations[0].slug, "hello");
}

#[tokio::test]
async fn adding_a_translation_grows_the_slug_map() {
    let store = InMemoryStore::new();
    let services = in_memory_services(&store, default_settings());

    let article = services
        .article_commands
        .create_article(create_command("en", "Hello"))
        .await
        .unwrap();

    let updated = services
        .article_commands
        .upsert_translation(UpsertTranslationCommand {
            id: article.id,
            language: "de".into(),
            title: "Hallo".into(),
            content: "Deutscher Inhalt".into(),
            slug: None,
        })
        .await
        .unwrap();

    let languages: Vec<&str> = updated
        .translations
        .iter()
        .map(|t| t.language.as_str())
        .collect();
    assert_eq!(languages, vec!["de", "en"]);
    assert_eq!(updated.translations[0].slug, "hallo");
}

#[tokio::test]
async fn the_last_translation_cannot_be_removed() {
    let store = InMemoryStore::new();
    let services = in_memory_services(&store, default_settings());

    let article = services
        .article_commands
        .create_article(create_command("en", "Hello"))
        .await
        .unwrap();

    let err = services
        .article_commands
        .remove_translation(RemoveTranslationCommand {
            id: article.id,
            language: "en".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Conflict(_))
    ));
}

#[tokio::test]
async fn removing_a_translation_shrinks_the_article() {
    let store = InMemoryStore::new();
    let services = in_memory_services(&store, default_settings());

    let article = services
        .article_commands
        .create_article(create_command("en", "Hello"))
        .await
        .unwrap();
    services
        .article_commands
        .upsert_translation(UpsertTranslationCommand {
            id: article.id,
            language: "de".into(),
            title: "Hallo".into(),
            content: "Deutscher Inhalt".into(),
            slug: None,
        })
        .await
        .unwrap();

    let updated = services
        .article_commands
        .remove_translation(RemoveTranslationCommand {
            id: article.id,
            language: "de".into(),
        })
        .await
        .unwrap();
    assert_eq!(updated.translations.len(), 1);
    assert_eq!(updated.translations[0].language, "en");
}

#[tokio::test]
async fn publish_state_round_trips() {
    let store = InMemoryStore::new();
    let services = in_memory_services(&store, default_settings());

    let article = services
        .article_commands
        .create_article(create_command("en", "Draft"))
        .await
        .unwrap();
    assert!(!article.published);

    let published = services
        .article_commands
        .set_publish_state(SetPublishStateCommand {
            id: article.id,
            publish: true,
        })
        .await
        .unwrap();
    assert!(published.published);

    let unpublished = services
        .article_commands
        .set_publish_state(SetPublishStateCommand {
            id: article.id,
            publish: false,
        })
        .await
        .unwrap();
    assert!(!unpublished.published);
}

#[tokio::test]
async fn assigning_an_unknown_category_is_a_validation_error() {
    let store = InMemoryStore::new();
    let services = in_memory_services(&store, default_settings());

    let article = services
        .article_commands
        .create_article(create_command("en", "Hello"))
        .await
        .unwrap();

    let err = services
        .article_commands
        .assign_category(AssignCategoryCommand {
            id: article.id,
            category_id: Some(99),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
}

#[tokio::test]
async fn deleting_a_category_clears_article_references() {
    let store = InMemoryStore::new();
    let services = in_memory_services(&store, default_settings());

    let category = services
        .category_commands
        .create_category(CreateCategoryCommand {
            name: "Tutorials".into(),
        })
        .await
        .unwrap();

    let article = services
        .article_commands
        .create_article(create_command("en", "Hello"))
        .await
        .unwrap();
    let assigned = services
        .article_commands
        .assign_category(AssignCategoryCommand {
            id: article.id,
            category_id: Some(category.id),
        })
        .await
        .unwrap();
    assert_eq!(assigned.category_id, Some(category.id));

    services
        .category_commands
        .delete_category(DeleteCategoryCommand { id: category.id })
        .await
        .unwrap();

    // The article survives; only its reference is cleared.
    let reloaded = services
        .article_queries
        .get_article_by_id(glossa_core::application::queries::articles::GetArticleByIdQuery {
            id: article.id,
        })
        .await
        .unwrap();
    assert_eq!(reloaded.category_id, None);
}
