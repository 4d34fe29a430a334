pub mod articles;
pub mod categories;
pub mod pagination;
pub mod serde_time;

pub use articles::{ArticleDetailDto, ArticleDto, SlugMapDto, TranslationDto};
pub use categories::{ArticleInlineRowDto, CategoryDto, StackedCategoryDto, TabularCategoryDto};
pub use pagination::CursorPage;
