pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{
    Category, CategoryDisplay, CategoryUpdate, InlineStyle, NewCategory, StackedCategory,
    TabularCategory,
};
pub use repository::CategoryRepository;
pub use value_objects::{CategoryId, CategoryName};
