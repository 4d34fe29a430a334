// src/domain/category/entity.rs
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn rename(&mut self, name: CategoryName, now: DateTime<Utc>) {
        self.name = name;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub name: CategoryName,
    pub updated_at: DateTime<Utc>,
}

/// How a presentational category variant renders its article inlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStyle {
    /// Nested cards carrying the resolved translation content.
    Stacked,
    /// Flat rows with identifying fields only.
    Tabular,
}

/// Display metadata shared by [`Category`] and its presentational
/// variants. The variants carry no state of their own, they only pick
/// different labels and an inline rendering style over the same row.
pub trait CategoryDisplay {
    const VERBOSE_NAME: &'static str;
    const VERBOSE_NAME_PLURAL: &'static str;

    fn category(&self) -> &Category;

    fn name(&self) -> &CategoryName {
        &self.category().name
    }

    fn id(&self) -> CategoryId {
        self.category().id
    }
}

impl CategoryDisplay for Category {
    const VERBOSE_NAME: &'static str = "Category";
    const VERBOSE_NAME_PLURAL: &'static str = "Categories";

    fn category(&self) -> &Category {
        self
    }
}

/// Zero-behavior alias of [`Category`] that renders its articles stacked.
#[derive(Debug, Clone)]
pub struct StackedCategory(Category);

impl StackedCategory {
    pub const INLINE_STYLE: InlineStyle = InlineStyle::Stacked;

    pub fn into_inner(self) -> Category {
        self.0
    }
}

impl From<Category> for StackedCategory {
    fn from(category: Category) -> Self {
        Self(category)
    }
}

impl CategoryDisplay for StackedCategory {
    const VERBOSE_NAME: &'static str = "Stacked Category";
    const VERBOSE_NAME_PLURAL: &'static str = "Stacked Categories";

    fn category(&self) -> &Category {
        &self.0
    }
}

/// Zero-behavior alias of [`Category`] that renders its articles as rows.
#[derive(Debug, Clone)]
pub struct TabularCategory(Category);

impl TabularCategory {
    pub const INLINE_STYLE: InlineStyle = InlineStyle::Tabular;

    pub fn into_inner(self) -> Category {
        self.0
    }
}

impl From<Category> for TabularCategory {
    fn from(category: Category) -> Self {
        Self(category)
    }
}

impl CategoryDisplay for TabularCategory {
    const VERBOSE_NAME: &'static str = "Tabular Category";
    const VERBOSE_NAME_PLURAL: &'static str = "Tabular Categories";

    fn category(&self) -> &Category {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_category() -> Category {
        Category {
            id: CategoryId::new(7).unwrap(),
            name: CategoryName::new("Tutorials").unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn proxies_over_the_same_row_report_the_same_name() {
        let category = sample_category();
        let stacked = StackedCategory::from(category.clone());
        let tabular = TabularCategory::from(category.clone());
        assert_eq!(stacked.name(), tabular.name());
        assert_eq!(stacked.name(), &category.name);
        assert_eq!(stacked.id(), tabular.id());
    }

    #[test]
    fn proxies_differ_only_in_presentation() {
        assert_eq!(StackedCategory::INLINE_STYLE, InlineStyle::Stacked);
        assert_eq!(TabularCategory::INLINE_STYLE, InlineStyle::Tabular);
        assert_eq!(StackedCategory::VERBOSE_NAME, "Stacked Category");
        assert_eq!(TabularCategory::VERBOSE_NAME_PLURAL, "Tabular Categories");
    }

    #[test]
    fn rename_updates_name_and_timestamp() {
        let mut category = sample_category();
        let now = Utc::now();
        category.rename(CategoryName::new("Guides").unwrap(), now);
        assert_eq!(category.name.as_str(), "Guides");
        assert_eq!(category.updated_at, now);
    }
}
