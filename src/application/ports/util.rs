// src/application/ports/util.rs

/// Turns a translation title into a URL-safe slug candidate. Uniqueness is
/// not this port's job; the slug service suffixes candidates until free.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
