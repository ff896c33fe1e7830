// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Produces the per-upload uniqueness token used in stored image names.
pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}
