//! Question Source Port - where questionnaire items come from.

use async_trait::async_trait;

use crate::domain::assessment::QuestionCatalog;

/// Port for loading the questionnaire.
///
/// # Contract
///
/// Implementations must:
/// - Reload from the backing store on every call (no caching)
/// - Never fail: a missing or unreadable source is logged and yields an
///   empty catalog, so scoring still works with placeholder text
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn load(&self) -> QuestionCatalog;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_source_is_object_safe() {
        fn check<T: QuestionSource + ?Sized>() {}
        check::<dyn QuestionSource>();
    }
}
