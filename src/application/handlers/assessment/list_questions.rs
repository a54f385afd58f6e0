//! ListQuestions - Query handler for the questionnaire listing.

use std::sync::Arc;

use crate::domain::assessment::QuestionCatalog;
use crate::ports::QuestionSource;

/// Handler for listing every questionnaire row.
pub struct ListQuestionsHandler {
    source: Arc<dyn QuestionSource>,
}

impl ListQuestionsHandler {
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    /// Loads a fresh catalog; empty when the data file is unavailable.
    pub async fn handle(&self) -> QuestionCatalog {
        self.source.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::assessment::test_support::StaticQuestionSource;

    #[tokio::test]
    async fn lists_questions_in_source_order() {
        let handler = ListQuestionsHandler::new(Arc::new(StaticQuestionSource::sample()));
        let catalog = handler.handle().await;
        let ids: Vec<_> = catalog
            .questions()
            .iter()
            .filter_map(|q| q.id().map(|id| id.to_string()))
            .collect();
        assert_eq!(ids, vec!["Q1", "Q2"]);
    }

    #[tokio::test]
    async fn empty_source_lists_nothing() {
        let handler = ListQuestionsHandler::new(Arc::new(StaticQuestionSource::empty()));
        assert!(handler.handle().await.is_empty());
    }
}
