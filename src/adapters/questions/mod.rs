//! Question adapters - Implementations of `QuestionSource`.

mod file_question_source;

pub use file_question_source::FileQuestionSource;
