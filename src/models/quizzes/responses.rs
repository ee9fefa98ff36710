use serde::{Deserialize, Serialize};

use super::entities::{Quiz, QuizAttempt, QuizOption, QuizQuestion};
use crate::models::users::entities::User;

/// 题目及其全部选项（按 position 排序）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionWithOptions {
    pub question: QuizQuestion,
    pub options: Vec<QuizOption>,
}

/// 测验及其全部题目（按 position 排序）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizDetail {
    pub quiz: Quiz,
    pub questions: Vec<QuestionWithOptions>,
}

impl QuizDetail {
    /// 测验总分
    pub fn total_marks(&self) -> f64 {
        self.questions.iter().map(|q| q.question.marks).sum()
    }
}

/// 作答记录及作答学生
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizAttemptDetail {
    pub attempt: QuizAttempt,
    pub student: User,
}
