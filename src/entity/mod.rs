//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod assessment_types;
pub mod attendance;
pub mod classes;
pub mod faculty_class_subjects;
pub mod live_classes;
pub mod marks;
pub mod notes;
pub mod notifications;
pub mod quiz_answers;
pub mod quiz_attempts;
pub mod quiz_options;
pub mod quiz_questions;
pub mod quizzes;
pub mod resources;
pub mod submissions;
pub mod task_submissions;
pub mod tasks;
pub mod user_roles;
pub mod users;
