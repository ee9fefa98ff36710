//! 预导入模块，方便使用

pub use super::assessment_types::{
    ActiveModel as AssessmentTypeActiveModel, Entity as AssessmentTypes,
    Model as AssessmentTypeModel,
};
pub use super::attendance::{
    ActiveModel as AttendanceActiveModel, Entity as Attendance, Model as AttendanceModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::faculty_class_subjects::{
    ActiveModel as FacultyClassSubjectActiveModel, Entity as FacultyClassSubjects,
    Model as FacultyClassSubjectModel,
};
pub use super::live_classes::{
    ActiveModel as LiveClassActiveModel, Entity as LiveClasses, Model as LiveClassModel,
};
pub use super::marks::{ActiveModel as MarksActiveModel, Entity as Marks, Model as MarksModel};
pub use super::notes::{ActiveModel as NoteActiveModel, Entity as Notes, Model as NoteModel};
pub use super::notifications::{
    ActiveModel as NotificationActiveModel, Entity as Notifications, Model as NotificationModel,
};
pub use super::quiz_answers::{
    ActiveModel as QuizAnswerActiveModel, Entity as QuizAnswers, Model as QuizAnswerModel,
};
pub use super::quiz_attempts::{
    ActiveModel as QuizAttemptActiveModel, Entity as QuizAttempts, Model as QuizAttemptModel,
};
pub use super::quiz_options::{
    ActiveModel as QuizOptionActiveModel, Entity as QuizOptions, Model as QuizOptionModel,
};
pub use super::quiz_questions::{
    ActiveModel as QuizQuestionActiveModel, Entity as QuizQuestions, Model as QuizQuestionModel,
};
pub use super::quizzes::{ActiveModel as QuizActiveModel, Entity as Quizzes, Model as QuizModel};
pub use super::resources::{
    ActiveModel as ResourceActiveModel, Entity as Resources, Model as ResourceModel,
};
pub use super::submissions::{
    ActiveModel as SubmissionActiveModel, Entity as Submissions, Model as SubmissionModel,
};
pub use super::task_submissions::{
    ActiveModel as TaskSubmissionActiveModel, Entity as TaskSubmissions,
    Model as TaskSubmissionModel,
};
pub use super::tasks::{ActiveModel as TaskActiveModel, Entity as Tasks, Model as TaskModel};
pub use super::user_roles::{
    ActiveModel as UserRoleActiveModel, Entity as UserRoles, Model as UserRoleModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
