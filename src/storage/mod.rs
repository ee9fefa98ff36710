//! 存储层接口
//!
//! 每个实体一个仓库 trait，全部继承通用的 [`Repository`]。
//! 未找到返回 `Ok(None)`，存在性检查返回 `Ok(bool)`，计数无匹配时返回 0。

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::Result;
use crate::models::{
    attendance::entities::{Attendance, AttendanceStatus},
    classes::entities::Class,
    faculty_class_subjects::{
        entities::FacultyClassSubject, responses::FacultyClassSubjectDetail,
    },
    live_classes::entities::{LiveClass, LiveClassStatus},
    marks::entities::{AssessmentType, Marks},
    notes::entities::Note,
    notifications::entities::Notification,
    quizzes::{
        entities::{AttemptStatus, Quiz, QuizAnswer, QuizAttempt, QuizOption, QuizQuestion},
        responses::{QuestionWithOptions, QuizAttemptDetail, QuizDetail},
    },
    resources::entities::{Resource, ResourceType},
    tasks::{
        entities::{Submission, SubmissionStatus, Task, TaskStatus, TaskSubmission, TaskSubmissionStatus},
        responses::{SubmissionDetail, TaskDetail},
    },
    users::entities::{User, UserRole},
};

pub mod sea_orm_storage;

/// 通用仓库接口
#[async_trait]
pub trait Repository<T, Id>: Send + Sync
where
    T: Send + 'static,
    Id: Send + 'static,
{
    /// 保存记录：id 为空或对应行不存在时插入，否则更新。返回带 id 的记录
    async fn save(&self, record: T) -> Result<T>;
    async fn find_by_id(&self, id: Id) -> Result<Option<T>>;
    /// 按 id 升序返回全部记录
    async fn find_all(&self) -> Result<Vec<T>>;
    /// 删除成功返回 true
    async fn delete_by_id(&self, id: Id) -> Result<bool>;
    /// 返回删除的行数
    async fn delete_all(&self) -> Result<u64>;
    async fn exists_by_id(&self, id: Id) -> Result<bool>;
    async fn count(&self) -> Result<u64>;
}

#[async_trait]
pub trait UserRepository: Repository<User, i64> {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn find_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    async fn exists_by_username(&self, username: &str) -> Result<bool>;
    async fn exists_by_email(&self, email: &str) -> Result<bool>;
    async fn find_by_role(&self, role: UserRole) -> Result<Vec<User>>;
    async fn find_by_class_id(&self, class_id: i64) -> Result<Vec<User>>;
    async fn find_by_class_id_and_role(&self, class_id: i64, role: UserRole) -> Result<Vec<User>>;
    async fn find_by_department(&self, department: &str) -> Result<Vec<User>>;
    async fn find_by_active(&self, active: bool) -> Result<Vec<User>>;
}

#[async_trait]
pub trait ClassRepository: Repository<Class, i64> {
    async fn find_by_name(&self, name: &str) -> Result<Option<Class>>;
    async fn exists_by_name(&self, name: &str) -> Result<bool>;
    async fn find_by_department(&self, department: &str) -> Result<Vec<Class>>;
    async fn find_by_year_and_division(&self, year: i32, division: &str) -> Result<Vec<Class>>;
    async fn find_by_academic_year(&self, academic_year: &str) -> Result<Vec<Class>>;
    async fn find_by_active(&self, active: bool) -> Result<Vec<Class>>;
    async fn find_by_department_and_year(&self, department: &str, year: i32)
    -> Result<Vec<Class>>;
}

#[async_trait]
pub trait AttendanceRepository: Repository<Attendance, i64> {
    async fn find_by_student_id(&self, student_id: i64) -> Result<Vec<Attendance>>;
    async fn find_by_student_id_and_date(
        &self,
        student_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Attendance>>;
    async fn find_by_class_id_and_date(
        &self,
        class_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Attendance>>;
    async fn find_by_faculty_id_and_date(
        &self,
        faculty_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Attendance>>;
    async fn find_by_student_id_and_date_and_faculty_id(
        &self,
        student_id: i64,
        date: NaiveDate,
        faculty_id: i64,
    ) -> Result<Option<Attendance>>;
    async fn exists_by_student_id_and_date_and_faculty_id(
        &self,
        student_id: i64,
        date: NaiveDate,
        faculty_id: i64,
    ) -> Result<bool>;
    /// 日期区间两端均包含，按日期升序
    async fn find_by_student_id_and_date_between(
        &self,
        student_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Attendance>>;
    /// 日期区间两端均包含，按日期升序
    async fn find_by_class_id_and_date_between(
        &self,
        class_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Attendance>>;
    async fn count_by_student_id_and_status(
        &self,
        student_id: i64,
        status: AttendanceStatus,
    ) -> Result<u64>;
    async fn count_by_student_id_and_status_and_date_between(
        &self,
        student_id: i64,
        status: AttendanceStatus,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<u64>;
}

#[async_trait]
pub trait TaskRepository: Repository<Task, i64> {
    /// 按创建时间倒序
    async fn find_by_assigned_to(&self, user_id: i64) -> Result<Vec<Task>>;
    /// 按创建时间倒序
    async fn find_by_assigned_by(&self, user_id: i64) -> Result<Vec<Task>>;
    async fn find_by_assigned_to_and_status(
        &self,
        user_id: i64,
        status: TaskStatus,
    ) -> Result<Vec<Task>>;
    async fn find_by_status(&self, status: TaskStatus) -> Result<Vec<Task>>;
    async fn find_by_class_id(&self, class_id: i64) -> Result<Vec<Task>>;
    async fn find_by_due_date_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Task>>;
    async fn count_by_assigned_to_and_status(
        &self,
        user_id: i64,
        status: TaskStatus,
    ) -> Result<u64>;
    async fn find_by_id_with_users(&self, id: i64) -> Result<Option<TaskDetail>>;
    async fn find_all_with_users(&self) -> Result<Vec<TaskDetail>>;
    async fn find_by_assigned_to_with_users(&self, user_id: i64) -> Result<Vec<TaskDetail>>;
}

#[async_trait]
pub trait SubmissionRepository: Repository<Submission, i64> {
    async fn find_by_task_id(&self, task_id: i64) -> Result<Vec<Submission>>;
    /// 按提交时间倒序
    async fn find_by_student_id(&self, student_id: i64) -> Result<Vec<Submission>>;
    async fn find_by_status(&self, status: SubmissionStatus) -> Result<Vec<Submission>>;
    async fn find_by_task_id_and_student_id(
        &self,
        task_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>>;
    async fn exists_by_task_id_and_student_id(&self, task_id: i64, student_id: i64)
    -> Result<bool>;
    async fn count_by_task_id(&self, task_id: i64) -> Result<u64>;
    async fn find_by_id_with_details(&self, id: i64) -> Result<Option<SubmissionDetail>>;
    async fn find_by_task_id_with_details(&self, task_id: i64) -> Result<Vec<SubmissionDetail>>;
    async fn find_by_student_id_with_details(
        &self,
        student_id: i64,
    ) -> Result<Vec<SubmissionDetail>>;
}

#[async_trait]
pub trait TaskSubmissionRepository: Repository<TaskSubmission, i64> {
    /// 按提交时间倒序
    async fn find_by_task_id(&self, task_id: i64) -> Result<Vec<TaskSubmission>>;
    async fn find_by_submitted_by(&self, user_id: i64) -> Result<Vec<TaskSubmission>>;
    async fn find_by_status(&self, status: TaskSubmissionStatus) -> Result<Vec<TaskSubmission>>;
    async fn find_by_task_id_and_status(
        &self,
        task_id: i64,
        status: TaskSubmissionStatus,
    ) -> Result<Vec<TaskSubmission>>;
    async fn find_by_task_id_and_submitted_by(
        &self,
        task_id: i64,
        user_id: i64,
    ) -> Result<Option<TaskSubmission>>;
    async fn exists_by_task_id_and_submitted_by(&self, task_id: i64, user_id: i64)
    -> Result<bool>;
}

#[async_trait]
pub trait QuizRepository: Repository<Quiz, i64> {
    /// 按创建时间倒序
    async fn find_by_faculty_id(&self, faculty_id: i64) -> Result<Vec<Quiz>>;
    async fn find_by_class_id(&self, class_id: i64) -> Result<Vec<Quiz>>;
    async fn find_by_class_id_and_active(&self, class_id: i64, active: bool) -> Result<Vec<Quiz>>;
    async fn find_by_subject(&self, subject: &str) -> Result<Vec<Quiz>>;
    async fn find_by_faculty_id_and_class_id(
        &self,
        faculty_id: i64,
        class_id: i64,
    ) -> Result<Vec<Quiz>>;
    /// 题目与选项均按 position 排序
    async fn find_by_id_with_questions(&self, id: i64) -> Result<Option<QuizDetail>>;
}

#[async_trait]
pub trait QuizQuestionRepository: Repository<QuizQuestion, i64> {
    /// 按 position 升序
    async fn find_by_quiz_id(&self, quiz_id: i64) -> Result<Vec<QuizQuestion>>;
    async fn count_by_quiz_id(&self, quiz_id: i64) -> Result<u64>;
    async fn find_by_id_with_options(&self, id: i64) -> Result<Option<QuestionWithOptions>>;
}

#[async_trait]
pub trait QuizOptionRepository: Repository<QuizOption, i64> {
    /// 按 position 升序
    async fn find_by_question_id(&self, question_id: i64) -> Result<Vec<QuizOption>>;
    async fn find_by_question_id_and_correct(
        &self,
        question_id: i64,
        correct: bool,
    ) -> Result<Vec<QuizOption>>;
}

#[async_trait]
pub trait QuizAttemptRepository: Repository<QuizAttempt, i64> {
    async fn find_by_quiz_id(&self, quiz_id: i64) -> Result<Vec<QuizAttempt>>;
    /// 按开始时间倒序
    async fn find_by_student_id(&self, student_id: i64) -> Result<Vec<QuizAttempt>>;
    async fn find_by_quiz_id_and_status(
        &self,
        quiz_id: i64,
        status: AttemptStatus,
    ) -> Result<Vec<QuizAttempt>>;
    async fn find_by_quiz_id_and_student_id(
        &self,
        quiz_id: i64,
        student_id: i64,
    ) -> Result<Option<QuizAttempt>>;
    /// 每个学生每个测验最多作答一次
    async fn exists_by_quiz_id_and_student_id(&self, quiz_id: i64, student_id: i64)
    -> Result<bool>;
    async fn count_by_quiz_id(&self, quiz_id: i64) -> Result<u64>;
    async fn find_by_quiz_id_with_student(&self, quiz_id: i64) -> Result<Vec<QuizAttemptDetail>>;
}

#[async_trait]
pub trait QuizAnswerRepository: Repository<QuizAnswer, i64> {
    async fn find_by_attempt_id(&self, attempt_id: i64) -> Result<Vec<QuizAnswer>>;
    async fn find_by_attempt_id_and_question_id(
        &self,
        attempt_id: i64,
        question_id: i64,
    ) -> Result<Option<QuizAnswer>>;
    async fn count_by_attempt_id_and_correct(&self, attempt_id: i64, correct: bool)
    -> Result<u64>;
}

#[async_trait]
pub trait MarksRepository: Repository<Marks, i64> {
    async fn find_by_student_id(&self, student_id: i64) -> Result<Vec<Marks>>;
    async fn find_by_student_id_and_subject(
        &self,
        student_id: i64,
        subject: &str,
    ) -> Result<Vec<Marks>>;
    async fn find_by_class_id_and_subject(&self, class_id: i64, subject: &str)
    -> Result<Vec<Marks>>;
    async fn find_by_assessment_type_id(&self, assessment_type_id: i64) -> Result<Vec<Marks>>;
    async fn find_by_class_id_and_subject_and_assessment_type_id(
        &self,
        class_id: i64,
        subject: &str,
        assessment_type_id: i64,
    ) -> Result<Vec<Marks>>;
    async fn find_by_entered_by(&self, faculty_id: i64) -> Result<Vec<Marks>>;
    /// 存在多条时返回考核日期最近的一条
    async fn find_by_student_id_and_subject_and_assessment_type_id(
        &self,
        student_id: i64,
        subject: &str,
        assessment_type_id: i64,
    ) -> Result<Option<Marks>>;
    /// 日期区间两端均包含，按日期升序
    async fn find_by_student_id_and_date_between(
        &self,
        student_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Marks>>;
    async fn exists_by_assessment_type_id(&self, assessment_type_id: i64) -> Result<bool>;
}

#[async_trait]
pub trait AssessmentTypeRepository: Repository<AssessmentType, i64> {
    async fn find_by_name(&self, name: &str) -> Result<Option<AssessmentType>>;
    async fn exists_by_name(&self, name: &str) -> Result<bool>;
    async fn find_by_created_by(&self, user_id: i64) -> Result<Vec<AssessmentType>>;
    async fn find_by_active(&self, active: bool) -> Result<Vec<AssessmentType>>;
    async fn find_by_created_by_and_active(
        &self,
        user_id: i64,
        active: bool,
    ) -> Result<Vec<AssessmentType>>;
}

#[async_trait]
pub trait NoteRepository: Repository<Note, i64> {
    /// 按创建时间倒序
    async fn find_by_created_by(&self, user_id: i64) -> Result<Vec<Note>>;
    async fn find_by_assigned_to(&self, user_id: i64) -> Result<Vec<Note>>;
    async fn find_by_public(&self, public: bool) -> Result<Vec<Note>>;
    async fn find_by_created_by_and_public(&self, user_id: i64, public: bool)
    -> Result<Vec<Note>>;
    /// 自己创建的笔记或任何公开笔记，按创建时间倒序
    async fn find_by_created_by_or_public(&self, user_id: i64) -> Result<Vec<Note>>;
}

#[async_trait]
pub trait NotificationRepository: Repository<Notification, i64> {
    /// 按创建时间倒序
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Notification>>;
    /// 按创建时间倒序
    async fn find_by_user_id_and_read(&self, user_id: i64, read: bool)
    -> Result<Vec<Notification>>;
    async fn count_by_user_id_and_read(&self, user_id: i64, read: bool) -> Result<u64>;
    /// 最近 10 条
    async fn find_top10_by_user_id(&self, user_id: i64) -> Result<Vec<Notification>>;
}

/// 除特别说明外，均按上传时间倒序
#[async_trait]
pub trait ResourceRepository: Repository<Resource, i64> {
    async fn find_by_uploaded_by(&self, user_id: i64) -> Result<Vec<Resource>>;
    async fn find_by_class_id(&self, class_id: i64) -> Result<Vec<Resource>>;
    async fn find_by_subject(&self, subject: &str) -> Result<Vec<Resource>>;
    async fn find_by_resource_type(&self, resource_type: ResourceType) -> Result<Vec<Resource>>;
    async fn find_by_public(&self, public: bool) -> Result<Vec<Resource>>;
    async fn find_by_class_id_and_subject(
        &self,
        class_id: i64,
        subject: &str,
    ) -> Result<Vec<Resource>>;
    async fn find_by_class_id_and_public(
        &self,
        class_id: i64,
        public: bool,
    ) -> Result<Vec<Resource>>;
}

#[async_trait]
pub trait FacultyClassSubjectRepository: Repository<FacultyClassSubject, i64> {
    async fn find_by_faculty_id(&self, faculty_id: i64) -> Result<Vec<FacultyClassSubject>>;
    async fn find_by_class_id(&self, class_id: i64) -> Result<Vec<FacultyClassSubject>>;
    async fn find_by_faculty_id_and_active(
        &self,
        faculty_id: i64,
        active: bool,
    ) -> Result<Vec<FacultyClassSubject>>;
    async fn find_by_class_id_and_active(
        &self,
        class_id: i64,
        active: bool,
    ) -> Result<Vec<FacultyClassSubject>>;
    async fn find_by_faculty_id_and_class_id(
        &self,
        faculty_id: i64,
        class_id: i64,
    ) -> Result<Vec<FacultyClassSubject>>;
    async fn find_by_faculty_id_and_class_id_and_active(
        &self,
        faculty_id: i64,
        class_id: i64,
        active: bool,
    ) -> Result<Vec<FacultyClassSubject>>;
    async fn find_by_faculty_id_and_class_id_and_subject(
        &self,
        faculty_id: i64,
        class_id: i64,
        subject: &str,
    ) -> Result<Option<FacultyClassSubject>>;
    async fn exists_by_faculty_id_and_class_id_and_subject(
        &self,
        faculty_id: i64,
        class_id: i64,
        subject: &str,
    ) -> Result<bool>;
    async fn find_by_faculty_id_with_class(
        &self,
        faculty_id: i64,
    ) -> Result<Vec<FacultyClassSubjectDetail>>;
}

#[async_trait]
pub trait LiveClassRepository: Repository<LiveClass, i64> {
    /// 按计划时间升序
    async fn find_by_faculty_id(&self, faculty_id: i64) -> Result<Vec<LiveClass>>;
    /// 按计划时间升序
    async fn find_by_class_id(&self, class_id: i64) -> Result<Vec<LiveClass>>;
    /// 按计划时间升序
    async fn find_by_class_id_and_status(
        &self,
        class_id: i64,
        status: LiveClassStatus,
    ) -> Result<Vec<LiveClass>>;
    async fn find_by_status(&self, status: LiveClassStatus) -> Result<Vec<LiveClass>>;
    async fn find_by_faculty_id_and_status(
        &self,
        faculty_id: i64,
        status: LiveClassStatus,
    ) -> Result<Vec<LiveClass>>;
    /// 区间两端均包含，按计划时间升序
    async fn find_by_scheduled_at_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<LiveClass>>;
    /// 状态为 scheduled 且计划时间不早于 `from`，按计划时间升序
    async fn find_upcoming_by_class_id(
        &self,
        class_id: i64,
        from: DateTime<Utc>,
    ) -> Result<Vec<LiveClass>>;
}

/// 存储入口，按实体提供仓库
pub trait Storage: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn classes(&self) -> &dyn ClassRepository;
    fn attendance(&self) -> &dyn AttendanceRepository;
    fn tasks(&self) -> &dyn TaskRepository;
    fn submissions(&self) -> &dyn SubmissionRepository;
    fn task_submissions(&self) -> &dyn TaskSubmissionRepository;
    fn quizzes(&self) -> &dyn QuizRepository;
    fn quiz_questions(&self) -> &dyn QuizQuestionRepository;
    fn quiz_options(&self) -> &dyn QuizOptionRepository;
    fn quiz_attempts(&self) -> &dyn QuizAttemptRepository;
    fn quiz_answers(&self) -> &dyn QuizAnswerRepository;
    fn marks(&self) -> &dyn MarksRepository;
    fn assessment_types(&self) -> &dyn AssessmentTypeRepository;
    fn notes(&self) -> &dyn NoteRepository;
    fn notifications(&self) -> &dyn NotificationRepository;
    fn resources(&self) -> &dyn ResourceRepository;
    fn faculty_class_subjects(&self) -> &dyn FacultyClassSubjectRepository;
    fn live_classes(&self) -> &dyn LiveClassRepository;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
