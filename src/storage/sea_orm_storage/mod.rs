//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

#[macro_use]
mod macros;

mod assessment_types;
mod attendance;
mod classes;
mod faculty_class_subjects;
mod live_classes;
mod marks;
mod notes;
mod notifications;
mod quiz_answers;
mod quiz_attempts;
mod quiz_options;
mod quiz_questions;
mod quizzes;
mod resources;
mod submissions;
mod task_submissions;
mod tasks;
mod users;

pub use assessment_types::AssessmentTypeStore;
pub use attendance::AttendanceStore;
pub use classes::ClassStore;
pub use faculty_class_subjects::FacultyClassSubjectStore;
pub use live_classes::LiveClassStore;
pub use marks::MarksStore;
pub use notes::NoteStore;
pub use notifications::NotificationStore;
pub use quiz_answers::QuizAnswerStore;
pub use quiz_attempts::QuizAttemptStore;
pub use quiz_options::QuizOptionStore;
pub use quiz_questions::QuizQuestionStore;
pub use quizzes::QuizStore;
pub use resources::ResourceStore;
pub use submissions::SubmissionStore;
pub use task_submissions::TaskSubmissionStore;
pub use tasks::TaskStore;
pub use users::UserStore;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{Result, TrackerError};
use crate::storage::{
    AssessmentTypeRepository, AttendanceRepository, ClassRepository,
    FacultyClassSubjectRepository, LiveClassRepository, MarksRepository, NoteRepository,
    NotificationRepository, QuizAnswerRepository, QuizAttemptRepository, QuizOptionRepository,
    QuizQuestionRepository, QuizRepository, ResourceRepository, Storage, SubmissionRepository,
    TaskRepository, TaskSubmissionRepository, UserRepository,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    users: UserStore,
    classes: ClassStore,
    attendance: AttendanceStore,
    tasks: TaskStore,
    submissions: SubmissionStore,
    task_submissions: TaskSubmissionStore,
    quizzes: QuizStore,
    quiz_questions: QuizQuestionStore,
    quiz_options: QuizOptionStore,
    quiz_attempts: QuizAttemptStore,
    quiz_answers: QuizAnswerStore,
    marks: MarksStore,
    assessment_types: AssessmentTypeStore,
    notes: NoteStore,
    notifications: NotificationStore,
    resources: ResourceStore,
    faculty_class_subjects: FacultyClassSubjectStore,
    live_classes: LiveClassStore,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        Self::connect(&AppConfig::get().database).await
    }

    /// 连接数据库并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| TrackerError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self::from_connection(db))
    }

    fn from_connection(db: DatabaseConnection) -> Self {
        Self {
            users: UserStore::new(db.clone()),
            classes: ClassStore::new(db.clone()),
            attendance: AttendanceStore::new(db.clone()),
            tasks: TaskStore::new(db.clone()),
            submissions: SubmissionStore::new(db.clone()),
            task_submissions: TaskSubmissionStore::new(db.clone()),
            quizzes: QuizStore::new(db.clone()),
            quiz_questions: QuizQuestionStore::new(db.clone()),
            quiz_options: QuizOptionStore::new(db.clone()),
            quiz_attempts: QuizAttemptStore::new(db.clone()),
            quiz_answers: QuizAnswerStore::new(db.clone()),
            marks: MarksStore::new(db.clone()),
            assessment_types: AssessmentTypeStore::new(db.clone()),
            notes: NoteStore::new(db.clone()),
            notifications: NotificationStore::new(db.clone()),
            resources: ResourceStore::new(db.clone()),
            faculty_class_subjects: FacultyClassSubjectStore::new(db.clone()),
            live_classes: LiveClassStore::new(db),
        }
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| TrackerError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| TrackerError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| TrackerError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(TrackerError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite:, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

impl Storage for SeaOrmStorage {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn classes(&self) -> &dyn ClassRepository {
        &self.classes
    }

    fn attendance(&self) -> &dyn AttendanceRepository {
        &self.attendance
    }

    fn tasks(&self) -> &dyn TaskRepository {
        &self.tasks
    }

    fn submissions(&self) -> &dyn SubmissionRepository {
        &self.submissions
    }

    fn task_submissions(&self) -> &dyn TaskSubmissionRepository {
        &self.task_submissions
    }

    fn quizzes(&self) -> &dyn QuizRepository {
        &self.quizzes
    }

    fn quiz_questions(&self) -> &dyn QuizQuestionRepository {
        &self.quiz_questions
    }

    fn quiz_options(&self) -> &dyn QuizOptionRepository {
        &self.quiz_options
    }

    fn quiz_attempts(&self) -> &dyn QuizAttemptRepository {
        &self.quiz_attempts
    }

    fn quiz_answers(&self) -> &dyn QuizAnswerRepository {
        &self.quiz_answers
    }

    fn marks(&self) -> &dyn MarksRepository {
        &self.marks
    }

    fn assessment_types(&self) -> &dyn AssessmentTypeRepository {
        &self.assessment_types
    }

    fn notes(&self) -> &dyn NoteRepository {
        &self.notes
    }

    fn notifications(&self) -> &dyn NotificationRepository {
        &self.notifications
    }

    fn resources(&self) -> &dyn ResourceRepository {
        &self.resources
    }

    fn faculty_class_subjects(&self) -> &dyn FacultyClassSubjectRepository {
        &self.faculty_class_subjects
    }

    fn live_classes(&self) -> &dyn LiveClassRepository {
        &self.live_classes
    }
}
