use crate::errors::Result;
use crate::storage::{Repository, Storage};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 统计各表记录数，按表名返回
pub async fn table_counts(storage: &dyn Storage) -> Result<Vec<(&'static str, u64)>> {
    Ok(vec![
        ("users", storage.users().count().await?),
        ("classes", storage.classes().count().await?),
        ("attendance", storage.attendance().count().await?),
        ("tasks", storage.tasks().count().await?),
        ("submissions", storage.submissions().count().await?),
        ("task_submissions", storage.task_submissions().count().await?),
        ("quizzes", storage.quizzes().count().await?),
        ("quiz_questions", storage.quiz_questions().count().await?),
        ("quiz_options", storage.quiz_options().count().await?),
        ("quiz_attempts", storage.quiz_attempts().count().await?),
        ("quiz_answers", storage.quiz_answers().count().await?),
        ("marks", storage.marks().count().await?),
        ("assessment_types", storage.assessment_types().count().await?),
        ("notes", storage.notes().count().await?),
        ("notifications", storage.notifications().count().await?),
        ("resources", storage.resources().count().await?),
        (
            "faculty_class_subjects",
            storage.faculty_class_subjects().count().await?,
        ),
        ("live_classes", storage.live_classes().count().await?),
    ])
}

/// 准备启动上下文
/// 连接数据库并完成迁移，随后输出各表记录数
pub async fn prepare_startup() -> Result<StartupContext> {
    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    let counts = table_counts(storage.as_ref()).await?;
    let total: u64 = counts.iter().map(|(_, count)| count).sum();
    for (table, count) in &counts {
        debug!("Table {}: {} record(s)", table, count);
    }
    warn!("{} tables ready, {} record(s) in total", counts.len(), total);

    Ok(StartupContext { storage })
}

#[cfg(test)]
mod tests {
    use super::table_counts;
    use crate::models::users::entities::UserRole;
    use crate::storage::sea_orm_storage::test_support::{seed_class, seed_user, storage};

    #[tokio::test]
    async fn test_table_counts_cover_every_table() {
        let storage = storage().await;
        seed_user(&storage, "alice", UserRole::Admin).await;
        seed_user(&storage, "bob", UserRole::Student).await;
        seed_class(&storage, "CSE-2A").await;

        let counts = table_counts(&storage).await.unwrap();
        assert_eq!(counts.len(), 18);
        assert!(counts.contains(&("users", 2)));
        assert!(counts.contains(&("classes", 1)));
        assert!(counts.contains(&("live_classes", 0)));
    }
}
