//! 用户存储操作
//!
//! 角色保存在 user_roles 表，与用户在同一事务中写入，读取时总是一并加载。

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select, TransactionTrait,
};
use tracing::debug;

use crate::entity::user_roles::{self, Entity as UserRoles};
use crate::entity::users::{ActiveModel, Column, Entity as Users, Model};
use crate::errors::{Result, TrackerError};
use crate::models::users::entities::{User, UserRole};
use crate::storage::{Repository, UserRepository};

#[derive(Clone)]
pub struct UserStore {
    pub(crate) db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch_all(&self, select: Select<Users>) -> Result<Vec<User>> {
        let models = select
            .all(&self.db)
            .await
            .map_err(|e| TrackerError::from_db("查询用户失败", e))?;

        attach_roles(&self.db, models).await
    }

    async fn fetch_one(&self, select: Select<Users>) -> Result<Option<User>> {
        let model = select
            .one(&self.db)
            .await
            .map_err(|e| TrackerError::from_db("查询用户失败", e))?;

        match model {
            Some(model) => Ok(attach_roles(&self.db, vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn fetch_count(&self, select: Select<Users>) -> Result<u64> {
        select
            .count(&self.db)
            .await
            .map_err(|e| TrackerError::from_db("统计用户失败", e))
    }
}

/// 批量加载角色并转换为业务模型，保持输入顺序
async fn attach_roles<C: ConnectionTrait>(db: &C, models: Vec<Model>) -> Result<Vec<User>> {
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i64> = models.iter().map(|m| m.id).collect();
    let rows = UserRoles::find()
        .filter(user_roles::Column::UserId.is_in(ids))
        .all(db)
        .await
        .map_err(|e| TrackerError::from_db("查询用户角色失败", e))?;

    let mut roles: HashMap<i64, BTreeSet<UserRole>> = HashMap::new();
    for row in rows {
        match row.role.parse::<UserRole>() {
            Ok(role) => {
                roles.entry(row.user_id).or_default().insert(role);
            }
            Err(e) => tracing::warn!("忽略无法识别的角色 user_id={}: {}", row.user_id, e),
        }
    }

    Ok(models
        .into_iter()
        .map(|m| {
            let user_roles = roles.remove(&m.id).unwrap_or_default();
            m.into_user(user_roles)
        })
        .collect())
}

/// 按 id 批量加载用户（含角色），供预加载关联使用
pub(crate) async fn load_users<C: ConnectionTrait>(
    db: &C,
    ids: impl IntoIterator<Item = i64>,
) -> Result<HashMap<i64, User>> {
    let ids: BTreeSet<i64> = ids.into_iter().collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let models = Users::find()
        .filter(Column::Id.is_in(ids))
        .all(db)
        .await
        .map_err(|e| TrackerError::from_db("查询用户失败", e))?;

    let users = attach_roles(db, models).await?;
    Ok(users
        .into_iter()
        .filter_map(|u| u.id.map(|id| (id, u)))
        .collect())
}

/// 从预加载结果中取出必需的关联用户
pub(crate) fn required_user(users: &HashMap<i64, User>, id: i64, relation: &str) -> Result<User> {
    users.get(&id).cloned().ok_or_else(|| {
        TrackerError::missing_association(format!("{relation} 引用的用户 {id} 不存在"))
    })
}

#[async_trait]
impl Repository<User, i64> for UserStore {
    async fn save(&self, user: User) -> Result<User> {
        // 连接池可能只有一个连接，存在性检查放在事务之外
        let exists = match user.id {
            Some(id) => self.fetch_count(Users::find_by_id(id)).await? > 0,
            None => false,
        };

        let roles = user.roles.clone();
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TrackerError::from_db("开启事务失败", e))?;

        let mut active: ActiveModel = user.into();
        let result = if exists {
            active.update(&txn).await
        } else {
            active.id = NotSet;
            active.insert(&txn).await
        };
        let model = result.map_err(|e| TrackerError::from_db("保存用户失败", e))?;

        UserRoles::delete_many()
            .filter(user_roles::Column::UserId.eq(model.id))
            .exec(&txn)
            .await
            .map_err(|e| TrackerError::from_db("保存用户角色失败", e))?;

        for role in &roles {
            user_roles::ActiveModel {
                user_id: Set(model.id),
                role: Set(role.to_string()),
            }
            .insert(&txn)
            .await
            .map_err(|e| TrackerError::from_db("保存用户角色失败", e))?;
        }

        txn.commit()
            .await
            .map_err(|e| TrackerError::from_db("提交事务失败", e))?;

        debug!("保存用户 id={} (update={})", model.id, exists);
        Ok(model.into_user(roles))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        self.fetch_one(Users::find_by_id(id)).await
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        self.fetch_all(Users::find().order_by_asc(Column::Id)).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        // user_roles 随用户级联删除
        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TrackerError::from_db("删除用户失败", e))?;

        debug!("删除用户 id={} rows={}", id, result.rows_affected);
        Ok(result.rows_affected > 0)
    }

    async fn delete_all(&self) -> Result<u64> {
        let result = Users::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| TrackerError::from_db("删除用户失败", e))?;

        debug!("清空用户 rows={}", result.rows_affected);
        Ok(result.rows_affected)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.fetch_count(Users::find_by_id(id)).await? > 0)
    }

    async fn count(&self) -> Result<u64> {
        self.fetch_count(Users::find()).await
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        self.fetch_one(Users::find().filter(Column::Username.eq(username)))
            .await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.fetch_one(Users::find().filter(Column::Email.eq(email)))
            .await
    }

    /// 用户名匹配优先于邮箱匹配
    async fn find_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        let mut matches = self
            .fetch_all(
                Users::find()
                    .filter(
                        Condition::any()
                            .add(Column::Username.eq(identifier))
                            .add(Column::Email.eq(identifier)),
                    )
                    .order_by_asc(Column::Id),
            )
            .await?;

        match matches.iter().position(|u| u.username == identifier) {
            Some(index) => Ok(Some(matches.swap_remove(index))),
            None => Ok(matches.into_iter().next()),
        }
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool> {
        let count = self
            .fetch_count(Users::find().filter(Column::Username.eq(username)))
            .await?;
        Ok(count > 0)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool> {
        let count = self
            .fetch_count(Users::find().filter(Column::Email.eq(email)))
            .await?;
        Ok(count > 0)
    }

    async fn find_by_role(&self, role: UserRole) -> Result<Vec<User>> {
        self.fetch_all(
            Users::find()
                .inner_join(UserRoles)
                .filter(user_roles::Column::Role.eq(role.as_str()))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_class_id(&self, class_id: i64) -> Result<Vec<User>> {
        self.fetch_all(
            Users::find()
                .filter(Column::ClassId.eq(class_id))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_class_id_and_role(&self, class_id: i64, role: UserRole) -> Result<Vec<User>> {
        self.fetch_all(
            Users::find()
                .inner_join(UserRoles)
                .filter(Column::ClassId.eq(class_id))
                .filter(user_roles::Column::Role.eq(role.as_str()))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_department(&self, department: &str) -> Result<Vec<User>> {
        self.fetch_all(
            Users::find()
                .filter(Column::Department.eq(department))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_active(&self, active: bool) -> Result<Vec<User>> {
        self.fetch_all(
            Users::find()
                .filter(Column::IsActive.eq(active))
                .order_by_asc(Column::Id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::models::users::entities::UserRole;
    use crate::storage::sea_orm_storage::test_support::{seed_class, seed_user, storage, user};
    use crate::storage::{Repository, Storage};

    #[tokio::test]
    async fn test_find_by_username_round_trip() {
        let storage = storage().await;
        let saved = seed_user(&storage, "alice", UserRole::Student).await;

        let found = storage.users().find_by_username("alice").await.unwrap();
        assert_eq!(found, Some(saved));
        assert_eq!(storage.users().find_by_username("nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_by_username_or_email() {
        let storage = storage().await;
        let saved = seed_user(&storage, "bob", UserRole::Faculty).await;

        let by_name = storage.users().find_by_username_or_email("bob").await.unwrap();
        let by_mail = storage
            .users()
            .find_by_username_or_email("bob@school.test")
            .await
            .unwrap();
        assert_eq!(by_name, Some(saved.clone()));
        assert_eq!(by_mail, Some(saved));
        assert!(storage.users().exists_by_email("bob@school.test").await.unwrap());
        assert!(!storage.users().exists_by_email("eve@school.test").await.unwrap());
    }

    #[tokio::test]
    async fn test_find_by_email_round_trip() {
        let storage = storage().await;
        seed_user(&storage, "bob", UserRole::Faculty).await;
        let saved = seed_user(&storage, "carl", UserRole::Student).await;

        let found = storage.users().find_by_email("carl@school.test").await.unwrap();
        assert_eq!(found, Some(saved));
        assert_eq!(storage.users().find_by_email("missing@school.test").await.unwrap(), None);
        assert_eq!(storage.users().find_by_email("carl").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_username_match_wins_over_email_match() {
        let storage = storage().await;
        let owner = seed_user(&storage, "carl", UserRole::Student).await;
        let mut lookalike = user("carl@school.test", UserRole::Student);
        lookalike.email = "lookalike@school.test".to_string();
        let lookalike = storage.users().save(lookalike).await.unwrap();

        let found = storage
            .users()
            .find_by_username_or_email("carl@school.test")
            .await
            .unwrap();
        assert_eq!(found, Some(lookalike));
        let found = storage.users().find_by_username_or_email("carl").await.unwrap();
        assert_eq!(found, Some(owner));
    }

    #[tokio::test]
    async fn test_exists_tracks_insert_and_delete() {
        let storage = storage().await;
        assert!(!storage.users().exists_by_username("carol").await.unwrap());

        let saved = seed_user(&storage, "carol", UserRole::Student).await;
        assert!(storage.users().exists_by_username("carol").await.unwrap());

        assert!(storage.users().delete_by_id(saved.id.unwrap()).await.unwrap());
        assert!(!storage.users().exists_by_username("carol").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_constraint_violation() {
        let storage = storage().await;
        seed_user(&storage, "dave", UserRole::Student).await;

        let mut duplicate = user("dave", UserRole::Student);
        duplicate.email = "other@school.test".to_string();
        let err = storage.users().save(duplicate).await.unwrap_err();
        assert!(err.is_constraint_violation());
        assert_eq!(storage.users().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_roles_are_replaced_on_update() {
        let storage = storage().await;
        let mut saved = seed_user(&storage, "erin", UserRole::Faculty).await;
        saved.roles = BTreeSet::from([UserRole::Faculty, UserRole::Admin]);
        storage.users().save(saved.clone()).await.unwrap();

        let found = storage
            .users()
            .find_by_id(saved.id.unwrap())
            .await
            .unwrap()
            .unwrap();
        assert!(found.has_role(UserRole::Admin));
        assert!(found.is_faculty());
        assert!(!found.is_student());

        saved.roles = BTreeSet::from([UserRole::Student]);
        storage.users().save(saved.clone()).await.unwrap();
        let found = storage
            .users()
            .find_by_id(saved.id.unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.roles, BTreeSet::from([UserRole::Student]));
    }

    #[tokio::test]
    async fn test_find_by_role_and_class() {
        let storage = storage().await;
        let class = seed_class(&storage, "CSE-2A").await;
        let class_id = class.id.unwrap();

        let mut student = user("frank", UserRole::Student);
        student.class_id = Some(class_id);
        storage.users().save(student).await.unwrap();
        let mut mentor = user("grace", UserRole::Faculty);
        mentor.class_id = Some(class_id);
        storage.users().save(mentor).await.unwrap();
        seed_user(&storage, "heidi", UserRole::Student).await;

        let students = storage.users().find_by_role(UserRole::Student).await.unwrap();
        assert_eq!(students.len(), 2);
        assert!(students.iter().all(|u| u.is_student()));

        let in_class = storage
            .users()
            .find_by_class_id_and_role(class_id, UserRole::Student)
            .await
            .unwrap();
        assert_eq!(in_class.len(), 1);
        assert_eq!(in_class[0].username, "frank");

        assert_eq!(storage.users().find_by_class_id(class_id).await.unwrap().len(), 2);
        assert!(storage.users().find_by_role(UserRole::Admin).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_department_and_active() {
        let storage = storage().await;
        let mut faculty = user("ivan", UserRole::Faculty);
        faculty.department = Some("Physics".to_string());
        storage.users().save(faculty).await.unwrap();
        let mut inactive = user("judy", UserRole::Student);
        inactive.active = false;
        storage.users().save(inactive).await.unwrap();

        let physics = storage.users().find_by_department("Physics").await.unwrap();
        assert_eq!(physics.len(), 1);
        assert_eq!(physics[0].username, "ivan");
        assert_eq!(storage.users().find_by_active(false).await.unwrap().len(), 1);
        assert_eq!(storage.users().find_by_active(true).await.unwrap().len(), 1);
    }
}
