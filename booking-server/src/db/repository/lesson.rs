//! Lesson Repository

use serde::Deserialize;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::any::Any;

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::LessonRecord;
use crate::models::LessonUpdate;

const TABLE: &str = "lesson";

#[derive(Debug, Deserialize)]
struct CountResult {
    count: usize,
}

/// Lesson repository
#[derive(Clone)]
pub struct LessonRepository {
    base: BaseRepository,
}

impl LessonRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// 获取所有课程
    pub async fn find_all(&self) -> RepoResult<Vec<LessonRecord>> {
        let records: Vec<LessonRecord> = self
            .base
            .db()
            .query("SELECT * FROM lesson ORDER BY subject")
            .await?
            .take(0)?;
        Ok(records)
    }

    /// 按 id 查找课程，接受 "lesson:key" 或裸 key
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<LessonRecord>> {
        let key = strip_table_prefix(TABLE, id);
        let record: Option<LessonRecord> =
            self.base.db().select((TABLE, key.to_owned())).await?;
        Ok(record)
    }

    /// 插入课程记录 (启动时种子数据用)
    pub async fn create(&self, record: LessonRecord) -> RepoResult<LessonRecord> {
        let created: Option<LessonRecord> =
            self.base.db().create(TABLE).content(record).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create lesson".to_string()))
    }

    /// 稀疏更新 - MERGE 只覆盖出现的字段
    pub async fn update(&self, id: &str, data: LessonUpdate) -> RepoResult<LessonRecord> {
        let key = strip_table_prefix(TABLE, id);
        if self.find_by_id(key).await?.is_none() {
            return Err(RepoError::NotFound(format!("Lesson {id} not found")));
        }

        let rid = RecordId::from_table_key(TABLE, key.to_owned());
        let mut result = self
            .base
            .db()
            .query("UPDATE $rid MERGE $data RETURN AFTER")
            .bind(("rid", rid))
            .bind(("data", data))
            .await?;
        let updated: Option<LessonRecord> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Lesson {id} not found")))
    }

    /// 预留名额 - 唯一的扣减路径
    ///
    /// 单条条件 UPDATE：WHERE 保证 spaces 永远不为负，并发下最多一个
    /// 预留能通过同一批名额。空结果再查一次区分 "不存在" 和 "名额不足"。
    pub async fn reserve_spaces(&self, id: &str, quantity: u32) -> RepoResult<LessonRecord> {
        let key = strip_table_prefix(TABLE, id);
        let rid = RecordId::from_table_key(TABLE, key.to_owned());
        let mut result = self
            .base
            .db()
            .query("UPDATE $rid SET spaces -= $qty WHERE spaces >= $qty RETURN AFTER")
            .bind(("rid", rid))
            .bind(("qty", quantity))
            .await?;
        let updated: Option<LessonRecord> = result.take(0)?;

        match updated {
            Some(record) => Ok(record),
            None => match self.find_by_id(key).await? {
                Some(record) => Err(RepoError::InsufficientSpaces {
                    lesson_id: id.to_string(),
                    requested: quantity,
                    available: record.spaces,
                }),
                None => Err(RepoError::NotFound(format!("Lesson {id} not found"))),
            },
        }
    }

    /// 释放名额 - 回滚补偿用，是预留的逆操作
    pub async fn release_spaces(&self, id: &str, quantity: u32) -> RepoResult<LessonRecord> {
        let key = strip_table_prefix(TABLE, id);
        let rid = RecordId::from_table_key(TABLE, key.to_owned());
        let mut result = self
            .base
            .db()
            .query("UPDATE $rid SET spaces += $qty RETURN AFTER")
            .bind(("rid", rid))
            .bind(("qty", quantity))
            .await?;
        let updated: Option<LessonRecord> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Lesson {id} not found")))
    }

    /// 课程总数
    pub async fn count(&self) -> RepoResult<usize> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM lesson GROUP ALL")
            .await?;
        let row: Option<CountResult> = result.take(0)?;
        Ok(row.map(|r| r.count).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::engine::any::connect;

    async fn test_db() -> Surreal<Any> {
        let db = connect("mem://").await.unwrap();
        db.use_ns("test").use_db("test").await.unwrap();
        db
    }

    async fn create_lesson(repo: &LessonRepository, subject: &str, spaces: u32) -> LessonRecord {
        repo.create(LessonRecord {
            id: None,
            subject: subject.to_string(),
            location: "North London".to_string(),
            price: 95.0,
            spaces,
            description: String::new(),
            image: String::new(),
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn count_is_zero_on_empty_table() {
        let repo = LessonRepository::new(test_db().await);
        assert_eq!(repo.count().await.unwrap(), 0);

        create_lesson(&repo, "Math", 5).await;
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn find_by_id_accepts_prefixed_and_bare_keys() {
        let repo = LessonRepository::new(test_db().await);
        let created = create_lesson(&repo, "Math", 5).await;
        let full_id = created.id.as_ref().unwrap().to_string();

        let by_full = repo.find_by_id(&full_id).await.unwrap();
        assert!(by_full.is_some());

        let bare = strip_table_prefix(TABLE, &full_id);
        let by_bare = repo.find_by_id(bare).await.unwrap();
        assert!(by_bare.is_some());
        assert_eq!(by_bare.unwrap().subject, "Math");
    }

    #[tokio::test]
    async fn conditional_reserve_decrements_until_spaces_run_out() {
        let repo = LessonRepository::new(test_db().await);
        let created = create_lesson(&repo, "Math", 5).await;
        let id = created.id.as_ref().unwrap().to_string();

        let after = repo.reserve_spaces(&id, 3).await.unwrap();
        assert_eq!(after.spaces, 2);

        let err = repo.reserve_spaces(&id, 3).await.unwrap_err();
        match err {
            RepoError::InsufficientSpaces {
                requested,
                available,
                ..
            } => {
                assert_eq!(requested, 3);
                assert_eq!(available, 2);
            }
            other => panic!("expected InsufficientSpaces, got {other:?}"),
        }

        // the failed attempt must not have touched the record
        let unchanged = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(unchanged.spaces, 2);

        let drained = repo.reserve_spaces(&id, 2).await.unwrap();
        assert_eq!(drained.spaces, 0);
    }

    #[tokio::test]
    async fn reserve_unknown_lesson_is_not_found() {
        let repo = LessonRepository::new(test_db().await);
        let err = repo.reserve_spaces("lesson:nope", 1).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn release_restores_reserved_spaces() {
        let repo = LessonRepository::new(test_db().await);
        let created = create_lesson(&repo, "Math", 5).await;
        let id = created.id.as_ref().unwrap().to_string();

        repo.reserve_spaces(&id, 4).await.unwrap();
        let restored = repo.release_spaces(&id, 4).await.unwrap();
        assert_eq!(restored.spaces, 5);
    }

    #[tokio::test]
    async fn merge_updates_only_provided_fields() {
        let repo = LessonRepository::new(test_db().await);
        let created = create_lesson(&repo, "Math", 5).await;
        let id = created.id.as_ref().unwrap().to_string();

        let updated = repo
            .update(
                &id,
                LessonUpdate {
                    spaces: Some(10),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.spaces, 10);
        assert_eq!(updated.subject, "Math");
        assert_eq!(updated.price, 95.0);
    }

    #[tokio::test]
    async fn update_unknown_lesson_is_not_found() {
        let repo = LessonRepository::new(test_db().await);
        let err = repo
            .update(
                "nope",
                LessonUpdate {
                    spaces: Some(1),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }
}
