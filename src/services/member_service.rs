use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::{CreateMember, Member, UpdateMember};

/// Persistence operations on the `members` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn create_member(&self, member_data: CreateMember) -> Result<Member, RepositoryError>;

    async fn list_members(&self) -> Result<Vec<Member>, RepositoryError>;

    async fn get_member_by_id(&self, member_id: i32) -> Result<Option<Member>, RepositoryError>;

    /// Overwrites name, email and age. Returns `None` when no row has `member_id`.
    async fn update_member(
        &self,
        member_id: i32,
        member_data: UpdateMember,
    ) -> Result<Option<Member>, RepositoryError>;

    /// Deletes the member together with every workout session referencing it.
    /// Returns `false` when no row has `member_id`.
    async fn delete_member(&self, member_id: i32) -> Result<bool, RepositoryError>;
}

#[derive(Debug, Clone)]
pub struct MemberService {
    db: PgPool,
}

impl MemberService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MemberRepository for MemberService {
    async fn create_member(&self, member_data: CreateMember) -> Result<Member, RepositoryError> {
        let now = Utc::now();

        let member = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members (name, email, age, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id, name, email, age, created_at, updated_at
            "#,
        )
        .bind(&member_data.name)
        .bind(&member_data.email)
        .bind(member_data.age)
        .bind(now)
        .fetch_one(&self.db)
        .await?;

        tracing::debug!(member_id = member.id, "created member");
        Ok(member)
    }

    async fn list_members(&self) -> Result<Vec<Member>, RepositoryError> {
        let members = sqlx::query_as::<_, Member>(
            "SELECT id, name, email, age, created_at, updated_at FROM members ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(members)
    }

    async fn get_member_by_id(&self, member_id: i32) -> Result<Option<Member>, RepositoryError> {
        let member = sqlx::query_as::<_, Member>(
            "SELECT id, name, email, age, created_at, updated_at FROM members WHERE id = $1",
        )
        .bind(member_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(member)
    }

    async fn update_member(
        &self,
        member_id: i32,
        member_data: UpdateMember,
    ) -> Result<Option<Member>, RepositoryError> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            UPDATE members
            SET name = $2,
                email = $3,
                age = $4,
                updated_at = $5
            WHERE id = $1
            RETURNING id, name, email, age, created_at, updated_at
            "#,
        )
        .bind(member_id)
        .bind(&member_data.name)
        .bind(&member_data.email)
        .bind(member_data.age)
        .bind(Utc::now())
        .fetch_optional(&self.db)
        .await?;

        Ok(member)
    }

    async fn delete_member(&self, member_id: i32) -> Result<bool, RepositoryError> {
        // Dropping the transaction without commit rolls the session delete back.
        let mut tx = self.db.begin().await?;

        let sessions = sqlx::query("DELETE FROM workout_sessions WHERE member_id = $1")
            .bind(member_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(member_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        tx.commit().await?;

        tracing::debug!(
            member_id,
            sessions_removed = sessions.rows_affected(),
            "deleted member"
        );
        Ok(true)
    }
}
