use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use civica_app::repository::UserRepository;
use civica_domain::models::user::User;
use civica_types::common::{Department, Role};
use civica_types::{
    Result,
    errors::{ApplicationError, DbError},
};

use crate::models as db_models;

#[derive(Clone)]
pub struct PostgresUserRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresUserRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

const SELECT_USER: &str =
    "SELECT id, name, role, department, warnings, blocked, created_at FROM users";

#[async_trait::async_trait]
impl<'a> UserRepository for PostgresUserRepository<'a> {
    async fn save(&self, user: &User) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        sqlx::query(
            r#"
            INSERT INTO users (id, name, role, department, warnings, blocked, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                role = EXCLUDED.role,
                department = EXCLUDED.department,
                warnings = EXCLUDED.warnings,
                blocked = EXCLUDED.blocked
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(user.role.as_str())
        .bind(user.department.map(|d| d.as_str()))
        .bind(user.warnings as i32)
        .bind(user.blocked)
        .bind(user.created_at)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<User, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let row = sqlx::query_as::<_, db_models::User>(&format!("{SELECT_USER} WHERE id = $1"))
            .bind(user_id)
            .fetch_optional(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
            .ok_or(ApplicationError::Db(DbError::UserNotFound(user_id)))?;

        Ok(User::try_from(row).map_err(ApplicationError::Db)?)
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<User>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rows = sqlx::query_as::<_, db_models::User>(&format!(
            "{SELECT_USER} WHERE role = $1 ORDER BY created_at ASC"
        ))
        .bind(role.as_str())
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        collect_users(rows)
    }

    async fn list_officers_of(
        &self,
        department: Department,
    ) -> Result<Vec<User>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rows = sqlx::query_as::<_, db_models::User>(&format!(
            "{SELECT_USER} WHERE role = 'officer' AND department = $1 ORDER BY created_at ASC"
        ))
        .bind(department.as_str())
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        collect_users(rows)
    }
}

fn collect_users(rows: Vec<db_models::User>) -> Result<Vec<User>, ApplicationError> {
    let mut users = Vec::with_capacity(rows.len());
    for row in rows {
        users.push(User::try_from(row).map_err(ApplicationError::Db)?);
    }
    Ok(users)
}
