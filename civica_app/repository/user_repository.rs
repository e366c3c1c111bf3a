use uuid::Uuid;

use civica_domain::models::user::User;
use civica_types::common::{Department, Role};
use civica_types::errors::ApplicationError;

#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    async fn save(&self, user: &User) -> Result<(), ApplicationError>;

    async fn get_by_id(&self, user_id: Uuid) -> Result<User, ApplicationError>;

    async fn list_by_role(&self, role: Role) -> Result<Vec<User>, ApplicationError>;

    async fn list_officers_of(
        &self,
        department: Department,
    ) -> Result<Vec<User>, ApplicationError>;
}
