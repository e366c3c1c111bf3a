use uuid::Uuid;

use civica_domain::models::report::Report;
use civica_types::common::Department;
use civica_types::errors::ApplicationError;

#[async_trait::async_trait]
pub trait ReportRepository: Send + Sync {
    /// Upserts the full report document; the report is the unit of mutation.
    async fn save(&self, report: &Report) -> Result<(), ApplicationError>;

    async fn get_by_id(&self, report_id: Uuid) -> Result<Report, ApplicationError>;

    /// Reports with an undecided verification, newest first.
    async fn list_pending_verification(&self) -> Result<Vec<Report>, ApplicationError>;

    /// Verified, non-terminal reports of a department, ordered by priority
    /// score (desc) then creation time (asc).
    async fn list_department_queue(
        &self,
        department: Department,
    ) -> Result<Vec<Report>, ApplicationError>;

    /// Geo reports within `radius_meters` of the given point.
    async fn list_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        radius_meters: f64,
    ) -> Result<Vec<Report>, ApplicationError>;
}
