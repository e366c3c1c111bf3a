use uuid::Uuid;

use civica_types::common::{Category, Department, MediaRef, Role};

use crate::models::report::{LocationKind, Report};
use crate::models::user::User;
use crate::routing::DepartmentRouter;

#[derive(Default, Clone)]
pub struct UserFactoryOptions<'a> {
    pub id: Option<Uuid>,
    pub name: Option<&'a str>,
    pub role: Option<Role>,
    pub department: Option<Department>,
    pub warnings: Option<u32>,
}

pub fn user_factory(options: UserFactoryOptions) -> User {
    let mut user = User::new(
        options.name.unwrap_or("Test User").to_string(),
        options.role.unwrap_or(Role::Citizen),
        options.department,
    );
    if let Some(id) = options.id {
        user.id = id;
    }
    if let Some(warnings) = options.warnings {
        user.warnings = warnings;
    }
    user
}

#[derive(Default, Clone)]
pub struct ReportFactoryOptions<'a> {
    pub id: Option<Uuid>,
    pub reporter_id: Option<Uuid>,
    pub title: Option<&'a str>,
    pub category: Option<Category>,
    pub location: Option<LocationKind>,
    pub media: Option<Vec<MediaRef>>,
    pub department: Option<Department>,
    /// `Some(true)` produces an already approved report with a running SLA.
    pub verified: Option<bool>,
}

pub fn report_factory(options: ReportFactoryOptions) -> Report {
    let mut report = Report::new(
        options.id.unwrap_or_else(Uuid::new_v4),
        options.reporter_id.unwrap_or_else(Uuid::new_v4),
        options.title.unwrap_or("Pothole on Main St").to_string(),
        "Something needs fixing".to_string(),
        options.category.unwrap_or(Category::Pothole),
        options.location.unwrap_or(LocationKind::Geo {
            latitude: 45.07,
            longitude: 7.68,
            address: None,
        }),
        options.media.unwrap_or_default(),
        &DepartmentRouter::new(),
    )
    .expect("report factory input must be valid");
    match options.verified {
        Some(true) => report
            .approve_verification(Uuid::new_v4(), report.severity, None, chrono::Utc::now())
            .expect("fresh report must be verifiable"),
        Some(false) => report
            .reject_verification(Uuid::new_v4(), "not actionable".to_string(), chrono::Utc::now())
            .expect("fresh report must be verifiable"),
        None => {}
    }
    if let Some(department) = options.department {
        report.department = department;
    }
    report
}
