use civica_types::common::{Category, Department};

/// Category ↔ department routing table.
///
/// Built once at process start and passed explicitly wherever routing is
/// needed. The forward direction is total over the `Category` enum. The
/// inverse is lossy: several categories may collapse into one department
/// (e.g. both `Garbage` and `Sewage` belong to `Sanitation`), so
/// `canonical_category` returns one representative per department, not a
/// true inverse.
#[derive(Debug, Clone)]
pub struct DepartmentRouter {
    forward: Vec<(Category, Department)>,
    canonical: Vec<(Department, Category)>,
}

impl DepartmentRouter {
    pub fn new() -> Self {
        Self {
            forward: vec![
                (Category::Pothole, Department::Road),
                (Category::Garbage, Department::Sanitation),
                (Category::Streetlight, Department::Electrical),
                (Category::WaterLeak, Department::Water),
                (Category::Sewage, Department::Sanitation),
                (Category::Park, Department::Parks),
                (Category::Other, Department::General),
            ],
            canonical: vec![
                (Department::Road, Category::Pothole),
                (Department::Sanitation, Category::Garbage),
                (Department::Electrical, Category::Streetlight),
                (Department::Water, Category::WaterLeak),
                (Department::Parks, Category::Park),
                (Department::General, Category::Other),
            ],
        }
    }

    /// Maps a category to its owning department. Unmapped categories land
    /// in the `General` bucket rather than failing.
    pub fn department_for(&self, category: Category) -> Department {
        self.forward
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, d)| *d)
            .unwrap_or(Department::General)
    }

    /// Maps a department back to its canonical category.
    pub fn canonical_category(&self, department: Department) -> Category {
        self.canonical
            .iter()
            .find(|(d, _)| *d == department)
            .map(|(_, c)| *c)
            .unwrap_or(Category::Other)
    }
}

impl Default for DepartmentRouter {
    fn default() -> Self {
        Self::new()
    }
}
