pub mod chart;
pub mod consolidate;
pub mod course;
pub mod department;
pub mod detail;
pub mod envelope;
pub mod flatten;
pub mod overview;
pub mod rate;
pub mod rollup;
pub mod stats;
pub mod view;

pub use chart::{ChartPoint, MetricSelector, to_points};
pub use consolidate::{Additive, consolidate};
pub use course::{CourseCategoryStatistics, CourseItem, PersonalCourseCompletion};
pub use department::{DepartmentInfo, DepartmentNode, ROOT_DEPT_CODE};
pub use detail::{AppointmentRecord, DetailFilters, EmployeeDrillDown, MaturityFilter, QueryType};
pub use envelope::{ApiResult, SUCCESS_CODE};
pub use flatten::{RowDomain, flatten};
pub use overview::{
    CadreAiCertificationOverview, CadreAiOverviewRow, EntryLevelManagerRow, PlTmCertStatistics,
};
pub use rate::rate;
pub use rollup::{TableDomain, TierRollup};
pub use stats::{
    CadreCertStatistics, CadreQualifiedStatistics, CompetenceCategoryCertStatistics,
    EmployeeCertStatistics, ExpertCertStatistics, ExpertQualifiedStatistics,
};
pub use view::{
    AllStaffCharts, CertificationDashboard, CertificationTables, DashboardQuery, DashboardSources,
    DetailView, FilterOptions, Role,
};
