//! View models returned by the dashboard aggregator, and the pure
//! composition that builds them from raw responses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chart::{APPOINTMENT, CERTIFICATION, ChartPoint, to_points};
use crate::consolidate::TOTAL_LABELS;
use crate::department::{DepartmentNode, ROOT_DEPT_CODE};
use crate::detail::{AppointmentRecord, DetailFilters, MaturityFilter};
use crate::flatten::{
    CadreAppointmentRow, CadreAppointmentTable, CadreCertificationRow, CadreCertificationTable,
    ExpertAppointmentRow, ExpertAppointmentTable, ExpertCertificationRow, ExpertCertificationTable,
    flatten,
};
use crate::stats::{
    CadreCertStatistics, CadreQualifiedStatistics, CompetenceCategoryCertStatistics,
    DepartmentCertStatistic, EmployeeCertStatistics, ExpertCertStatistics,
    ExpertQualifiedStatistics,
};

/// Population a dashboard is filtered to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "0")]
    All,
    #[serde(rename = "1")]
    Cadre,
    #[serde(rename = "2")]
    Expert,
    #[serde(rename = "3")]
    FrontlineManager,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::All, Role::Cadre, Role::Expert, Role::FrontlineManager];

    /// Query value sent as `personType`.
    pub fn code(self) -> &'static str {
        match self {
            Role::All => "0",
            Role::Cadre => "1",
            Role::Expert => "2",
            Role::FrontlineManager => "3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::All => "全员",
            Role::Cadre => "干部",
            Role::Expert => "专家",
            Role::FrontlineManager => "基层主管",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.code() == s.trim())
            .ok_or_else(|| format!("unknown role code: {s}"))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

pub fn role_options() -> Vec<SelectOption> {
    Role::ALL
        .into_iter()
        .map(|role| SelectOption::new(role.label(), role.code()))
        .collect()
}

pub fn maturity_options() -> Vec<SelectOption> {
    [
        MaturityFilter::All,
        MaturityFilter::L1,
        MaturityFilter::L2,
        MaturityFilter::L3,
    ]
    .into_iter()
    .map(|level| {
        let text = level.to_string();
        SelectOption::new(&text, &text)
    })
    .collect()
}

// ── Headline metrics ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricItem {
    pub id: String,
    pub title: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl MetricItem {
    fn new(id: &str, title: &str, value: f64, unit: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            value,
            unit: unit.map(str::to_string),
        }
    }
}

/// Headline cards from the employee totals. A missing total yields zeroes.
pub fn headline_metrics(total: Option<&DepartmentCertStatistic>) -> Vec<MetricItem> {
    let total = total.cloned().unwrap_or_default();
    vec![
        MetricItem::new("baseline", "基线人数", total.total_count as f64, Some("人")),
        MetricItem::new(
            "appointed",
            "任职人数",
            total.qualified_count.unwrap_or(0) as f64,
            Some("人"),
        ),
        MetricItem::new(
            "appointedRate",
            "任职率",
            total.qualified_rate.unwrap_or(0.0),
            Some("%"),
        ),
        MetricItem::new("certified", "认证人数", total.certified_count as f64, Some("人")),
        MetricItem::new("certifiedRate", "认证率", total.cert_rate, Some("%")),
    ]
}

// ── Dashboard ──

/// Six chart series of the all-staff panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AllStaffCharts {
    pub department_appointment: Vec<ChartPoint>,
    pub department_certification: Vec<ChartPoint>,
    pub organization_appointment: Vec<ChartPoint>,
    pub organization_certification: Vec<ChartPoint>,
    pub job_category_appointment: Vec<ChartPoint>,
    pub job_category_certification: Vec<ChartPoint>,
}

/// The four flattened maturity → job-category tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationTables {
    pub expert_certification: Vec<ExpertCertificationRow>,
    pub expert_appointment: Vec<ExpertAppointmentRow>,
    pub cadre_certification: Vec<CadreCertificationRow>,
    pub cadre_appointment: Vec<CadreAppointmentRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardFilters {
    pub department_tree: Vec<DepartmentNode>,
    pub roles: Vec<SelectOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationDashboard {
    pub metrics: Vec<MetricItem>,
    #[serde(flatten)]
    pub tables: CertificationTables,
    pub all_staff: AllStaffCharts,
    pub employee_cert_statistics: Option<EmployeeCertStatistics>,
    pub competence_category_cert_statistics: Option<CompetenceCategoryCertStatistics>,
    pub filters: DashboardFilters,
}

/// Filters of the certification dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardQuery {
    pub dept_code: String,
    pub role: Role,
}

impl Default for DashboardQuery {
    fn default() -> Self {
        Self {
            dept_code: ROOT_DEPT_CODE.to_string(),
            role: Role::All,
        }
    }
}

impl DashboardQuery {
    /// Department code with blanks normalised to the root.
    pub fn dept_code(&self) -> &str {
        let code = self.dept_code.trim();
        if code.is_empty() { ROOT_DEPT_CODE } else { code }
    }
}

/// Raw responses feeding one certification dashboard. `None` marks a fetch
/// that failed or returned no data.
#[derive(Debug, Clone, Default)]
pub struct DashboardSources {
    pub employee: Option<EmployeeCertStatistics>,
    pub competence: Option<CompetenceCategoryCertStatistics>,
    pub expert_cert: Option<ExpertCertStatistics>,
    pub expert_qualified: Option<ExpertQualifiedStatistics>,
    pub cadre_cert: Option<CadreCertStatistics>,
    pub cadre_qualified: Option<CadreQualifiedStatistics>,
    pub department_tree: Vec<DepartmentNode>,
}

impl CertificationDashboard {
    /// Compose a dashboard from `sources`. Tables whose response is missing
    /// keep the rows of `previous`.
    pub fn compose(
        role: Role,
        sources: DashboardSources,
        previous: &CertificationTables,
    ) -> CertificationDashboard {
        let tables = CertificationTables {
            expert_certification: flatten::<ExpertCertificationTable>(
                sources.expert_cert.as_ref(),
                &previous.expert_certification,
            ),
            expert_appointment: flatten::<ExpertAppointmentTable>(
                sources.expert_qualified.as_ref(),
                &previous.expert_appointment,
            ),
            cadre_certification: flatten::<CadreCertificationTable>(
                sources.cadre_cert.as_ref(),
                &previous.cadre_certification,
            ),
            cadre_appointment: flatten::<CadreAppointmentTable>(
                sources.cadre_qualified.as_ref(),
                &previous.cadre_appointment,
            ),
        };

        let all_staff = all_staff_charts(role, &sources);
        let metrics = headline_metrics(
            sources
                .employee
                .as_ref()
                .and_then(|e| e.total_statistics.as_ref()),
        );

        CertificationDashboard {
            metrics,
            tables,
            all_staff,
            employee_cert_statistics: sources.employee,
            competence_category_cert_statistics: sources.competence,
            filters: DashboardFilters {
                department_tree: sources.department_tree,
                roles: role_options(),
            },
        }
    }
}

/// Build the six all-staff series. Organisation series follow the cadre
/// tables when the dashboard is filtered to cadres, the expert tables
/// otherwise.
pub fn all_staff_charts(role: Role, sources: &DashboardSources) -> AllStaffCharts {
    let departments = sources
        .employee
        .as_ref()
        .map(|e| e.department_statistics.as_slice())
        .unwrap_or_default();

    let categories: Vec<_> = sources
        .competence
        .iter()
        .flat_map(|c| &c.category_statistics)
        .filter(|c| !TOTAL_LABELS.contains(&c.competence_category.trim()))
        .cloned()
        .collect();

    let (organization_appointment, organization_certification) = if role == Role::Cadre {
        (
            sources
                .cadre_qualified
                .as_ref()
                .map(|s| to_points(&s.maturity_statistics, &APPOINTMENT)),
            sources
                .cadre_cert
                .as_ref()
                .map(|s| to_points(&s.maturity_statistics, &CERTIFICATION)),
        )
    } else {
        (
            sources
                .expert_qualified
                .as_ref()
                .map(|s| to_points(&s.maturity_statistics, &APPOINTMENT)),
            sources
                .expert_cert
                .as_ref()
                .map(|s| to_points(&s.maturity_statistics, &CERTIFICATION)),
        )
    };

    AllStaffCharts {
        department_appointment: to_points(departments, &APPOINTMENT),
        department_certification: to_points(departments, &CERTIFICATION),
        organization_appointment: organization_appointment.unwrap_or_default(),
        organization_certification: organization_certification.unwrap_or_default(),
        job_category_appointment: to_points(&categories, &APPOINTMENT),
        job_category_certification: to_points(&categories, &CERTIFICATION),
    }
}

/// Options for every filter control.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub department_tree: Vec<DepartmentNode>,
    pub roles: Vec<SelectOption>,
    pub maturity_options: Vec<SelectOption>,
}

impl FilterOptions {
    pub fn new(department_tree: Vec<DepartmentNode>) -> Self {
        Self {
            department_tree,
            roles: role_options(),
            maturity_options: maturity_options(),
        }
    }
}

/// Drill-down records with the filters that produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView {
    pub records: Vec<AppointmentRecord>,
    pub filters: DetailViewFilters,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailViewFilters {
    pub dept_code: String,
    pub maturity: MaturityFilter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_category: Option<String>,
    pub person_type: Role,
    pub query_type: u8,
}

impl From<&DetailFilters> for DetailViewFilters {
    fn from(filters: &DetailFilters) -> Self {
        Self {
            dept_code: filters.dept_code.clone(),
            maturity: filters.maturity,
            job_category: filters.job_category.clone(),
            person_type: filters.person_type,
            query_type: filters.query_type.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{
        CertMetrics, CompetenceCategoryCertStatistic, GroupedStatistics, JobCategoryStatistic,
        MaturityStatistic, QualifiedMetrics,
    };

    fn expert_cert() -> ExpertCertStatistics {
        GroupedStatistics {
            dept_code: "0".into(),
            dept_name: "云核心网产品线".into(),
            maturity_statistics: vec![MaturityStatistic {
                maturity_level: "L2".into(),
                metrics: CertMetrics {
                    baseline_count: 80,
                    certified_count: 58,
                    cert_rate: 72.5,
                },
                job_category_statistics: vec![
                    JobCategoryStatistic {
                        job_category: "软件类".into(),
                        metrics: CertMetrics {
                            baseline_count: 40,
                            certified_count: 30,
                            cert_rate: 75.0,
                        },
                    },
                    JobCategoryStatistic {
                        job_category: "管理类".into(),
                        metrics: CertMetrics {
                            baseline_count: 40,
                            certified_count: 28,
                            cert_rate: 70.0,
                        },
                    },
                ],
            }],
            total_statistics: None,
        }
    }

    fn cadre_qualified() -> CadreQualifiedStatistics {
        GroupedStatistics {
            maturity_statistics: vec![MaturityStatistic {
                maturity_level: "L3".into(),
                metrics: QualifiedMetrics {
                    baseline_count: 10,
                    qualified_count: 4,
                    qualified_rate: 40.0,
                    ..Default::default()
                },
                job_category_statistics: Vec::new(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn role_codes_round_trip_through_parse() {
        for role in Role::ALL {
            assert_eq!(role.code().parse::<Role>().unwrap(), role);
        }
        assert!("9".parse::<Role>().is_err());
        assert_eq!(serde_json::to_value(Role::Expert).unwrap(), "2");
    }

    #[test]
    fn option_lists() {
        let roles = role_options();
        let labels: Vec<_> = roles.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["全员", "干部", "专家", "基层主管"]);
        assert_eq!(roles[3].value, "3");

        let maturity: Vec<_> = maturity_options().into_iter().map(|o| o.value).collect();
        assert_eq!(maturity, ["全部", "L1", "L2", "L3"]);
    }

    #[test]
    fn missing_totals_give_zeroed_metrics() {
        let metrics = headline_metrics(None);
        assert_eq!(metrics.len(), 5);
        assert!(metrics.iter().all(|m| m.value == 0.0));
    }

    #[test]
    fn headline_metrics_read_employee_totals() {
        let total = DepartmentCertStatistic {
            total_count: 200,
            certified_count: 120,
            cert_rate: 60.0,
            qualified_count: Some(150),
            qualified_rate: Some(75.0),
            ..Default::default()
        };
        let metrics = headline_metrics(Some(&total));
        let values: Vec<_> = metrics.iter().map(|m| (m.id.as_str(), m.value)).collect();
        assert_eq!(
            values,
            [
                ("baseline", 200.0),
                ("appointed", 150.0),
                ("appointedRate", 75.0),
                ("certified", 120.0),
                ("certifiedRate", 60.0),
            ]
        );
    }

    #[test]
    fn blank_department_normalises_to_root() {
        let query = DashboardQuery {
            dept_code: "  ".into(),
            role: Role::All,
        };
        assert_eq!(query.dept_code(), "0");
    }

    #[test]
    fn organisation_series_follow_role() {
        let sources = DashboardSources {
            expert_cert: Some(expert_cert()),
            cadre_qualified: Some(cadre_qualified()),
            ..Default::default()
        };

        let experts = all_staff_charts(Role::All, &sources);
        assert_eq!(experts.organization_certification.len(), 1);
        assert_eq!(experts.organization_certification[0].label, "L2");
        assert_eq!(experts.organization_certification[0].count, 58);
        assert!(experts.organization_appointment.is_empty());

        let cadres = all_staff_charts(Role::Cadre, &sources);
        assert_eq!(cadres.organization_appointment[0].label, "L3");
        assert_eq!(cadres.organization_appointment[0].count, 4);
        assert!(cadres.organization_certification.is_empty());
    }

    #[test]
    fn job_category_series_exclude_total() {
        let category = |name: &str, certified| CompetenceCategoryCertStatistic {
            competence_category: name.into(),
            total_count: 10,
            certified_count: certified,
            ..Default::default()
        };
        let sources = DashboardSources {
            competence: Some(CompetenceCategoryCertStatistics {
                category_statistics: vec![category("软件类", 3), category("总计", 9)],
                ..Default::default()
            }),
            ..Default::default()
        };
        let charts = all_staff_charts(Role::All, &sources);
        assert_eq!(charts.job_category_certification.len(), 1);
        assert_eq!(charts.job_category_certification[0].label, "软件类");
    }

    #[test]
    fn compose_keeps_previous_rows_for_missing_tables() {
        let previous = CertificationTables {
            cadre_appointment: vec![CadreAppointmentRow {
                maturity_level: "L1".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let sources = DashboardSources {
            expert_cert: Some(expert_cert()),
            ..Default::default()
        };
        let dashboard = CertificationDashboard::compose(Role::All, sources, &previous);

        assert_eq!(dashboard.tables.cadre_appointment, previous.cadre_appointment);
        // L2 row, 软件类, rolled-up 其他类.
        assert_eq!(dashboard.tables.expert_certification.len(), 3);
        assert_eq!(dashboard.tables.expert_certification[2].job_category, "其他类");
        assert!(dashboard.tables.expert_appointment.is_empty());
        assert_eq!(dashboard.filters.roles.len(), 4);
        assert!(dashboard.metrics.iter().all(|m| m.value == 0.0));

        let value = serde_json::to_value(&dashboard).unwrap();
        assert!(value.get("expertCertification").is_some());
        assert!(value.get("allStaff").is_some());
        assert!(value["employeeCertStatistics"].is_null());
    }
}
