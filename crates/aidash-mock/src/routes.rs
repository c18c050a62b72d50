//! Route handlers. Each returns the backend's `{code, message, data}`
//! envelope; invalid parameters answer 400 with an error envelope.

use aidash_core::course::PersonalCourseCompletion;
use aidash_core::detail::{EmployeeDrillDown, MaturityFilter, QueryType};
use aidash_core::overview::{CadreAiCertificationOverview, PlTmCertStatistics};
use aidash_core::stats::{
    CadreCertStatistics, CadreQualifiedStatistics, CompetenceCategoryCertStatistics,
    EmployeeCertStatistics, ExpertCertStatistics, ExpertQualifiedStatistics,
};
use aidash_core::view::AllStaffCharts;
use aidash_core::{ApiResult, DepartmentInfo, ROOT_DEPT_CODE, Role};
use axum::Json;
use axum::extract::Query;
use axum::http::Uri;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::data::{cadre, course, departments, details, employee, expert, overview, trends};
use crate::error::MockError;
use crate::response::success;

type Reply<T> = Result<Json<ApiResult<T>>, MockError>;

/// Query parameters shared by the statistics endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsQuery {
    pub dept_code: Option<String>,
    pub dept_id: Option<String>,
    pub person_type: Option<String>,
}

impl StatsQuery {
    /// `deptCode`, then `deptId`, then the root.
    fn dept(&self) -> &str {
        self.dept_code
            .as_deref()
            .or(self.dept_id.as_deref())
            .unwrap_or(ROOT_DEPT_CODE)
    }

    fn role(&self) -> Result<Role, MockError> {
        match self.person_type.as_deref().map(str::trim) {
            None | Some("") => Ok(Role::All),
            Some(code) => code
                .parse()
                .map_err(|_| MockError::InvalidParameter("人员类型参数错误".to_string())),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailQuery {
    pub dept_code: Option<String>,
    pub ai_maturity: Option<String>,
    pub job_category: Option<String>,
    pub person_type: Option<String>,
    pub query_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AccountQuery {
    pub account: Option<String>,
}

pub async fn health() -> Json<ApiResult<Value>> {
    success(json!({"status": "ok"}), "mock server works")
}

pub async fn department_children(Query(query): Query<StatsQuery>) -> Reply<Vec<DepartmentInfo>> {
    let dept = query.dept_id.as_deref().or(query.dept_code.as_deref()).unwrap_or(ROOT_DEPT_CODE);
    let children = departments::children(dept);
    debug!(dept, count = children.len(), "department children");
    Ok(success(children, "success"))
}

pub async fn employee_cert_statistics(
    Query(query): Query<StatsQuery>,
) -> Reply<EmployeeCertStatistics> {
    let data = employee::cert_statistics(query.dept(), query.role()?);
    Ok(success(data, "mock employee cert statistics"))
}

pub async fn competence_category_cert_statistics(
    Query(query): Query<StatsQuery>,
) -> Reply<CompetenceCategoryCertStatistics> {
    let data = employee::competence_category_statistics(query.dept(), query.role()?);
    Ok(success(data, "mock competence category cert statistics"))
}

pub async fn cadre_cert_statistics(Query(query): Query<StatsQuery>) -> Reply<CadreCertStatistics> {
    Ok(success(
        cadre::cert_statistics(query.dept()),
        "mock cadre maturity job category cert statistics",
    ))
}

pub async fn cadre_qualified_statistics(
    Query(query): Query<StatsQuery>,
) -> Reply<CadreQualifiedStatistics> {
    Ok(success(
        cadre::qualified_statistics(query.dept()),
        "mock cadre maturity job category qualified statistics",
    ))
}

pub async fn expert_cert_statistics(Query(query): Query<StatsQuery>) -> Reply<ExpertCertStatistics> {
    Ok(success(
        expert::cert_statistics(query.dept()),
        "mock expert ai cert statistics",
    ))
}

pub async fn expert_qualified_statistics(
    Query(query): Query<StatsQuery>,
) -> Reply<ExpertQualifiedStatistics> {
    Ok(success(
        expert::qualified_statistics(query.dept()),
        "mock expert ai qualified statistics",
    ))
}

fn parse_code(raw: Option<&str>, default: i64) -> Option<i64> {
    match raw.map(str::trim) {
        None | Some("") => Some(default),
        Some(value) => value.parse().ok(),
    }
}

pub async fn cadre_qualified_details(Query(query): Query<DetailQuery>) -> Reply<EmployeeDrillDown> {
    let dept_code = query.dept_code.as_deref().map(str::trim).unwrap_or_default();
    if dept_code.is_empty() {
        return Err(MockError::InvalidParameter("部门ID不能为空".to_string()));
    }

    let person_type = parse_code(query.person_type.as_deref(), 1)
        .filter(|&code| code != 0)
        .and_then(|code| code.to_string().parse::<Role>().ok())
        .ok_or_else(|| MockError::InvalidParameter("人员类型不能为空".to_string()))?;

    let query_type = parse_code(query.query_type.as_deref(), 1)
        .and_then(QueryType::from_code)
        .ok_or_else(|| {
            MockError::InvalidParameter(
                "查询类型参数错误，只支持1（任职人数）或2（基线人数）".to_string(),
            )
        })?;

    let maturity: MaturityFilter = query
        .ai_maturity
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(MockError::InvalidParameter)?;

    let data = details::qualified_details(
        dept_code,
        maturity,
        query.job_category.as_deref(),
        person_type,
        query_type,
    );
    Ok(success(data, "查询成功"))
}

pub async fn cadre_ai_certification_overview() -> Reply<CadreAiCertificationOverview> {
    Ok(success(overview::cadre_ai_certification_overview(), "查询成功"))
}

pub async fn pl_tm_cert_statistics() -> Reply<PlTmCertStatistics> {
    Ok(success(overview::pl_tm_cert_statistics(), "查询成功"))
}

pub async fn personal_course_completion(
    Query(query): Query<AccountQuery>,
) -> Reply<PersonalCourseCompletion> {
    let data = course::personal_course_completion(query.account.as_deref().unwrap_or_default());
    debug!(account = %data.emp_num, "personal course completion");
    Ok(success(data, "查询成功"))
}

pub async fn overall_certification_trends() -> Reply<AllStaffCharts> {
    Ok(success(trends::overall_certification_trends(), "查询成功"))
}

pub async fn not_found(uri: Uri) -> MockError {
    MockError::NotFound(uri.path().to_string())
}
