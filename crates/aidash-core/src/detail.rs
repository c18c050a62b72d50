//! Employee drill-down: query filters and the audit records shown in the
//! detail table.

use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::department::ROOT_DEPT_CODE;
use crate::stats::nullable;
use crate::view::Role;

/// Position maturity filter. `L5` is the combined L2 + L3 bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaturityFilter {
    #[default]
    #[serde(rename = "全部")]
    All,
    L1,
    L2,
    L3,
    L5,
}

impl MaturityFilter {
    /// Query value; `None` means "do not filter".
    pub fn code(self) -> Option<&'static str> {
        match self {
            MaturityFilter::All => None,
            MaturityFilter::L1 => Some("L1"),
            MaturityFilter::L2 => Some("L2"),
            MaturityFilter::L3 => Some("L3"),
            MaturityFilter::L5 => Some("L5"),
        }
    }

    /// Whether an employee at `level` passes the filter.
    pub fn matches(self, level: &str) -> bool {
        match self {
            MaturityFilter::All => true,
            MaturityFilter::L5 => level == "L2" || level == "L3",
            other => other.code() == Some(level),
        }
    }
}

impl FromStr for MaturityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "全部" | "all" | "ALL" => Ok(MaturityFilter::All),
            "L1" => Ok(MaturityFilter::L1),
            "L2" => Ok(MaturityFilter::L2),
            "L3" => Ok(MaturityFilter::L3),
            "L5" => Ok(MaturityFilter::L5),
            other => Err(format!("unknown maturity level: {other}")),
        }
    }
}

impl fmt::Display for MaturityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code().unwrap_or("全部"))
    }
}

/// What the drill-down counts: appointed employees or the whole baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum QueryType {
    #[default]
    Appointed,
    Baseline,
}

impl QueryType {
    pub fn code(self) -> u8 {
        match self {
            QueryType::Appointed => 1,
            QueryType::Baseline => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(QueryType::Appointed),
            2 => Some(QueryType::Baseline),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFilters {
    pub dept_code: String,
    pub maturity: MaturityFilter,
    pub job_category: Option<String>,
    pub person_type: Role,
    pub query_type: QueryType,
}

impl Default for DetailFilters {
    fn default() -> Self {
        Self {
            dept_code: ROOT_DEPT_CODE.to_string(),
            maturity: MaturityFilter::All,
            job_category: None,
            person_type: Role::Cadre,
            query_type: QueryType::Appointed,
        }
    }
}

impl DetailFilters {
    /// Query pairs for the drill-down endpoint. Unset filters are omitted.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("deptCode", self.dept_code.clone())];
        if let Some(level) = self.maturity.code() {
            query.push(("aiMaturity", level.to_string()));
        }
        if let Some(category) = self.job_category.as_deref().filter(|c| !c.trim().is_empty()) {
            query.push(("jobCategory", category.to_string()));
        }
        query.push(("personType", self.person_type.code().to_string()));
        query.push(("queryType", self.query_type.code().to_string()));
        query
    }
}

/// One employee as returned by the drill-down endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeDetail {
    pub name: Option<String>,
    pub employee_number: Option<String>,
    pub competence_category: Option<String>,
    pub competence_subcategory: Option<String>,
    pub first_level_dept: Option<String>,
    pub second_level_dept: Option<String>,
    pub third_level_dept: Option<String>,
    pub fourth_level_dept: Option<String>,
    pub fifth_level_dept: Option<String>,
    pub sixth_level_dept: Option<String>,
    pub cert_title: Option<String>,
    pub cert_start_time: Option<String>,
    pub is_passed_subject2: Option<i64>,
    pub is_cadre: Option<i64>,
    pub ai_maturity: Option<String>,
    pub mini_dept_name: Option<String>,
    pub cadre_type: Option<String>,
    pub competence_family_cn: Option<String>,
    pub competence_category_cn: Option<String>,
    pub competence_subcategory_cn: Option<String>,
    pub direction_cn_name: Option<String>,
    pub competence_rating_cn: Option<String>,
    pub competence_grade_cn: Option<String>,
    pub competence_from: Option<String>,
    pub competence_to: Option<String>,
    pub is_qualifications_standard: Option<i64>,
    pub is_cert_standard: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDrillDown {
    #[serde(default, deserialize_with = "nullable")]
    pub employee_details: Vec<EmployeeDetail>,
}

/// A row of the appointment audit table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    pub id: String,
    pub name: String,
    pub employee_id: String,
    pub position_category: String,
    pub position_sub_category: String,
    pub department_level1: String,
    pub department_level2: String,
    pub department_level3: String,
    pub department_level4: String,
    pub department_level5: String,
    pub department_level6: String,
    pub min_department: String,
    pub professional_category: String,
    pub professional_sub_category: String,
    pub qualification_direction: String,
    pub qualification_level: String,
    pub qualification_grade: String,
    pub effective_date: String,
    pub expiry_date: String,
    pub is_cadre: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cadre_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_maturity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_qualified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_cert_standard: Option<bool>,
}

fn text(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// `2023-01-01T00:00:00Z` → `2023-01-01`; anything unparseable is kept as sent.
pub fn display_date(value: &Option<String>) -> String {
    let raw = text(value);
    match DateTime::parse_from_rfc3339(&raw) {
        Ok(parsed) => parsed.format("%Y-%m-%d").to_string(),
        Err(_) => raw,
    }
}

impl AppointmentRecord {
    pub fn from_detail(index: usize, detail: &EmployeeDetail) -> Self {
        let employee_id = text(&detail.employee_number);
        let id = if employee_id.is_empty() {
            format!("row-{index}")
        } else {
            format!("{employee_id}-{index}")
        };
        let cadre_type = non_blank(&detail.cadre_type);
        Self {
            id,
            name: text(&detail.name),
            employee_id,
            position_category: text(&detail.competence_category),
            position_sub_category: text(&detail.competence_subcategory),
            department_level1: text(&detail.first_level_dept),
            department_level2: text(&detail.second_level_dept),
            department_level3: text(&detail.third_level_dept),
            department_level4: text(&detail.fourth_level_dept),
            department_level5: text(&detail.fifth_level_dept),
            department_level6: text(&detail.sixth_level_dept),
            min_department: text(&detail.mini_dept_name),
            professional_category: text(&detail.competence_category_cn),
            professional_sub_category: text(&detail.competence_subcategory_cn),
            qualification_direction: text(&detail.direction_cn_name),
            qualification_level: text(&detail.competence_rating_cn),
            qualification_grade: text(&detail.competence_grade_cn),
            effective_date: display_date(&detail.competence_from),
            expiry_date: display_date(&detail.competence_to),
            is_cadre: detail.is_cadre == Some(1) || cadre_type.is_some(),
            cadre_type,
            position_maturity: non_blank(&detail.ai_maturity),
            is_qualified: detail.is_qualifications_standard.map(|flag| flag == 1),
            is_cert_standard: detail.is_cert_standard.map(|flag| flag == 1),
        }
    }
}

/// Map a drill-down response to audit rows, in response order.
pub fn appointment_records(drill_down: &EmployeeDrillDown) -> Vec<AppointmentRecord> {
    drill_down
        .employee_details
        .iter()
        .enumerate()
        .map(|(index, detail)| AppointmentRecord::from_detail(index, detail))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn l5_matches_l2_and_l3() {
        assert!(MaturityFilter::L5.matches("L2"));
        assert!(MaturityFilter::L5.matches("L3"));
        assert!(!MaturityFilter::L5.matches("L1"));
        assert!(!MaturityFilter::L5.matches("L4"));
        assert!(MaturityFilter::L2.matches("L2"));
        assert!(!MaturityFilter::L2.matches("L3"));
        assert!(MaturityFilter::All.matches("L4"));
    }

    #[test]
    fn maturity_filter_parses() {
        assert_eq!("L5".parse::<MaturityFilter>().unwrap(), MaturityFilter::L5);
        assert_eq!("全部".parse::<MaturityFilter>().unwrap(), MaturityFilter::All);
        assert_eq!("".parse::<MaturityFilter>().unwrap(), MaturityFilter::All);
        assert!("L9".parse::<MaturityFilter>().is_err());
        assert_eq!(MaturityFilter::L3.to_string(), "L3");
    }

    #[test]
    fn query_omits_unset_filters() {
        let filters = DetailFilters::default();
        let query = filters.query();
        assert_eq!(
            query,
            vec![
                ("deptCode", "0".to_string()),
                ("personType", "1".to_string()),
                ("queryType", "1".to_string()),
            ]
        );

        let filters = DetailFilters {
            dept_code: "dept-ict-core-dev".into(),
            maturity: MaturityFilter::L5,
            job_category: Some("软件类".into()),
            person_type: Role::Expert,
            query_type: QueryType::Baseline,
        };
        let query = filters.query();
        assert!(query.contains(&("aiMaturity", "L5".to_string())));
        assert!(query.contains(&("jobCategory", "软件类".to_string())));
        assert!(query.contains(&("personType", "2".to_string())));
        assert!(query.contains(&("queryType", "2".to_string())));
    }

    #[test]
    fn query_type_codes() {
        assert_eq!(QueryType::from_code(1), Some(QueryType::Appointed));
        assert_eq!(QueryType::from_code(2), Some(QueryType::Baseline));
        assert_eq!(QueryType::from_code(3), None);
    }

    #[test]
    fn detail_maps_to_record_with_defaults() {
        let json = r#"{
            "employeeDetails": [
                {
                    "name": "张三",
                    "employeeNumber": "E001234",
                    "competenceCategory": "管理类",
                    "firstLevelDept": "云核心网运营部",
                    "fourthLevelDept": null,
                    "aiMaturity": "L2",
                    "cadreType": "技术干部",
                    "competenceRatingCn": "高级",
                    "competenceFrom": "2023-01-01T00:00:00Z",
                    "competenceTo": null,
                    "isQualificationsStandard": 1
                },
                {"name": "无名"}
            ]
        }"#;
        let drill_down: EmployeeDrillDown = serde_json::from_str(json).unwrap();
        let records = appointment_records(&drill_down);
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.id, "E001234-0");
        assert_eq!(first.department_level1, "云核心网运营部");
        assert_eq!(first.department_level4, "");
        assert_eq!(first.effective_date, "2023-01-01");
        assert_eq!(first.expiry_date, "");
        assert!(first.is_cadre);
        assert_eq!(first.position_maturity.as_deref(), Some("L2"));
        assert_eq!(first.is_qualified, Some(true));
        assert_eq!(first.is_cert_standard, None);

        let second = &records[1];
        assert_eq!(second.id, "row-1");
        assert!(!second.is_cadre);
        assert_eq!(second.position_maturity, None);
    }

    #[test]
    fn unparseable_dates_are_kept() {
        assert_eq!(display_date(&Some("2024/05/01".into())), "2024/05/01");
        assert_eq!(display_date(&None), "");
    }
}
