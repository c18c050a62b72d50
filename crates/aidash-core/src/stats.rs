//! Wire types for the grouped statistics endpoints.
//!
//! The backend groups counts either by maturity level and job category or by
//! department. Field names follow the backend's camelCase JSON. Scalars the
//! backend leaves out or sends as `null` read as `0` / `""`, and a missing
//! `jobCategoryStatistics` list reads as empty.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a value the backend may send as `null`, substituting the default.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Certification counts for the expert domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertMetrics {
    #[serde(deserialize_with = "nullable")]
    pub baseline_count: u64,
    #[serde(deserialize_with = "nullable")]
    pub certified_count: u64,
    #[serde(deserialize_with = "nullable")]
    pub cert_rate: f64,
}

/// Certification counts for the cadre domain, with the subject-two exam and
/// the certification standard alongside the certificate itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CadreCertMetrics {
    #[serde(deserialize_with = "nullable")]
    pub baseline_count: u64,
    #[serde(deserialize_with = "nullable")]
    pub certified_count: u64,
    #[serde(deserialize_with = "nullable")]
    pub cert_rate: f64,
    #[serde(deserialize_with = "nullable")]
    pub subject2_pass_count: u64,
    #[serde(deserialize_with = "nullable")]
    pub subject2_pass_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_standard_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_standard_rate: Option<f64>,
}

/// Appointment (qualification) counts, shared by cadres and experts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QualifiedMetrics {
    #[serde(deserialize_with = "nullable")]
    pub baseline_count: u64,
    #[serde(deserialize_with = "nullable")]
    pub qualified_count: u64,
    #[serde(deserialize_with = "nullable")]
    pub qualified_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualified_by_requirement_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualified_by_requirement_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_count_by_requirement: Option<u64>,
}

impl QualifiedMetrics {
    /// Denominator of the by-requirement rate: the by-requirement baseline
    /// when the backend supplied one, otherwise the plain baseline.
    pub fn requirement_baseline(&self) -> u64 {
        self.baseline_count_by_requirement
            .unwrap_or(self.baseline_count)
    }
}

/// One job category inside a maturity tier (leaf node).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCategoryStatistic<M> {
    #[serde(default, deserialize_with = "nullable")]
    pub job_category: String,
    #[serde(flatten)]
    pub metrics: M,
}

/// One maturity tier with its job-category breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaturityStatistic<M> {
    #[serde(default, deserialize_with = "nullable")]
    pub maturity_level: String,
    #[serde(flatten)]
    pub metrics: M,
    #[serde(default, deserialize_with = "nullable")]
    pub job_category_statistics: Vec<JobCategoryStatistic<M>>,
}

/// A maturity → job-category grouped response for one department.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedStatistics<M> {
    #[serde(default, deserialize_with = "nullable")]
    pub dept_code: String,
    #[serde(default, deserialize_with = "nullable")]
    pub dept_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub maturity_statistics: Vec<MaturityStatistic<M>>,
    #[serde(default)]
    pub total_statistics: Option<MaturityStatistic<M>>,
}

pub type ExpertCertStatistics = GroupedStatistics<CertMetrics>;
pub type ExpertQualifiedStatistics = GroupedStatistics<QualifiedMetrics>;
pub type CadreCertStatistics = GroupedStatistics<CadreCertMetrics>;
pub type CadreQualifiedStatistics = GroupedStatistics<QualifiedMetrics>;

/// Per-department certification counts.
///
/// Older backends report the appointment count as `certifiedCount` only;
/// newer ones add `qualifiedCount`/`qualifiedRate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DepartmentCertStatistic {
    #[serde(deserialize_with = "nullable")]
    pub dept_code: String,
    #[serde(deserialize_with = "nullable")]
    pub dept_name: String,
    #[serde(deserialize_with = "nullable")]
    pub total_count: u64,
    #[serde(deserialize_with = "nullable")]
    pub certified_count: u64,
    #[serde(deserialize_with = "nullable")]
    pub cert_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualified_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualified_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCertStatistics {
    #[serde(default, deserialize_with = "nullable")]
    pub department_statistics: Vec<DepartmentCertStatistic>,
    #[serde(default)]
    pub total_statistics: Option<DepartmentCertStatistic>,
}

/// Certification counts for one competence (job) category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompetenceCategoryCertStatistic {
    #[serde(deserialize_with = "nullable")]
    pub competence_category: String,
    #[serde(deserialize_with = "nullable")]
    pub total_count: u64,
    #[serde(deserialize_with = "nullable")]
    pub certified_count: u64,
    #[serde(deserialize_with = "nullable")]
    pub qualified_count: u64,
    #[serde(deserialize_with = "nullable")]
    pub cert_rate: f64,
    #[serde(deserialize_with = "nullable")]
    pub qualified_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetenceCategoryCertStatistics {
    #[serde(default, deserialize_with = "nullable")]
    pub dept_code: String,
    #[serde(default, deserialize_with = "nullable")]
    pub dept_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub category_statistics: Vec<CompetenceCategoryCertStatistic>,
    #[serde(default)]
    pub total_statistics: Option<CompetenceCategoryCertStatistic>,
}
