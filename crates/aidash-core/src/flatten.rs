//! Flatten maturity → job-category responses into display rows.
//!
//! Every table follows the same layout: a maturity row per tier, that tier's
//! category rows right after it, and the grand-total row last. Maturity and
//! total rows leave `jobCategory` empty; category rows leave `maturityLevel`
//! empty, which lets the table render both columns as merged cells.
//!
//! The four tables differ only in the metric columns they copy and in the
//! [`TierRollup`](crate::rollup::TierRollup) applied to the special tier.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consolidate::Additive;
use crate::rollup::TableDomain;
use crate::stats::{
    CadreCertMetrics, CertMetrics, GroupedStatistics, JobCategoryStatistic, MaturityStatistic,
    QualifiedMetrics,
};

/// Row construction for one table.
pub trait RowDomain {
    type Metrics: Additive;
    type Row: Clone;

    const DOMAIN: TableDomain;

    /// Summary row for one maturity tier.
    fn maturity_row(tier: &MaturityStatistic<Self::Metrics>) -> Self::Row;

    /// Detail row for one category of `tier_label`.
    fn category_row(tier_label: &str, category: &JobCategoryStatistic<Self::Metrics>)
    -> Self::Row;

    /// Grand-total row, appended last.
    fn total_row(total: &MaturityStatistic<Self::Metrics>) -> Self::Row {
        Self::maturity_row(total)
    }
}

/// Flatten `response` into rows for table `D`.
///
/// A missing response or one without maturity statistics returns `previous`
/// unchanged, so a transient empty answer never blanks a rendered table.
pub fn flatten<D: RowDomain>(
    response: Option<&GroupedStatistics<D::Metrics>>,
    previous: &[D::Row],
) -> Vec<D::Row> {
    let Some(response) = response.filter(|r| !r.maturity_statistics.is_empty()) else {
        debug!(
            table = ?D::DOMAIN,
            rows = previous.len(),
            "no maturity statistics, keeping previous rows"
        );
        return previous.to_vec();
    };

    let mut rows = Vec::new();
    for tier in &response.maturity_statistics {
        rows.push(D::maturity_row(tier));
        let categories = D::DOMAIN
            .rollup(&tier.maturity_level)
            .apply(&tier.job_category_statistics);
        rows.extend(
            categories
                .iter()
                .map(|category| D::category_row(&tier.maturity_level, category)),
        );
    }

    if let Some(total) = &response.total_statistics {
        rows.push(D::total_row(total));
    }

    rows
}

// ── Expert certification ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertCertificationRow {
    pub maturity_level: String,
    pub job_category: String,
    pub baseline: u64,
    pub certified: u64,
    pub certification_rate: f64,
    pub is_maturity_row: bool,
}

pub struct ExpertCertificationTable;

impl RowDomain for ExpertCertificationTable {
    type Metrics = CertMetrics;
    type Row = ExpertCertificationRow;

    const DOMAIN: TableDomain = TableDomain::ExpertCertification;

    fn maturity_row(tier: &MaturityStatistic<CertMetrics>) -> ExpertCertificationRow {
        ExpertCertificationRow {
            maturity_level: tier.maturity_level.clone(),
            job_category: String::new(),
            baseline: tier.metrics.baseline_count,
            certified: tier.metrics.certified_count,
            certification_rate: tier.metrics.cert_rate,
            is_maturity_row: true,
        }
    }

    fn category_row(
        _tier_label: &str,
        category: &JobCategoryStatistic<CertMetrics>,
    ) -> ExpertCertificationRow {
        ExpertCertificationRow {
            maturity_level: String::new(),
            job_category: category.job_category.clone(),
            baseline: category.metrics.baseline_count,
            certified: category.metrics.certified_count,
            certification_rate: category.metrics.cert_rate,
            is_maturity_row: false,
        }
    }
}

// ── Expert appointment ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertAppointmentRow {
    pub maturity_level: String,
    pub job_category: String,
    pub baseline: u64,
    pub appointed: u64,
    pub appointed_by_requirement: u64,
    pub appointment_rate: f64,
    pub certification_compliance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_count_by_requirement: Option<u64>,
    pub is_maturity_row: bool,
}

impl ExpertAppointmentRow {
    fn from_metrics(
        maturity_level: String,
        job_category: String,
        metrics: &QualifiedMetrics,
        is_maturity_row: bool,
    ) -> Self {
        Self {
            maturity_level,
            job_category,
            baseline: metrics.baseline_count,
            appointed: metrics.qualified_count,
            appointed_by_requirement: metrics.qualified_by_requirement_count.unwrap_or(0),
            appointment_rate: metrics.qualified_rate,
            certification_compliance: metrics.qualified_by_requirement_rate.unwrap_or(0.0),
            baseline_count_by_requirement: metrics.baseline_count_by_requirement,
            is_maturity_row,
        }
    }
}

pub struct ExpertAppointmentTable;

impl RowDomain for ExpertAppointmentTable {
    type Metrics = QualifiedMetrics;
    type Row = ExpertAppointmentRow;

    const DOMAIN: TableDomain = TableDomain::ExpertAppointment;

    fn maturity_row(tier: &MaturityStatistic<QualifiedMetrics>) -> ExpertAppointmentRow {
        ExpertAppointmentRow::from_metrics(
            tier.maturity_level.clone(),
            String::new(),
            &tier.metrics,
            true,
        )
    }

    fn category_row(
        _tier_label: &str,
        category: &JobCategoryStatistic<QualifiedMetrics>,
    ) -> ExpertAppointmentRow {
        ExpertAppointmentRow::from_metrics(
            String::new(),
            category.job_category.clone(),
            &category.metrics,
            false,
        )
    }
}

// ── Cadre certification ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CadreCertificationRow {
    pub maturity_level: String,
    pub job_category: String,
    /// Owning tier of a category row; `None` on maturity and total rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_maturity_level: Option<String>,
    pub baseline: u64,
    pub ai_certificate_holders: u64,
    pub subject_two_passed: u64,
    pub certificate_rate: f64,
    pub subject_two_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_standard_count: Option<u64>,
    pub compliance_rate: Option<f64>,
    pub is_maturity_row: bool,
}

impl CadreCertificationRow {
    fn from_metrics(
        maturity_level: String,
        job_category: String,
        metrics: &CadreCertMetrics,
        is_maturity_row: bool,
    ) -> Self {
        Self {
            maturity_level,
            job_category,
            parent_maturity_level: None,
            baseline: metrics.baseline_count,
            ai_certificate_holders: metrics.certified_count,
            subject_two_passed: metrics.subject2_pass_count,
            certificate_rate: metrics.cert_rate,
            subject_two_rate: metrics.subject2_pass_rate,
            cert_standard_count: metrics.cert_standard_count,
            compliance_rate: metrics.cert_standard_rate,
            is_maturity_row,
        }
    }
}

pub struct CadreCertificationTable;

impl RowDomain for CadreCertificationTable {
    type Metrics = CadreCertMetrics;
    type Row = CadreCertificationRow;

    const DOMAIN: TableDomain = TableDomain::CadreCertification;

    fn maturity_row(tier: &MaturityStatistic<CadreCertMetrics>) -> CadreCertificationRow {
        CadreCertificationRow::from_metrics(
            tier.maturity_level.clone(),
            String::new(),
            &tier.metrics,
            true,
        )
    }

    fn category_row(
        tier_label: &str,
        category: &JobCategoryStatistic<CadreCertMetrics>,
    ) -> CadreCertificationRow {
        CadreCertificationRow {
            parent_maturity_level: Some(tier_label.to_string()),
            ..CadreCertificationRow::from_metrics(
                String::new(),
                category.job_category.clone(),
                &category.metrics,
                false,
            )
        }
    }

    fn total_row(total: &MaturityStatistic<CadreCertMetrics>) -> CadreCertificationRow {
        // The backend does not compute a compliance rate for the total line yet.
        CadreCertificationRow {
            compliance_rate: None,
            ..Self::maturity_row(total)
        }
    }
}

// ── Cadre appointment ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CadreAppointmentRow {
    pub maturity_level: String,
    pub job_category: String,
    pub baseline: u64,
    pub appointed: u64,
    pub appointed_by_requirement: u64,
    pub appointment_rate: f64,
    pub certification_compliance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_count_by_requirement: Option<u64>,
    pub is_maturity_row: bool,
}

impl CadreAppointmentRow {
    fn from_metrics(
        maturity_level: String,
        job_category: String,
        metrics: &QualifiedMetrics,
        is_maturity_row: bool,
    ) -> Self {
        Self {
            maturity_level,
            job_category,
            baseline: metrics.baseline_count,
            appointed: metrics.qualified_count,
            appointed_by_requirement: metrics.qualified_by_requirement_count.unwrap_or(0),
            appointment_rate: metrics.qualified_rate,
            certification_compliance: metrics.qualified_by_requirement_rate.unwrap_or(0.0),
            baseline_count_by_requirement: metrics.baseline_count_by_requirement,
            is_maturity_row,
        }
    }
}

pub struct CadreAppointmentTable;

impl RowDomain for CadreAppointmentTable {
    type Metrics = QualifiedMetrics;
    type Row = CadreAppointmentRow;

    const DOMAIN: TableDomain = TableDomain::CadreAppointment;

    fn maturity_row(tier: &MaturityStatistic<QualifiedMetrics>) -> CadreAppointmentRow {
        CadreAppointmentRow::from_metrics(
            tier.maturity_level.clone(),
            String::new(),
            &tier.metrics,
            true,
        )
    }

    fn category_row(
        _tier_label: &str,
        category: &JobCategoryStatistic<QualifiedMetrics>,
    ) -> CadreAppointmentRow {
        CadreAppointmentRow::from_metrics(
            String::new(),
            category.job_category.clone(),
            &category.metrics,
            false,
        )
    }
}
