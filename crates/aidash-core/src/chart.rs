//! Chart points for the all-staff bar charts.

use serde::{Deserialize, Serialize};

use crate::stats::{
    CadreCertMetrics, CertMetrics, CompetenceCategoryCertStatistic, DepartmentCertStatistic,
    MaturityStatistic, QualifiedMetrics,
};

/// Label used when a statistic has neither a name nor a code.
pub const UNKNOWN_DEPARTMENT: &str = "未知部门";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub label: String,
    pub count: u64,
    pub rate: f64,
    /// Present on department points so a click can drill into the department.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dept_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountField {
    Qualified,
    Certified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateField {
    Qualified,
    Certified,
}

/// Ordered fallback chains for the count and rate of a point.
///
/// The first field a statistic reports wins; a chain that finds nothing
/// yields zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSelector {
    pub counts: &'static [CountField],
    pub rates: &'static [RateField],
}

/// Appointment series. Older backends report appointments as `certifiedCount`.
pub const APPOINTMENT: MetricSelector = MetricSelector {
    counts: &[CountField::Qualified, CountField::Certified],
    rates: &[RateField::Qualified, RateField::Certified],
};

/// Certification series.
pub const CERTIFICATION: MetricSelector = MetricSelector {
    counts: &[CountField::Certified],
    rates: &[RateField::Certified],
};

impl MetricSelector {
    pub fn count<S: ChartSource + ?Sized>(&self, stat: &S) -> u64 {
        self.counts
            .iter()
            .find_map(|&field| stat.count(field))
            .unwrap_or(0)
    }

    pub fn rate<S: ChartSource + ?Sized>(&self, stat: &S) -> f64 {
        self.rates
            .iter()
            .find_map(|&field| stat.rate(field))
            .unwrap_or(0.0)
    }
}

/// A statistic that can be drawn as one chart point.
pub trait ChartSource {
    fn name(&self) -> &str;

    fn code(&self) -> Option<&str> {
        None
    }

    fn count(&self, field: CountField) -> Option<u64>;

    fn rate(&self, field: RateField) -> Option<f64>;
}

/// First of `name`, `code` that is non-blank, else [`UNKNOWN_DEPARTMENT`].
pub fn resolve_label(name: &str, code: Option<&str>) -> String {
    [Some(name), code]
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.trim().is_empty())
        .unwrap_or(UNKNOWN_DEPARTMENT)
        .to_string()
}

/// Map statistics to chart points using `selector`.
pub fn to_points<S: ChartSource>(stats: &[S], selector: &MetricSelector) -> Vec<ChartPoint> {
    stats
        .iter()
        .map(|stat| ChartPoint {
            label: resolve_label(stat.name(), stat.code()),
            count: selector.count(stat),
            rate: selector.rate(stat),
            dept_code: stat
                .code()
                .filter(|code| !code.trim().is_empty())
                .map(str::to_string),
        })
        .collect()
}

impl ChartSource for DepartmentCertStatistic {
    fn name(&self) -> &str {
        &self.dept_name
    }

    fn code(&self) -> Option<&str> {
        Some(&self.dept_code)
    }

    fn count(&self, field: CountField) -> Option<u64> {
        match field {
            CountField::Qualified => self.qualified_count,
            CountField::Certified => Some(self.certified_count),
        }
    }

    fn rate(&self, field: RateField) -> Option<f64> {
        match field {
            RateField::Qualified => self.qualified_rate,
            RateField::Certified => Some(self.cert_rate),
        }
    }
}

impl ChartSource for CompetenceCategoryCertStatistic {
    fn name(&self) -> &str {
        &self.competence_category
    }

    fn count(&self, field: CountField) -> Option<u64> {
        match field {
            CountField::Qualified => Some(self.qualified_count),
            CountField::Certified => Some(self.certified_count),
        }
    }

    fn rate(&self, field: RateField) -> Option<f64> {
        match field {
            RateField::Qualified => Some(self.qualified_rate),
            RateField::Certified => Some(self.cert_rate),
        }
    }
}

impl ChartSource for MaturityStatistic<QualifiedMetrics> {
    fn name(&self) -> &str {
        &self.maturity_level
    }

    fn count(&self, field: CountField) -> Option<u64> {
        match field {
            CountField::Qualified => Some(self.metrics.qualified_count),
            CountField::Certified => None,
        }
    }

    fn rate(&self, field: RateField) -> Option<f64> {
        match field {
            RateField::Qualified => Some(self.metrics.qualified_rate),
            RateField::Certified => None,
        }
    }
}

impl ChartSource for MaturityStatistic<CertMetrics> {
    fn name(&self) -> &str {
        &self.maturity_level
    }

    fn count(&self, field: CountField) -> Option<u64> {
        match field {
            CountField::Qualified => None,
            CountField::Certified => Some(self.metrics.certified_count),
        }
    }

    fn rate(&self, field: RateField) -> Option<f64> {
        match field {
            RateField::Qualified => None,
            RateField::Certified => Some(self.metrics.cert_rate),
        }
    }
}

impl ChartSource for MaturityStatistic<CadreCertMetrics> {
    fn name(&self) -> &str {
        &self.maturity_level
    }

    fn count(&self, field: CountField) -> Option<u64> {
        match field {
            CountField::Qualified => None,
            CountField::Certified => Some(self.metrics.certified_count),
        }
    }

    fn rate(&self, field: RateField) -> Option<f64> {
        match field {
            RateField::Qualified => None,
            RateField::Certified => Some(self.metrics.cert_rate),
        }
    }
}
