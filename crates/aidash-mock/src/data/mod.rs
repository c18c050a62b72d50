//! Deterministic synthetic data.
//!
//! Every generator starts from a fixed seed and scales it by the requested
//! department's multiplier. Scaling keeps each count's ratio to its baseline,
//! clamps it to the new baseline, and recomputes rates from the scaled counts.

pub mod cadre;
pub mod course;
pub mod departments;
pub mod details;
pub mod employee;
pub mod expert;
pub mod overview;
pub mod trends;

use aidash_core::consolidate::{Additive, TOTAL_LABELS};
use aidash_core::stats::{
    CadreCertMetrics, CertMetrics, GroupedStatistics, JobCategoryStatistic, MaturityStatistic,
    QualifiedMetrics,
};
use aidash_core::ROOT_DEPT_CODE;

/// Per-department scale factors. Unknown departments use the root's.
const MULTIPLIERS: &[(&str, f64)] = &[
    (ROOT_DEPT_CODE, 1.0),
    ("dept-ict-core-ops", 0.9),
    ("dept-ict-core-dev", 1.1),
    ("dept-ict-core-solution", 0.95),
];

/// Share of a tier's baseline split across its categories, before weighting
/// the i-th of n categories by `(i + 1) / n`.
const CATEGORY_SHARE: f64 = 0.35;

/// Trimmed department code, with blanks meaning the root.
pub fn normalize_dept(code: &str) -> &str {
    match code.trim() {
        "" => ROOT_DEPT_CODE,
        code => code,
    }
}

pub fn multiplier(code: &str) -> f64 {
    let code = normalize_dept(code);
    MULTIPLIERS
        .iter()
        .find(|(known, _)| *known == code)
        .or_else(|| MULTIPLIERS.iter().find(|(known, _)| *known == ROOT_DEPT_CODE))
        .map(|(_, factor)| *factor)
        .unwrap_or(1.0)
}

pub fn dept_name(code: &str) -> String {
    let code = normalize_dept(code);
    departments::find(code)
        .map(|dept| dept.name.to_string())
        .unwrap_or_else(|| format!("部门-{code}"))
}

/// `base * factor`, rounded, never below one.
pub(crate) fn scale(base: u64, factor: f64) -> u64 {
    ((base as f64 * factor).round() as u64).max(1)
}

/// `part` re-expressed against `new_whole`, keeping its ratio to `whole`.
pub(crate) fn rescale_part(part: u64, whole: u64, new_whole: u64) -> u64 {
    if whole == 0 {
        return 0;
    }
    ((new_whole as f64 * part as f64 / whole as f64).round() as u64).min(new_whole)
}

/// Metrics that can be re-based onto a different baseline.
pub(crate) trait Rescale: Additive {
    fn baseline(&self) -> u64;

    fn rescaled(&self, baseline: u64) -> Self;
}

impl Rescale for CertMetrics {
    fn baseline(&self) -> u64 {
        self.baseline_count
    }

    fn rescaled(&self, baseline: u64) -> Self {
        let mut out = CertMetrics {
            baseline_count: baseline,
            certified_count: rescale_part(self.certified_count, self.baseline_count, baseline),
            cert_rate: 0.0,
        };
        out.recompute_rates();
        out
    }
}

impl Rescale for CadreCertMetrics {
    fn baseline(&self) -> u64 {
        self.baseline_count
    }

    fn rescaled(&self, baseline: u64) -> Self {
        let part = |count| rescale_part(count, self.baseline_count, baseline);
        let mut out = CadreCertMetrics {
            baseline_count: baseline,
            certified_count: part(self.certified_count),
            subject2_pass_count: part(self.subject2_pass_count),
            cert_standard_count: self.cert_standard_count.map(part),
            ..Default::default()
        };
        out.recompute_rates();
        out
    }
}

impl Rescale for QualifiedMetrics {
    fn baseline(&self) -> u64 {
        self.baseline_count
    }

    fn rescaled(&self, baseline: u64) -> Self {
        let part = |count| rescale_part(count, self.baseline_count, baseline);
        let mut out = QualifiedMetrics {
            baseline_count: baseline,
            qualified_count: part(self.qualified_count),
            qualified_by_requirement_count: self.qualified_by_requirement_count.map(part),
            baseline_count_by_requirement: self.baseline_count_by_requirement.map(part),
            ..Default::default()
        };
        out.recompute_rates();
        out
    }
}

/// Seed of one maturity tier and its job categories.
pub(crate) struct TierSeed<M: 'static> {
    pub level: &'static str,
    pub metrics: M,
    pub categories: &'static [(&'static str, M)],
}

/// Scale `tiers` for `dept_code` into a grouped response with a summed total.
pub(crate) fn grouped<M: Rescale>(dept_code: &str, tiers: &[TierSeed<M>]) -> GroupedStatistics<M> {
    let code = normalize_dept(dept_code);
    let factor = multiplier(code);

    let maturity_statistics: Vec<_> = tiers
        .iter()
        .map(|tier| {
            let metrics = tier.metrics.rescaled(scale(tier.metrics.baseline(), factor));
            let n = tier.categories.len() as f64;
            let job_category_statistics = tier
                .categories
                .iter()
                .enumerate()
                .map(|(i, (name, seed))| {
                    let weight = (i + 1) as f64 / n;
                    let baseline = scale(metrics.baseline(), CATEGORY_SHARE * weight);
                    JobCategoryStatistic {
                        job_category: name.to_string(),
                        metrics: seed
                            .rescaled(scale(seed.baseline(), factor))
                            .rescaled(baseline),
                    }
                })
                .collect();
            MaturityStatistic {
                maturity_level: tier.level.to_string(),
                metrics,
                job_category_statistics,
            }
        })
        .collect();

    let total_statistics = Some(total_of(&maturity_statistics));
    GroupedStatistics {
        dept_code: code.to_string(),
        dept_name: dept_name(code),
        maturity_statistics,
        total_statistics,
    }
}

/// Sum of every tier, labelled as the grand total.
pub(crate) fn total_of<M: Additive>(tiers: &[MaturityStatistic<M>]) -> MaturityStatistic<M> {
    let mut metrics = M::default();
    for tier in tiers {
        metrics.add(&tier.metrics);
    }
    metrics.recompute_rates();
    MaturityStatistic {
        maturity_level: TOTAL_LABELS[0].to_string(),
        metrics,
        job_category_statistics: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_falls_back_to_root() {
        assert_eq!(multiplier("dept-ict-core-dev"), 1.1);
        assert_eq!(multiplier("  "), 1.0);
        assert_eq!(multiplier("unknown"), 1.0);
    }

    #[test]
    fn names_fall_back_to_code() {
        assert_eq!(dept_name("0"), "云核心网产品线");
        assert_eq!(dept_name(""), "云核心网产品线");
        assert_eq!(dept_name("dept-ict-core-ops"), "云核心网运营部");
        assert_eq!(dept_name("x-9"), "部门-x-9");
    }

    #[test]
    fn scaling_keeps_ratio_and_floor() {
        assert_eq!(scale(80, 0.9), 72);
        assert_eq!(scale(1, 0.1), 1);
        assert_eq!(rescale_part(58, 80, 72), 52);
        assert_eq!(rescale_part(10, 0, 5), 0);
        assert_eq!(rescale_part(80, 80, 3), 3);
    }

    #[test]
    fn rescaled_metrics_recompute_rates() {
        let seed = QualifiedMetrics {
            baseline_count: 80,
            qualified_count: 63,
            qualified_by_requirement_count: Some(54),
            ..Default::default()
        };
        let out = seed.rescaled(88);
        assert_eq!(out.qualified_count, 69);
        assert_eq!(out.qualified_by_requirement_count, Some(59));
        assert_eq!(out.qualified_rate, 78.41);
        assert_eq!(out.qualified_by_requirement_rate, Some(67.05));
        assert_eq!(out.baseline_count_by_requirement, None);
    }
}
