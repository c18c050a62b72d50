//! Expert statistics. Experts only sit in the L2 and L3 tiers.

use aidash_core::stats::{
    CertMetrics, ExpertCertStatistics, ExpertQualifiedStatistics, QualifiedMetrics,
};

use super::{TierSeed, grouped};

const fn cert(baseline_count: u64, certified_count: u64) -> CertMetrics {
    CertMetrics {
        baseline_count,
        certified_count,
        cert_rate: 0.0,
    }
}

const fn qualified(baseline_count: u64, qualified_count: u64, by_requirement: u64) -> QualifiedMetrics {
    QualifiedMetrics {
        baseline_count,
        qualified_count,
        qualified_rate: 0.0,
        qualified_by_requirement_count: Some(by_requirement),
        qualified_by_requirement_rate: None,
        baseline_count_by_requirement: None,
    }
}

const CERT_CATEGORIES: &[(&str, CertMetrics)] = &[
    ("软件类", cert(45, 32)),
    ("系统类", cert(35, 25)),
    ("研究类", cert(28, 20)),
    ("管理类", cert(25, 18)),
];

const CERT_TIERS: &[TierSeed<CertMetrics>] = &[
    TierSeed {
        level: "L2",
        metrics: cert(80, 58),
        categories: CERT_CATEGORIES,
    },
    TierSeed {
        level: "L3",
        metrics: cert(53, 37),
        categories: CERT_CATEGORIES,
    },
];

const QUALIFIED_CATEGORIES: &[(&str, QualifiedMetrics)] = &[
    ("软件类", qualified(45, 35, 30)),
    ("系统类", qualified(35, 28, 24)),
    ("研究类", qualified(28, 22, 19)),
    ("管理类", qualified(25, 20, 17)),
];

const QUALIFIED_TIERS: &[TierSeed<QualifiedMetrics>] = &[
    TierSeed {
        level: "L2",
        metrics: qualified(80, 63, 54),
        categories: QUALIFIED_CATEGORIES,
    },
    TierSeed {
        level: "L3",
        metrics: qualified(53, 42, 36),
        categories: QUALIFIED_CATEGORIES,
    },
];

pub fn cert_statistics(dept_code: &str) -> ExpertCertStatistics {
    grouped(dept_code, CERT_TIERS)
}

pub fn qualified_statistics(dept_code: &str) -> ExpertQualifiedStatistics {
    grouped(dept_code, QUALIFIED_TIERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_cert_statistics_match_seed() {
        let stats = cert_statistics("0");
        assert_eq!(stats.dept_name, "云核心网产品线");
        let l2 = &stats.maturity_statistics[0];
        assert_eq!(l2.maturity_level, "L2");
        assert_eq!(l2.metrics.baseline_count, 80);
        assert_eq!(l2.metrics.certified_count, 58);
        assert_eq!(l2.metrics.cert_rate, 72.5);

        // Category baselines: round(80 * 0.35 * (i + 1) / 4).
        let baselines: Vec<_> = l2
            .job_category_statistics
            .iter()
            .map(|c| c.metrics.baseline_count)
            .collect();
        assert_eq!(baselines, [7, 14, 21, 28]);

        let total = stats.total_statistics.unwrap();
        assert_eq!(total.maturity_level, "总计");
        assert_eq!(total.metrics.baseline_count, 133);
        assert_eq!(total.metrics.certified_count, 95);
        assert_eq!(total.metrics.cert_rate, 71.43);
    }

    #[test]
    fn departments_scale_deterministically() {
        let dev = cert_statistics("dept-ict-core-dev");
        assert_eq!(dev.maturity_statistics[0].metrics.baseline_count, 88);
        assert_eq!(dev, cert_statistics("dept-ict-core-dev"));

        let unknown = cert_statistics("dept-unknown");
        assert_eq!(unknown.dept_name, "部门-dept-unknown");
        assert_eq!(
            unknown.maturity_statistics,
            cert_statistics("0").maturity_statistics
        );
    }

    #[test]
    fn qualified_counts_never_exceed_baseline() {
        for code in ["0", "dept-ict-core-ops", "dept-ict-core-solution"] {
            let stats = qualified_statistics(code);
            for tier in &stats.maturity_statistics {
                assert!(tier.metrics.qualified_count <= tier.metrics.baseline_count);
                for category in &tier.job_category_statistics {
                    let m = &category.metrics;
                    assert!(m.qualified_count <= m.baseline_count);
                    assert!(m.qualified_by_requirement_count.unwrap() <= m.baseline_count);
                }
            }
        }
    }
}
