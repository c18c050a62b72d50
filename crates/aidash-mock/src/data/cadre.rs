//! Cadre statistics. The backend already rolls the L2 tier up to
//! software / non-software, so the seeds do the same.

use aidash_core::stats::{
    CadreCertMetrics, CadreCertStatistics, CadreQualifiedStatistics, QualifiedMetrics,
};

use super::{TierSeed, grouped};

const fn cert(baseline: u64, certified: u64, subject2: u64, standard: u64) -> CadreCertMetrics {
    CadreCertMetrics {
        baseline_count: baseline,
        certified_count: certified,
        cert_rate: 0.0,
        subject2_pass_count: subject2,
        subject2_pass_rate: 0.0,
        cert_standard_count: Some(standard),
        cert_standard_rate: None,
    }
}

const fn qualified(
    baseline: u64,
    qualified: u64,
    by_requirement: u64,
    baseline_by_requirement: u64,
) -> QualifiedMetrics {
    QualifiedMetrics {
        baseline_count: baseline,
        qualified_count: qualified,
        qualified_rate: 0.0,
        qualified_by_requirement_count: Some(by_requirement),
        qualified_by_requirement_rate: None,
        baseline_count_by_requirement: Some(baseline_by_requirement),
    }
}

const CERT_TIERS: &[TierSeed<CadreCertMetrics>] = &[
    TierSeed {
        level: "L1",
        metrics: cert(40, 22, 18, 15),
        categories: &[
            ("软件类", cert(20, 12, 10, 8)),
            ("管理类", cert(20, 10, 8, 7)),
        ],
    },
    TierSeed {
        level: "L2",
        metrics: cert(60, 38, 30, 28),
        categories: &[
            ("软件类", cert(30, 20, 16, 15)),
            ("非软件类", cert(30, 18, 14, 13)),
        ],
    },
    TierSeed {
        level: "L3",
        metrics: cert(30, 21, 17, 16),
        categories: &[
            ("软件类", cert(18, 13, 11, 10)),
            ("系统类", cert(12, 8, 6, 6)),
        ],
    },
];

const QUALIFIED_TIERS: &[TierSeed<QualifiedMetrics>] = &[
    TierSeed {
        level: "L1",
        metrics: qualified(40, 25, 20, 32),
        categories: &[
            ("软件类", qualified(20, 14, 11, 16)),
            ("管理类", qualified(20, 11, 9, 16)),
        ],
    },
    TierSeed {
        level: "L2",
        metrics: qualified(60, 42, 35, 50),
        categories: &[
            ("软件类", qualified(30, 23, 19, 30)),
            ("非软件类", qualified(30, 19, 16, 20)),
        ],
    },
    TierSeed {
        level: "L3",
        metrics: qualified(30, 22, 18, 26),
        categories: &[
            ("软件类", qualified(18, 14, 12, 18)),
            ("系统类", qualified(12, 8, 6, 8)),
        ],
    },
];

pub fn cert_statistics(dept_code: &str) -> CadreCertStatistics {
    grouped(dept_code, CERT_TIERS)
}

pub fn qualified_statistics(dept_code: &str) -> CadreQualifiedStatistics {
    grouped(dept_code, QUALIFIED_TIERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn l2_tier_is_pre_rolled_up() {
        let stats = cert_statistics("0");
        let l2 = &stats.maturity_statistics[1];
        let names: Vec<_> = l2
            .job_category_statistics
            .iter()
            .map(|c| c.job_category.as_str())
            .collect();
        assert_eq!(names, ["软件类", "非软件类"]);
    }

    #[test]
    fn cert_total_sums_every_count() {
        let stats = cert_statistics("0");
        let total = stats.total_statistics.unwrap().metrics;
        assert_eq!(total.baseline_count, 130);
        assert_eq!(total.certified_count, 81);
        assert_eq!(total.subject2_pass_count, 65);
        assert_eq!(total.cert_standard_count, Some(59));
        assert_eq!(total.cert_standard_rate, Some(45.38));
    }

    #[test]
    fn qualified_rates_use_requirement_baseline() {
        let stats = qualified_statistics("0");
        let l1 = &stats.maturity_statistics[0].metrics;
        assert_eq!(l1.baseline_count_by_requirement, Some(32));
        assert_eq!(l1.qualified_by_requirement_rate, Some(62.5));
        assert_eq!(l1.qualified_rate, 62.5);
    }
}
