//! Roll minor job categories into one synthetic bucket.

use crate::rate::rate;
use crate::stats::{CadreCertMetrics, CertMetrics, JobCategoryStatistic, QualifiedMetrics};

/// Label of the synthetic bucket produced by [`consolidate`].
pub const OTHER_CATEGORY: &str = "其他类";

/// Category names that carry a precomputed total and are never summed.
pub const TOTAL_LABELS: &[&str] = &["总计", "Total"];

/// Metrics that can be summed across categories.
///
/// Counts accumulate independently; rates are rebuilt from the summed counts
/// once accumulation is finished.
pub trait Additive: Clone + Default {
    /// Add every count of `other` into `self`.
    fn add(&mut self, other: &Self);

    /// Whether any accumulated count is non-zero.
    fn has_counts(&self) -> bool;

    /// Recompute every rate from the current counts.
    fn recompute_rates(&mut self);
}

fn add_optional(acc: &mut Option<u64>, value: Option<u64>) {
    if let Some(value) = value {
        *acc = Some(acc.unwrap_or(0) + value);
    }
}

impl Additive for CertMetrics {
    fn add(&mut self, other: &Self) {
        self.baseline_count += other.baseline_count;
        self.certified_count += other.certified_count;
    }

    fn has_counts(&self) -> bool {
        self.baseline_count > 0 || self.certified_count > 0
    }

    fn recompute_rates(&mut self) {
        self.cert_rate = rate(self.baseline_count, self.certified_count);
    }
}

impl Additive for CadreCertMetrics {
    fn add(&mut self, other: &Self) {
        self.baseline_count += other.baseline_count;
        self.certified_count += other.certified_count;
        self.subject2_pass_count += other.subject2_pass_count;
        add_optional(&mut self.cert_standard_count, other.cert_standard_count);
    }

    fn has_counts(&self) -> bool {
        self.baseline_count > 0
            || self.certified_count > 0
            || self.subject2_pass_count > 0
            || self.cert_standard_count.unwrap_or(0) > 0
    }

    fn recompute_rates(&mut self) {
        self.cert_rate = rate(self.baseline_count, self.certified_count);
        self.subject2_pass_rate = rate(self.baseline_count, self.subject2_pass_count);
        self.cert_standard_rate = self
            .cert_standard_count
            .map(|count| rate(self.baseline_count, count));
    }
}

impl Additive for QualifiedMetrics {
    fn add(&mut self, other: &Self) {
        // Once either side reports a by-requirement baseline, the other side
        // contributes its own, or its plain baseline when it has none. Zero is
        // summed as given.
        self.baseline_count_by_requirement = match (
            self.baseline_count_by_requirement,
            other.baseline_count_by_requirement,
        ) {
            (None, None) => None,
            _ => Some(self.requirement_baseline() + other.requirement_baseline()),
        };
        self.baseline_count += other.baseline_count;
        self.qualified_count += other.qualified_count;
        add_optional(
            &mut self.qualified_by_requirement_count,
            other.qualified_by_requirement_count,
        );
    }

    fn has_counts(&self) -> bool {
        self.baseline_count > 0
            || self.qualified_count > 0
            || self.qualified_by_requirement_count.unwrap_or(0) > 0
            || self.baseline_count_by_requirement.unwrap_or(0) > 0
    }

    fn recompute_rates(&mut self) {
        self.qualified_rate = rate(self.baseline_count, self.qualified_count);
        let denominator = self.requirement_baseline();
        self.qualified_by_requirement_rate = self
            .qualified_by_requirement_count
            .map(|count| rate(denominator, count));
    }
}

fn is_total_label(name: &str) -> bool {
    TOTAL_LABELS.contains(&name.trim())
}

/// Keep allow-listed categories and sum the rest into [`OTHER_CATEGORY`].
pub fn consolidate<M: Additive>(
    categories: &[JobCategoryStatistic<M>],
    allow_list: &[&str],
) -> Vec<JobCategoryStatistic<M>> {
    consolidate_into(categories, allow_list, OTHER_CATEGORY)
}

/// Keep allow-listed categories and sum the rest into a bucket named `other_label`.
///
/// Output order is the kept categories in input order, then the bucket. The
/// bucket is only appended when it accumulated a non-zero count. Entries named
/// in [`TOTAL_LABELS`] are neither kept nor summed.
pub fn consolidate_into<M: Additive>(
    categories: &[JobCategoryStatistic<M>],
    allow_list: &[&str],
    other_label: &str,
) -> Vec<JobCategoryStatistic<M>> {
    let mut kept = Vec::with_capacity(categories.len().min(allow_list.len()) + 1);
    let mut other = M::default();

    for category in categories {
        if allow_list.contains(&category.job_category.as_str()) {
            kept.push(category.clone());
        } else if !is_total_label(&category.job_category) {
            other.add(&category.metrics);
        }
    }

    if other.has_counts() {
        other.recompute_rates();
        kept.push(JobCategoryStatistic {
            job_category: other_label.to_string(),
            metrics: other,
        });
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cert(name: &str, baseline: u64, certified: u64) -> JobCategoryStatistic<CertMetrics> {
        JobCategoryStatistic {
            job_category: name.to_string(),
            metrics: CertMetrics {
                baseline_count: baseline,
                certified_count: certified,
                cert_rate: rate(baseline, certified),
            },
        }
    }

    fn qualified(
        name: &str,
        baseline: u64,
        qualified: u64,
        by_requirement: u64,
        baseline_by_requirement: Option<u64>,
    ) -> JobCategoryStatistic<QualifiedMetrics> {
        JobCategoryStatistic {
            job_category: name.to_string(),
            metrics: QualifiedMetrics {
                baseline_count: baseline,
                qualified_count: qualified,
                qualified_rate: rate(baseline, qualified),
                qualified_by_requirement_count: Some(by_requirement),
                qualified_by_requirement_rate: Some(rate(baseline, by_requirement)),
                baseline_count_by_requirement: baseline_by_requirement,
            },
        }
    }

    #[test]
    fn software_kept_rest_rolled_into_other() {
        let input = vec![cert("软件类", 45, 32), cert("系统类", 12, 4), cert("研究类", 3, 1)];
        let out = consolidate(&input, &["软件类"]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], input[0]);
        assert_eq!(out[0].metrics.cert_rate, 71.11);
        assert_eq!(out[1].job_category, "其他类");
        assert_eq!(out[1].metrics.baseline_count, 15);
        assert_eq!(out[1].metrics.certified_count, 5);
        assert_eq!(out[1].metrics.cert_rate, 33.33);
    }

    #[test]
    fn kept_categories_keep_input_order() {
        let input = vec![
            cert("研究类", 3, 1),
            cert("管理类", 9, 2),
            cert("软件类", 45, 32),
            cert("测试类", 7, 7),
        ];
        let out = consolidate(&input, &["软件类", "研究类", "测试类"]);
        let names: Vec<&str> = out.iter().map(|c| c.job_category.as_str()).collect();
        assert_eq!(names, ["研究类", "软件类", "测试类", "其他类"]);
    }

    #[test]
    fn no_other_row_when_everything_is_kept_or_zero() {
        let input = vec![cert("软件类", 45, 32), cert("系统类", 0, 0)];
        let out = consolidate(&input, &["软件类"]);
        assert_eq!(out.len(), 1);
        assert!(consolidate::<CertMetrics>(&[], &["软件类"]).is_empty());
    }

    #[test]
    fn total_entries_are_dropped_not_summed() {
        let input = vec![
            cert("软件类", 45, 32),
            cert("系统类", 12, 4),
            cert("总计", 57, 36),
            cert("Total", 57, 36),
        ];
        let out = consolidate(&input, &["软件类"]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].metrics.baseline_count, 12);
    }

    #[test]
    fn counts_are_conserved() {
        let input = vec![
            cert("软件类", 45, 32),
            cert("系统类", 12, 4),
            cert("研究类", 3, 1),
            cert("管理类", 25, 18),
            cert("总计", 85, 55),
        ];
        let out = consolidate(&input, &["软件类", "研究类"]);
        let sum = |items: &[JobCategoryStatistic<CertMetrics>]| {
            items
                .iter()
                .filter(|c| !is_total_label(&c.job_category))
                .fold((0, 0), |(b, c), item| {
                    (b + item.metrics.baseline_count, c + item.metrics.certified_count)
                })
        };
        assert_eq!(sum(&out), sum(&input));
    }

    #[test]
    fn requirement_counts_use_summed_requirement_baseline() {
        let input = vec![
            qualified("软件类", 45, 35, 30, Some(40)),
            qualified("系统类", 35, 28, 24, Some(30)),
            qualified("研究类", 28, 22, 19, Some(25)),
        ];
        let out = consolidate_into(&input, &["软件类"], "非软件类");
        let other = &out[1].metrics;
        assert_eq!(out[1].job_category, "非软件类");
        assert_eq!(other.baseline_count, 63);
        assert_eq!(other.qualified_count, 50);
        assert_eq!(other.qualified_rate, 79.37);
        assert_eq!(other.qualified_by_requirement_count, Some(43));
        assert_eq!(other.baseline_count_by_requirement, Some(55));
        assert_eq!(other.qualified_by_requirement_rate, Some(78.18));
    }

    #[test]
    fn zero_requirement_baseline_is_summed_as_given() {
        let input = vec![
            qualified("软件类", 45, 35, 30, Some(40)),
            qualified("系统类", 35, 28, 0, Some(0)),
            qualified("研究类", 28, 22, 0, Some(0)),
        ];
        let out = consolidate_into(&input, &["软件类"], "非软件类");
        let other = &out[1].metrics;
        assert_eq!(other.baseline_count_by_requirement, Some(0));
        assert_eq!(other.qualified_by_requirement_count, Some(0));
        assert_eq!(other.qualified_by_requirement_rate, Some(0.0));
    }

    #[test]
    fn requirement_rate_without_requirement_baseline() {
        let input = vec![
            qualified("软件类", 45, 35, 30, None),
            qualified("系统类", 35, 28, 24, None),
            qualified("研究类", 28, 22, 19, None),
        ];
        let out = consolidate_into(&input, &["软件类"], "非软件类");
        let other = &out[1].metrics;
        assert!(other.baseline_count_by_requirement.is_none());
        assert_eq!(other.qualified_by_requirement_rate, Some(rate(63, 43)));
    }

    #[test]
    fn mixed_requirement_baselines_fall_back_per_category() {
        let input = vec![
            qualified("软件类", 45, 35, 30, Some(40)),
            qualified("系统类", 10, 8, 5, Some(5)),
            qualified("研究类", 100, 90, 90, None),
        ];
        let out = consolidate_into(&input, &["软件类"], "非软件类");
        let other = &out[1].metrics;
        assert_eq!(other.qualified_by_requirement_count, Some(95));
        assert_eq!(other.baseline_count_by_requirement, Some(105));
        assert_eq!(other.qualified_by_requirement_rate, Some(90.48));

        // Same result when the category without a baseline comes first.
        let reversed = vec![input[0].clone(), input[2].clone(), input[1].clone()];
        let out = consolidate_into(&reversed, &["软件类"], "非软件类");
        assert_eq!(out[1].metrics.baseline_count_by_requirement, Some(105));
        assert!(out[1].metrics.qualified_by_requirement_rate.unwrap() <= 100.0);
    }

    #[test]
    fn cadre_metrics_sum_every_counter() {
        let make = |name: &str, baseline, certified, subject2, standard| JobCategoryStatistic {
            job_category: String::from(name),
            metrics: CadreCertMetrics {
                baseline_count: baseline,
                certified_count: certified,
                subject2_pass_count: subject2,
                cert_standard_count: standard,
                ..Default::default()
            },
        };
        let input = vec![
            make("软件类", 10, 8, 6, Some(5)),
            make("系统类", 10, 4, 2, None),
            make("研究类", 20, 6, 4, Some(3)),
        ];
        let out = consolidate(&input, &["软件类"]);
        let other = &out[1].metrics;
        assert_eq!(other.baseline_count, 30);
        assert_eq!(other.certified_count, 10);
        assert_eq!(other.subject2_pass_count, 6);
        assert_eq!(other.cert_standard_count, Some(3));
        assert_eq!(other.cert_rate, 33.33);
        assert_eq!(other.subject2_pass_rate, 20.0);
        assert_eq!(other.cert_standard_rate, Some(10.0));
    }
}
