//! Department and competence-category breakdowns for the all-staff charts.

use aidash_core::rate::rate;
use aidash_core::stats::{
    CompetenceCategoryCertStatistic, CompetenceCategoryCertStatistics, DepartmentCertStatistic,
    EmployeeCertStatistics,
};
use aidash_core::Role;

use super::{dept_name, departments, multiplier, normalize_dept, rescale_part, scale};

/// Headcount of a department at multiplier 1.0, with certified and
/// qualified counts.
const DEPARTMENT_SEED: (u64, u64, u64) = (120, 78, 90);

/// Each further sibling is this much smaller than the previous one.
const SIBLING_DECAY: f64 = 0.1;

const CATEGORY_SEEDS: &[(&str, u64, u64, u64)] = &[
    ("软件类", 210, 150, 168),
    ("系统类", 120, 80, 92),
    ("研究类", 75, 52, 60),
    ("测试类", 60, 36, 41),
    ("管理类", 45, 30, 35),
];

/// Share of the headcount each population filter keeps.
fn role_share(role: Role) -> f64 {
    match role {
        Role::All => 1.0,
        Role::Cadre => 0.3,
        Role::Expert => 0.2,
        Role::FrontlineManager => 0.15,
    }
}

fn department_statistic(code: &str, factor: f64) -> DepartmentCertStatistic {
    let (seed_total, seed_certified, seed_qualified) = DEPARTMENT_SEED;
    let total = scale(seed_total, factor);
    let certified = rescale_part(seed_certified, seed_total, total);
    let qualified = rescale_part(seed_qualified, seed_total, total);
    DepartmentCertStatistic {
        dept_code: code.to_string(),
        dept_name: dept_name(code),
        total_count: total,
        certified_count: certified,
        cert_rate: rate(total, certified),
        qualified_count: Some(qualified),
        qualified_rate: Some(rate(total, qualified)),
    }
}

/// One entry per child of `dept_code` (or the department itself when it has
/// no children), plus their sum.
pub fn cert_statistics(dept_code: &str, role: Role) -> EmployeeCertStatistics {
    let code = normalize_dept(dept_code);
    let mut codes: Vec<String> = departments::children(code)
        .into_iter()
        .map(|child| child.dept_code)
        .collect();
    if codes.is_empty() {
        codes.push(code.to_string());
    }

    let department_statistics: Vec<_> = codes
        .iter()
        .enumerate()
        .map(|(i, child)| {
            let decay = 1.0 - SIBLING_DECAY * i as f64;
            department_statistic(child, multiplier(child) * role_share(role) * decay)
        })
        .collect();

    let mut total = DepartmentCertStatistic {
        dept_code: code.to_string(),
        dept_name: dept_name(code),
        qualified_count: Some(0),
        ..Default::default()
    };
    for stat in &department_statistics {
        total.total_count += stat.total_count;
        total.certified_count += stat.certified_count;
        total.qualified_count =
            Some(total.qualified_count.unwrap_or(0) + stat.qualified_count.unwrap_or(0));
    }
    total.cert_rate = rate(total.total_count, total.certified_count);
    total.qualified_rate = total.qualified_count.map(|q| rate(total.total_count, q));

    EmployeeCertStatistics {
        department_statistics,
        total_statistics: Some(total),
    }
}

pub fn competence_category_statistics(
    dept_code: &str,
    role: Role,
) -> CompetenceCategoryCertStatistics {
    let code = normalize_dept(dept_code);
    let factor = multiplier(code) * role_share(role);

    let category_statistics: Vec<_> = CATEGORY_SEEDS
        .iter()
        .map(|&(name, seed_total, seed_certified, seed_qualified)| {
            let total = scale(seed_total, factor);
            let certified = rescale_part(seed_certified, seed_total, total);
            let qualified = rescale_part(seed_qualified, seed_total, total);
            CompetenceCategoryCertStatistic {
                competence_category: name.to_string(),
                total_count: total,
                certified_count: certified,
                qualified_count: qualified,
                cert_rate: rate(total, certified),
                qualified_rate: rate(total, qualified),
            }
        })
        .collect();

    let mut total = CompetenceCategoryCertStatistic {
        competence_category: "总计".to_string(),
        ..Default::default()
    };
    for stat in &category_statistics {
        total.total_count += stat.total_count;
        total.certified_count += stat.certified_count;
        total.qualified_count += stat.qualified_count;
    }
    total.cert_rate = rate(total.total_count, total.certified_count);
    total.qualified_rate = rate(total.total_count, total.qualified_count);

    CompetenceCategoryCertStatistics {
        dept_code: code.to_string(),
        dept_name: dept_name(code),
        category_statistics,
        total_statistics: Some(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_lists_its_children() {
        let stats = cert_statistics("0", Role::All);
        let names: Vec<_> = stats
            .department_statistics
            .iter()
            .map(|d| d.dept_name.as_str())
            .collect();
        assert_eq!(names, ["云核心网运营部", "云核心网研发部", "云核心网解决方案部"]);

        // ops: 120 * 0.9 = 108 people, 78/120 of them certified.
        let ops = &stats.department_statistics[0];
        assert_eq!(ops.total_count, 108);
        assert_eq!(ops.certified_count, 70);
        assert_eq!(ops.qualified_count, Some(81));

        let total = stats.total_statistics.unwrap();
        let summed: u64 = stats.department_statistics.iter().map(|d| d.total_count).sum();
        assert_eq!(total.total_count, summed);
        assert_eq!(total.dept_name, "云核心网产品线");
    }

    #[test]
    fn leaf_department_reports_itself() {
        let stats = cert_statistics("dept-ict-core-ops-apac", Role::All);
        assert_eq!(stats.department_statistics.len(), 1);
        assert_eq!(stats.department_statistics[0].dept_code, "dept-ict-core-ops-apac");
    }

    #[test]
    fn role_shrinks_population() {
        let all = competence_category_statistics("0", Role::All);
        let experts = competence_category_statistics("0", Role::Expert);
        assert_eq!(all.category_statistics[0].total_count, 210);
        assert_eq!(experts.category_statistics[0].total_count, 42);
        assert_eq!(experts.total_statistics.unwrap().competence_category, "总计");
    }
}
