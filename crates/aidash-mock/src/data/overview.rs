//! Entry-level manager and cadre AI overview tables.

use aidash_core::overview::{
    CadreAiCertificationOverview, CadreAiOverviewStatistics, PlTmCertStatistics,
    PlTmDepartmentStatistics, PlTmPmStatistics,
};
use aidash_core::rate::rate;
use aidash_core::ROOT_DEPT_CODE;

use super::{departments, dept_name, multiplier, scale};

fn side(total: u64, qualified: u64, cert: u64) -> PlTmPmStatistics {
    // Fractions to four places, as the backend reports them.
    let ratio = |count: u64| {
        if total == 0 {
            0.0
        } else {
            (count as f64 / total as f64 * 10_000.0).round() / 10_000.0
        }
    };
    PlTmPmStatistics {
        total_count: total,
        qualified_count: qualified,
        qualified_ratio: ratio(qualified),
        cert_count: cert,
        cert_ratio: ratio(cert),
    }
}

fn pl_tm_department(
    code: &str,
    name: &str,
    pl_tm: PlTmPmStatistics,
    pm: PlTmPmStatistics,
) -> PlTmDepartmentStatistics {
    PlTmDepartmentStatistics {
        dept_code: code.to_string(),
        dept_name: name.to_string(),
        pl_tm,
        pm,
    }
}

/// R&D management department and its fourth-level departments.
pub fn pl_tm_cert_statistics() -> PlTmCertStatistics {
    PlTmCertStatistics {
        summary: Some(pl_tm_department(
            "030681",
            "云核心网研发管理部",
            side(150, 120, 100),
            side(80, 60, 50),
        )),
        department_list: vec![
            pl_tm_department("030681001", "部门A", side(50, 40, 35), side(30, 22, 18)),
            pl_tm_department("030681002", "部门B", side(60, 50, 40), side(35, 28, 22)),
            pl_tm_department("030681003", "部门C", side(40, 30, 25), side(15, 10, 10)),
        ],
    }
}

/// Cadre headcount of a third-level department at multiplier 1.0.
const CADRE_SEED: u64 = 40;

/// How a fourth-level department's headcount divides among its siblings.
const CHILD_SHARES: &[f64] = &[0.6, 0.4];

fn overview_stat(code: &str, level: &str, total: u64) -> CadreAiOverviewStatistics {
    let part = |share: f64| (total as f64 * share).round() as u64;
    let l2_l3 = part(0.5);
    let software_l2 = (l2_l3 as f64 * 0.35).round() as u64;
    let software_l3 = (l2_l3 as f64 * 0.25).round() as u64;
    let meet = (l2_l3 as f64 * 0.7).round() as u64;
    CadreAiOverviewStatistics {
        dept_code: code.to_string(),
        dept_name: dept_name(code),
        dept_level: Some(level.to_string()),
        total_cadre_count: total,
        l2_l3_count: l2_l3,
        software_l2_count: software_l2,
        software_l3_count: software_l3,
        non_software_l2_l3_count: l2_l3 - software_l2 - software_l3,
        meet_requirement_l2_l3_count: meet,
        meet_requirement_l2_l3_rate: rate(l2_l3, meet),
        children: Vec::new(),
    }
}

/// Third-level departments with their fourth-level children, and the
/// product-line summary summed over the third level.
pub fn cadre_ai_certification_overview() -> CadreAiCertificationOverview {
    let department_list: Vec<_> = departments::children(ROOT_DEPT_CODE)
        .into_iter()
        .map(|dept| {
            let total = scale(CADRE_SEED, multiplier(&dept.dept_code));
            let children = departments::children(&dept.dept_code)
                .into_iter()
                .zip(CHILD_SHARES)
                .map(|(child, share)| {
                    overview_stat(&child.dept_code, &child.dept_level, scale(total, *share))
                })
                .collect();
            CadreAiOverviewStatistics {
                children,
                ..overview_stat(&dept.dept_code, &dept.dept_level, total)
            }
        })
        .collect();

    let mut summary = CadreAiOverviewStatistics {
        dept_code: ROOT_DEPT_CODE.to_string(),
        dept_name: dept_name(ROOT_DEPT_CODE),
        ..Default::default()
    };
    for dept in &department_list {
        summary.total_cadre_count += dept.total_cadre_count;
        summary.l2_l3_count += dept.l2_l3_count;
        summary.software_l2_count += dept.software_l2_count;
        summary.software_l3_count += dept.software_l3_count;
        summary.non_software_l2_l3_count += dept.non_software_l2_l3_count;
        summary.meet_requirement_l2_l3_count += dept.meet_requirement_l2_l3_count;
    }
    summary.meet_requirement_l2_l3_rate =
        rate(summary.l2_l3_count, summary.meet_requirement_l2_l3_count);

    CadreAiCertificationOverview {
        summary: Some(summary),
        department_list,
    }
}
