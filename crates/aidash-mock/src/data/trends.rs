//! Static all-staff trend series, independent of department and role.

use aidash_core::chart::ChartPoint;
use aidash_core::view::AllStaffCharts;

const DEPARTMENTS: [&str; 6] = [
    "云核心网运营部",
    "云核心网研发部",
    "云核心网解决方案部",
    "无线网络产品部",
    "传送与接入产品部",
    "C Lab（模块）",
];
const LEVELS: [&str; 3] = ["L3", "L2", "L1"];
const JOB_CATEGORIES: [&str; 5] = ["AI架构师", "数据科学家", "算法专家", "产品经理", "运营干部"];

fn series(labels: &[&str], values: &[(u64, f64)]) -> Vec<ChartPoint> {
    labels
        .iter()
        .zip(values)
        .map(|(label, &(count, rate))| ChartPoint {
            label: label.to_string(),
            count,
            rate,
            dept_code: None,
        })
        .collect()
}

pub fn overall_certification_trends() -> AllStaffCharts {
    AllStaffCharts {
        department_appointment: series(
            &DEPARTMENTS,
            &[(320, 65.0), (280, 67.86), (240, 70.0), (350, 70.0), (290, 70.0), (180, 72.5)],
        ),
        department_certification: series(
            &DEPARTMENTS,
            &[(208, 65.0), (190, 67.86), (168, 70.0), (245, 70.0), (203, 70.0), (130, 72.5)],
        ),
        organization_appointment: series(&LEVELS, &[(450, 68.5), (620, 70.2), (380, 65.8)]),
        organization_certification: series(&LEVELS, &[(308, 68.5), (435, 70.2), (250, 65.8)]),
        job_category_appointment: series(
            &JOB_CATEGORIES,
            &[(120, 65.0), (150, 65.33), (180, 65.0), (100, 65.0), (80, 65.0)],
        ),
        job_category_certification: series(
            &JOB_CATEGORIES,
            &[(84, 70.0), (105, 70.0), (126, 70.0), (70, 70.0), (56, 70.0)],
        ),
    }
}
