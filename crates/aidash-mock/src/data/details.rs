//! Employee drill-down records.

use aidash_core::detail::{EmployeeDetail, EmployeeDrillDown, MaturityFilter, QueryType};
use aidash_core::{ROOT_DEPT_CODE, Role};

use super::dept_name;

struct Seed {
    name: &'static str,
    number: &'static str,
    category: &'static str,
    subcategory: &'static str,
    depts: [&'static str; 3],
    maturity: &'static str,
    subcategory_cn: &'static str,
    rating: &'static str,
    grade: &'static str,
    from: &'static str,
    qualified: bool,
    cert_standard: bool,
}

const SEEDS: &[Seed] = &[
    Seed {
        name: "张三",
        number: "E001234",
        category: "管理类",
        subcategory: "管理",
        depts: ["云核心网运营部", "亚太运营支撑处", "技术支撑组"],
        maturity: "L2",
        subcategory_cn: "机器学习子类",
        rating: "高级",
        grade: "P5",
        from: "2023-01-01T00:00:00Z",
        qualified: true,
        cert_standard: true,
    },
    Seed {
        name: "李四",
        number: "E001235",
        category: "管理类",
        subcategory: "管理",
        depts: ["云核心网运营部", "亚太运营支撑处", "技术支撑组"],
        maturity: "L3",
        subcategory_cn: "深度学习子类",
        rating: "专家",
        grade: "P6",
        from: "2022-06-15T00:00:00Z",
        qualified: true,
        cert_standard: false,
    },
    Seed {
        name: "王五",
        number: "E001236",
        category: "软件类",
        subcategory: "软件开发",
        depts: ["云核心网研发部", "网络云平台研发室", "AI平台组"],
        maturity: "L2",
        subcategory_cn: "自然语言处理子类",
        rating: "中级",
        grade: "P4",
        from: "2023-03-20T00:00:00Z",
        qualified: false,
        cert_standard: false,
    },
    Seed {
        name: "赵六",
        number: "E001237",
        category: "软件类",
        subcategory: "软件开发",
        depts: ["云核心网研发部", "AI 网络创新室", "视觉算法组"],
        maturity: "L3",
        subcategory_cn: "计算机视觉子类",
        rating: "高级",
        grade: "P5",
        from: "2022-11-10T00:00:00Z",
        qualified: true,
        cert_standard: true,
    },
    Seed {
        name: "孙七",
        number: "E001238",
        category: "系统类",
        subcategory: "系统架构",
        depts: ["云核心网解决方案部", "5G 解决方案办", "智能优化组"],
        maturity: "L4",
        subcategory_cn: "强化学习子类",
        rating: "专家",
        grade: "P6",
        from: "2021-09-01T00:00:00Z",
        qualified: true,
        cert_standard: true,
    },
    Seed {
        name: "周八",
        number: "E001239",
        category: "研究类",
        subcategory: "算法研究",
        depts: ["云核心网解决方案部", "云化核心网方案办", "知识工程组"],
        maturity: "L2",
        subcategory_cn: "知识图谱子类",
        rating: "中级",
        grade: "P4",
        from: "2023-05-15T00:00:00Z",
        qualified: true,
        cert_standard: false,
    },
    Seed {
        name: "吴九",
        number: "E001240",
        category: "研究类",
        subcategory: "算法研究",
        depts: ["云核心网运营部", "欧洲中东非运营支撑处", "智能推荐组"],
        maturity: "L3",
        subcategory_cn: "推荐系统子类",
        rating: "高级",
        grade: "P5",
        from: "2022-08-20T00:00:00Z",
        qualified: false,
        cert_standard: false,
    },
    Seed {
        name: "郑十",
        number: "E001241",
        category: "系统类",
        subcategory: "系统架构",
        depts: ["云核心网研发部", "网络云平台研发室", "语音技术组"],
        maturity: "L4",
        subcategory_cn: "语音识别子类",
        rating: "专家",
        grade: "P6",
        from: "2021-12-01T00:00:00Z",
        qualified: true,
        cert_standard: true,
    },
];

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

impl Seed {
    fn detail(&self) -> EmployeeDetail {
        let [first, second, third] = self.depts;
        EmployeeDetail {
            name: some(self.name),
            employee_number: some(self.number),
            competence_category: some(self.category),
            competence_subcategory: some(self.subcategory),
            first_level_dept: some(first),
            second_level_dept: some(second),
            third_level_dept: some(third),
            ai_maturity: some(self.maturity),
            mini_dept_name: some(third),
            cadre_type: some("技术干部"),
            is_cadre: Some(1),
            competence_family_cn: some("AI能力族"),
            competence_category_cn: some("AI能力类"),
            competence_subcategory_cn: some(self.subcategory_cn),
            direction_cn_name: some("AI方向"),
            competence_rating_cn: some(self.rating),
            competence_grade_cn: some(self.grade),
            competence_from: some(self.from),
            is_qualifications_standard: Some(i64::from(self.qualified)),
            is_cert_standard: Some(i64::from(self.cert_standard)),
            ..Default::default()
        }
    }

    /// Root matches everyone; otherwise the code, or the department's name,
    /// must appear in one of the first three department levels.
    fn in_department(&self, dept_code: &str) -> bool {
        if dept_code == ROOT_DEPT_CODE {
            return true;
        }
        let name = dept_name(dept_code);
        self.depts
            .iter()
            .any(|dept| dept.contains(dept_code) || dept.contains(name.as_str()))
    }
}

/// Filtered drill-down. Only cadres are returned for [`Role::Cadre`];
/// [`QueryType::Appointed`] keeps employees meeting the appointment standard.
pub fn qualified_details(
    dept_code: &str,
    maturity: MaturityFilter,
    job_category: Option<&str>,
    person_type: Role,
    query_type: QueryType,
) -> EmployeeDrillDown {
    let job_category = job_category.map(str::trim).filter(|c| !c.is_empty());
    let employee_details = SEEDS
        .iter()
        .filter(|seed| seed.in_department(dept_code))
        .filter(|seed| maturity.matches(seed.maturity))
        .filter(|seed| job_category.is_none_or(|category| seed.category == category))
        .filter(|seed| query_type == QueryType::Baseline || seed.qualified)
        .map(Seed::detail)
        .filter(|detail| person_type != Role::Cadre || detail.is_cadre == Some(1))
        .collect();
    EmployeeDrillDown { employee_details }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(drill_down: &EmployeeDrillDown) -> Vec<&str> {
        drill_down
            .employee_details
            .iter()
            .filter_map(|d| d.name.as_deref())
            .collect()
    }

    #[test]
    fn baseline_at_root_returns_everyone() {
        let all = qualified_details("0", MaturityFilter::All, None, Role::Cadre, QueryType::Baseline);
        assert_eq!(all.employee_details.len(), 8);
    }

    #[test]
    fn appointed_keeps_qualified_only() {
        let appointed =
            qualified_details("0", MaturityFilter::All, None, Role::Cadre, QueryType::Appointed);
        assert_eq!(appointed.employee_details.len(), 6);
        assert!(
            appointed
                .employee_details
                .iter()
                .all(|d| d.is_qualifications_standard == Some(1))
        );
    }

    #[test]
    fn l5_combines_l2_and_l3() {
        let details =
            qualified_details("0", MaturityFilter::L5, None, Role::Cadre, QueryType::Baseline);
        assert_eq!(details.employee_details.len(), 6);
        assert!(
            details
                .employee_details
                .iter()
                .all(|d| matches!(d.ai_maturity.as_deref(), Some("L2" | "L3")))
        );
    }

    #[test]
    fn department_and_category_filters() {
        let details = qualified_details(
            "dept-ict-core-dev",
            MaturityFilter::All,
            Some("软件类"),
            Role::Cadre,
            QueryType::Baseline,
        );
        assert_eq!(names(&details), ["王五", "赵六"]);

        let by_name = qualified_details(
            "技术支撑组",
            MaturityFilter::L3,
            None,
            Role::Expert,
            QueryType::Appointed,
        );
        assert_eq!(names(&by_name), ["李四"]);
    }
}
