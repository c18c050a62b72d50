use aidash_core::{DepartmentInfo, ROOT_DEPT_CODE};

pub struct Department {
    pub code: &'static str,
    pub name: &'static str,
    pub level: &'static str,
    pub parent: Option<&'static str>,
}

const fn dept(
    code: &'static str,
    name: &'static str,
    level: &'static str,
    parent: Option<&'static str>,
) -> Department {
    Department {
        code,
        name,
        level,
        parent,
    }
}

pub const DEPARTMENTS: &[Department] = &[
    dept(ROOT_DEPT_CODE, "云核心网产品线", "2", None),
    dept("dept-ict-core-ops", "云核心网运营部", "3", Some(ROOT_DEPT_CODE)),
    dept("dept-ict-core-dev", "云核心网研发部", "3", Some(ROOT_DEPT_CODE)),
    dept("dept-ict-core-solution", "云核心网解决方案部", "3", Some(ROOT_DEPT_CODE)),
    dept("dept-ict-core-ops-apac", "亚太运营支撑处", "4", Some("dept-ict-core-ops")),
    dept("dept-ict-core-ops-emea", "欧洲中东非运营支撑处", "4", Some("dept-ict-core-ops")),
    dept("dept-ict-core-dev-cloud", "网络云平台研发室", "4", Some("dept-ict-core-dev")),
    dept("dept-ict-core-dev-ai", "AI 网络创新室", "4", Some("dept-ict-core-dev")),
    dept("dept-ict-core-solution-5g", "5G 解决方案办", "4", Some("dept-ict-core-solution")),
    dept("dept-ict-core-solution-cloud", "云化核心网方案办", "4", Some("dept-ict-core-solution")),
];

pub fn find(code: &str) -> Option<&'static Department> {
    DEPARTMENTS.iter().find(|dept| dept.code == code)
}

/// Direct children of `dept_id`, in declaration order. Unknown ids have none.
pub fn children(dept_id: &str) -> Vec<DepartmentInfo> {
    let parent = super::normalize_dept(dept_id);
    DEPARTMENTS
        .iter()
        .filter(|dept| dept.parent == Some(parent))
        .map(|dept| DepartmentInfo {
            dept_code: dept.code.to_string(),
            dept_name: dept.name.to_string(),
            dept_level: dept.level.to_string(),
            parent_dept_code: dept.parent.map(str::to_string),
            children: Vec::new(),
        })
        .collect()
}
