//! Department hierarchy and the tree-select nodes built from it.

use serde::{Deserialize, Serialize};

use crate::chart::resolve_label;
use crate::stats::nullable;

/// Code of the virtual root department ("all departments").
pub const ROOT_DEPT_CODE: &str = "0";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentInfo {
    #[serde(default, deserialize_with = "nullable")]
    pub dept_code: String,
    #[serde(default, deserialize_with = "nullable")]
    pub dept_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub dept_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_dept_code: Option<String>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<DepartmentInfo>,
}

/// One node of the department tree-select.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentNode {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DepartmentNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl From<&DepartmentInfo> for DepartmentNode {
    fn from(info: &DepartmentInfo) -> Self {
        department_node(info, &info.children)
    }
}

/// Build a node for `info` with `children` as its subtree.
///
/// Nodes without children carry `children: None` so the tree-select shows
/// them as leaves.
pub fn department_node(info: &DepartmentInfo, children: &[DepartmentInfo]) -> DepartmentNode {
    let children: Vec<DepartmentNode> = children.iter().map(DepartmentNode::from).collect();
    DepartmentNode {
        label: resolve_label(&info.dept_name, Some(&info.dept_code)),
        value: info.dept_code.clone(),
        children: (!children.is_empty()).then_some(children),
        disabled: None,
    }
}
