//! Summary tables: entry-level managers (PL/TM and PM) and the cadre AI
//! appointment/certification overview.

use serde::{Deserialize, Serialize};

use crate::consolidate::TOTAL_LABELS;
use crate::rate::rate;
use crate::stats::nullable;

// ── Entry-level managers ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlTmPmStatistics {
    #[serde(default, deserialize_with = "nullable")]
    pub total_count: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub qualified_count: u64,
    /// Fraction in `[0, 1]`, not a percentage.
    #[serde(default, deserialize_with = "nullable")]
    pub qualified_ratio: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub cert_count: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub cert_ratio: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlTmDepartmentStatistics {
    #[serde(default, deserialize_with = "nullable")]
    pub dept_code: String,
    #[serde(default, deserialize_with = "nullable")]
    pub dept_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub pl_tm: PlTmPmStatistics,
    #[serde(default, deserialize_with = "nullable")]
    pub pm: PlTmPmStatistics,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlTmCertStatistics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<PlTmDepartmentStatistics>,
    #[serde(default, deserialize_with = "nullable")]
    pub department_list: Vec<PlTmDepartmentStatistics>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryLevelManagerRow {
    pub department: String,
    pub tm_pl_total_count: u64,
    pub tm_pl_ai3_plus_count: u64,
    pub tm_pl_ai3_plus_rate: f64,
    pub tm_pl_professional_cert_count: u64,
    pub tm_pl_professional_cert_rate: f64,
    pub pm_total_count: u64,
    pub pm_ai3_plus_count: u64,
    pub pm_ai3_plus_rate: f64,
    pub pm_professional_cert_count: u64,
    pub pm_professional_cert_rate: f64,
}

impl From<&PlTmDepartmentStatistics> for EntryLevelManagerRow {
    fn from(stat: &PlTmDepartmentStatistics) -> Self {
        let (pl_tm, pm) = (&stat.pl_tm, &stat.pm);
        Self {
            department: stat.dept_name.clone(),
            tm_pl_total_count: pl_tm.total_count,
            tm_pl_ai3_plus_count: pl_tm.qualified_count,
            tm_pl_ai3_plus_rate: rate(pl_tm.total_count, pl_tm.qualified_count),
            tm_pl_professional_cert_count: pl_tm.cert_count,
            tm_pl_professional_cert_rate: rate(pl_tm.total_count, pl_tm.cert_count),
            pm_total_count: pm.total_count,
            pm_ai3_plus_count: pm.qualified_count,
            pm_ai3_plus_rate: rate(pm.total_count, pm.qualified_count),
            pm_professional_cert_count: pm.cert_count,
            pm_professional_cert_rate: rate(pm.total_count, pm.cert_count),
        }
    }
}

/// Summary department first, then the listed departments in order.
pub fn entry_level_manager_rows(stats: &PlTmCertStatistics) -> Vec<EntryLevelManagerRow> {
    stats
        .summary
        .iter()
        .chain(&stats.department_list)
        .map(EntryLevelManagerRow::from)
        .collect()
}

// ── Cadre AI overview ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CadreAiOverviewStatistics {
    #[serde(default, deserialize_with = "nullable")]
    pub dept_code: String,
    #[serde(default, deserialize_with = "nullable")]
    pub dept_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dept_level: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub total_cadre_count: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub l2_l3_count: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub software_l2_count: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub software_l3_count: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub non_software_l2_l3_count: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub meet_requirement_l2_l3_count: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub meet_requirement_l2_l3_rate: f64,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<CadreAiOverviewStatistics>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CadreAiCertificationOverview {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<CadreAiOverviewStatistics>,
    #[serde(default, deserialize_with = "nullable")]
    pub department_list: Vec<CadreAiOverviewStatistics>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CadreAiOverviewRow {
    pub department: String,
    pub total_cadre_count: u64,
    pub l2_l3_count: u64,
    pub software_l2_count: u64,
    pub software_l3_count: u64,
    pub non_software_l2_l3_count: u64,
    pub meet_requirement_l2_l3_count: u64,
    pub meet_requirement_l2_l3_rate: f64,
    pub is_level3: bool,
    pub is_level4: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dept_code: Option<String>,
}

impl CadreAiOverviewRow {
    fn new(department: String, stat: &CadreAiOverviewStatistics) -> Self {
        Self {
            department,
            total_cadre_count: stat.total_cadre_count,
            l2_l3_count: stat.l2_l3_count,
            software_l2_count: stat.software_l2_count,
            software_l3_count: stat.software_l3_count,
            non_software_l2_l3_count: stat.non_software_l2_l3_count,
            meet_requirement_l2_l3_count: stat.meet_requirement_l2_l3_count,
            meet_requirement_l2_l3_rate: rate(stat.l2_l3_count, stat.meet_requirement_l2_l3_count),
            is_level3: false,
            is_level4: false,
            dept_code: Some(stat.dept_code.clone()).filter(|code| !code.is_empty()),
        }
    }
}

/// Summary row first, then each level-3 department followed by its level-4
/// children.
pub fn cadre_ai_overview_rows(overview: &CadreAiCertificationOverview) -> Vec<CadreAiOverviewRow> {
    let mut rows = Vec::new();
    if let Some(summary) = &overview.summary {
        rows.push(CadreAiOverviewRow::new(TOTAL_LABELS[0].to_string(), summary));
    }
    for dept in &overview.department_list {
        rows.push(CadreAiOverviewRow {
            is_level3: true,
            ..CadreAiOverviewRow::new(dept.dept_name.clone(), dept)
        });
        rows.extend(dept.children.iter().map(|child| CadreAiOverviewRow {
            is_level4: true,
            ..CadreAiOverviewRow::new(child.dept_name.clone(), child)
        }));
    }
    rows
}
