//! Plain-text rendering of dashboard views.
//!
//! Every renderer returns a `String` so the layout can be checked without a
//! terminal. Columns are padded by character count, so wide CJK glyphs can
//! push a row slightly out of line.

use std::fmt::Write;

use aidash_core::chart::ChartPoint;
use aidash_core::course::PersonalCourseCompletion;
use aidash_core::flatten::{
    CadreAppointmentRow, CadreCertificationRow, ExpertAppointmentRow, ExpertCertificationRow,
};
use aidash_core::overview::{CadreAiOverviewRow, EntryLevelManagerRow};
use aidash_core::view::{AllStaffCharts, MetricItem, SelectOption};
use aidash_core::{CertificationDashboard, DepartmentNode, DetailView, FilterOptions};

const MAX_RECORDS: usize = 50;

// ── Public API ──

pub fn render_dashboard(view: &CertificationDashboard) -> String {
    let mut out = String::new();
    out.push_str(&render_metrics(&view.metrics));

    section(&mut out, "Expert certification");
    out.push_str(&expert_certification(&view.tables.expert_certification));
    section(&mut out, "Expert appointment");
    out.push_str(&expert_appointment(&view.tables.expert_appointment));
    section(&mut out, "Cadre certification");
    out.push_str(&cadre_certification(&view.tables.cadre_certification));
    section(&mut out, "Cadre appointment");
    out.push_str(&cadre_appointment(&view.tables.cadre_appointment));

    let charts = &view.all_staff;
    section(&mut out, "Departments (certification)");
    out.push_str(&chart(&charts.department_certification));
    section(&mut out, "Organization (appointment)");
    out.push_str(&chart(&charts.organization_appointment));
    section(&mut out, "Job categories (certification)");
    out.push_str(&chart(&charts.job_category_certification));
    out
}

/// All six series, appointment before certification.
pub fn render_trends(charts: &AllStaffCharts) -> String {
    let series = [
        ("Departments (appointment)", &charts.department_appointment),
        ("Departments (certification)", &charts.department_certification),
        ("Organization (appointment)", &charts.organization_appointment),
        ("Organization (certification)", &charts.organization_certification),
        ("Job categories (appointment)", &charts.job_category_appointment),
        ("Job categories (certification)", &charts.job_category_certification),
    ];
    let mut out = String::new();
    for (title, points) in series {
        section(&mut out, title);
        out.push_str(&chart(points));
    }
    out
}

/// Per-level summary followed by each level's outstanding courses.
pub fn render_courses(completion: &PersonalCourseCompletion) -> String {
    let (completed, target) = completion.totals();
    let mut out = format!(
        "{} ({})  {completed}/{target} courses  {}\n",
        completion.emp_name,
        completion.emp_num,
        percent(completion.overall_rate())
    );

    let rows = completion
        .course_statistics
        .iter()
        .map(|level| {
            vec![
                level.course_level.clone(),
                level.total_courses.to_string(),
                level.target_courses.to_string(),
                level.completed_courses.to_string(),
                percent(level.completion_rate),
            ]
        })
        .collect();
    out.push_str(&table(&["Level", "Total", "Target", "Completed", "Rate"], rows));

    for level in &completion.course_statistics {
        let pending: Vec<_> = level
            .course_list
            .iter()
            .filter(|course| !course.is_completed)
            .collect();
        if pending.is_empty() {
            continue;
        }
        section(&mut out, &format!("Pending ({})", level.course_level));
        for course in pending {
            let _ = writeln!(out, "  {}  {}", course.course_number, course.course_name);
        }
    }
    out
}

pub fn render_metrics(metrics: &[MetricItem]) -> String {
    let mut out = String::new();
    for metric in metrics {
        let value = match metric.unit.as_deref() {
            Some("%") => percent(metric.value),
            Some(unit) => format!("{} {unit}", metric.value),
            None => format!("{}", metric.value),
        };
        let _ = writeln!(out, "  {:<12} {}", metric.title, value);
    }
    out
}

pub fn render_filters(options: &FilterOptions) -> String {
    let mut out = String::new();
    section(&mut out, "Departments");
    out.push_str(&render_tree(&options.department_tree));
    section(&mut out, "Roles");
    out.push_str(&select_options(&options.roles));
    section(&mut out, "Maturity");
    out.push_str(&select_options(&options.maturity_options));
    out
}

/// Indented department tree, one node per line.
pub fn render_tree(nodes: &[DepartmentNode]) -> String {
    let mut out = String::new();
    write_tree(&mut out, nodes, 1);
    out
}

pub fn render_details(view: &DetailView) -> String {
    let filters = &view.filters;
    let mut out = format!(
        "dept {}  maturity {}  role {}  query {}\n",
        filters.dept_code, filters.maturity, filters.person_type, filters.query_type
    );
    if view.records.is_empty() {
        out.push_str("  (no records)\n");
        return out;
    }

    let rows = view
        .records
        .iter()
        .take(MAX_RECORDS)
        .map(|record| {
            vec![
                record.name.clone(),
                record.employee_id.clone(),
                record.department_level2.clone(),
                record.position_maturity.clone().unwrap_or_default(),
                record.professional_category.clone(),
                record.qualification_level.clone(),
                record.effective_date.clone(),
            ]
        })
        .collect();
    out.push_str(&table(
        &["Name", "ID", "Department", "Maturity", "Category", "Level", "Since"],
        rows,
    ));
    if view.records.len() > MAX_RECORDS {
        let _ = writeln!(out, "  ... and {} more", view.records.len() - MAX_RECORDS);
    }
    out
}

pub fn render_managers(rows: &[EntryLevelManagerRow]) -> String {
    let rows = rows
        .iter()
        .map(|row| {
            vec![
                row.department.clone(),
                row.tm_pl_total_count.to_string(),
                row.tm_pl_ai3_plus_count.to_string(),
                percent(row.tm_pl_ai3_plus_rate),
                row.tm_pl_professional_cert_count.to_string(),
                percent(row.tm_pl_professional_cert_rate),
                row.pm_total_count.to_string(),
                row.pm_ai3_plus_count.to_string(),
                percent(row.pm_ai3_plus_rate),
                row.pm_professional_cert_count.to_string(),
                percent(row.pm_professional_cert_rate),
            ]
        })
        .collect();
    table(
        &[
            "Department",
            "TM/PL",
            "AI3+",
            "Rate",
            "Cert",
            "Rate",
            "PM",
            "AI3+",
            "Rate",
            "Cert",
            "Rate",
        ],
        rows,
    )
}

pub fn render_cadre_overview(rows: &[CadreAiOverviewRow]) -> String {
    let rows = rows
        .iter()
        .map(|row| {
            let department = if row.is_level4 {
                format!("  {}", row.department)
            } else {
                row.department.clone()
            };
            vec![
                department,
                row.total_cadre_count.to_string(),
                row.l2_l3_count.to_string(),
                row.software_l2_count.to_string(),
                row.software_l3_count.to_string(),
                row.non_software_l2_l3_count.to_string(),
                row.meet_requirement_l2_l3_count.to_string(),
                percent(row.meet_requirement_l2_l3_rate),
            ]
        })
        .collect();
    table(
        &[
            "Department",
            "Cadres",
            "L2/L3",
            "SW L2",
            "SW L3",
            "Non-SW",
            "Meets",
            "Rate",
        ],
        rows,
    )
}

// ── Tables ──

fn expert_certification(rows: &[ExpertCertificationRow]) -> String {
    let rows = rows
        .iter()
        .map(|row| {
            vec![
                row.maturity_level.clone(),
                row.job_category.clone(),
                row.baseline.to_string(),
                row.certified.to_string(),
                percent(row.certification_rate),
            ]
        })
        .collect();
    table(&["Maturity", "Category", "Baseline", "Certified", "Rate"], rows)
}

fn expert_appointment(rows: &[ExpertAppointmentRow]) -> String {
    let rows = rows
        .iter()
        .map(|row| {
            vec![
                row.maturity_level.clone(),
                row.job_category.clone(),
                row.baseline.to_string(),
                row.appointed.to_string(),
                row.appointed_by_requirement.to_string(),
                percent(row.appointment_rate),
                percent(row.certification_compliance),
            ]
        })
        .collect();
    table(
        &["Maturity", "Category", "Baseline", "Appointed", "By req.", "Rate", "Compliance"],
        rows,
    )
}

fn cadre_certification(rows: &[CadreCertificationRow]) -> String {
    let rows = rows
        .iter()
        .map(|row| {
            vec![
                row.maturity_level.clone(),
                row.job_category.clone(),
                row.baseline.to_string(),
                row.ai_certificate_holders.to_string(),
                row.subject_two_passed.to_string(),
                percent(row.certificate_rate),
                percent(row.subject_two_rate),
                row.compliance_rate.map(percent).unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();
    table(
        &[
            "Maturity",
            "Category",
            "Baseline",
            "Certified",
            "Subject 2",
            "Rate",
            "S2 rate",
            "Compliance",
        ],
        rows,
    )
}

fn cadre_appointment(rows: &[CadreAppointmentRow]) -> String {
    let rows = rows
        .iter()
        .map(|row| {
            vec![
                row.maturity_level.clone(),
                row.job_category.clone(),
                row.baseline.to_string(),
                row.appointed.to_string(),
                row.appointed_by_requirement.to_string(),
                percent(row.appointment_rate),
                percent(row.certification_compliance),
            ]
        })
        .collect();
    table(
        &["Maturity", "Category", "Baseline", "Appointed", "By req.", "Rate", "Compliance"],
        rows,
    )
}

fn chart(points: &[ChartPoint]) -> String {
    let rows = points
        .iter()
        .map(|point| vec![point.label.clone(), point.count.to_string(), percent(point.rate)])
        .collect();
    table(&["Label", "Count", "Rate"], rows)
}

// ── Helpers ──

fn section(out: &mut String, title: &str) {
    let _ = write!(out, "\n{title}\n");
}

fn percent(rate: f64) -> String {
    format!("{rate:.2}%")
}

fn select_options(options: &[SelectOption]) -> String {
    let mut out = String::new();
    for option in options {
        let _ = writeln!(out, "  {:<6} {}", option.value, option.label);
    }
    out
}

fn write_tree(out: &mut String, nodes: &[DepartmentNode], depth: usize) {
    for node in nodes {
        let _ = writeln!(out, "{}{} ({})", "  ".repeat(depth), node.label, node.value);
        if let Some(children) = &node.children {
            write_tree(out, children, depth + 1);
        }
    }
}

/// Left-aligned table with a dashed rule under the header.
fn table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    if rows.is_empty() {
        return "  (no data)\n".to_string();
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    write_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    write_row(&mut out, &rule, &widths);
    for row in &rows {
        write_row(&mut out, row, &widths);
    }
    out
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push(' ');
    for (cell, &width) in cells.iter().zip(widths) {
        let pad = width - cell.chars().count();
        let _ = write!(out, " {cell}{}", " ".repeat(pad));
    }
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
    out.push('\n');
}
