//! Personal course completion: one employee's courses grouped by level.

use serde::{Deserialize, Serialize};

use crate::rate::rate;
use crate::stats::nullable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseItem {
    #[serde(default, deserialize_with = "nullable")]
    pub course_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub course_number: String,
    #[serde(default, deserialize_with = "nullable")]
    pub is_completed: bool,
}

/// Courses of one level (基础, 进阶, 高阶, 实战).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCategoryStatistics {
    #[serde(default, deserialize_with = "nullable")]
    pub course_level: String,
    #[serde(default, deserialize_with = "nullable")]
    pub total_courses: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub target_courses: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub completed_courses: u64,
    /// Percentage of the target completed.
    #[serde(default, deserialize_with = "nullable")]
    pub completion_rate: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub course_list: Vec<CourseItem>,
}

impl CourseCategoryStatistics {
    pub fn recompute_rate(&mut self) {
        self.completion_rate = rate(self.target_courses, self.completed_courses);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalCourseCompletion {
    #[serde(default, deserialize_with = "nullable")]
    pub emp_num: String,
    #[serde(default, deserialize_with = "nullable")]
    pub emp_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub course_statistics: Vec<CourseCategoryStatistics>,
}

impl PersonalCourseCompletion {
    /// Replace every level's reported rate with one derived from its counts.
    pub fn recompute_rates(&mut self) {
        for level in &mut self.course_statistics {
            level.recompute_rate();
        }
    }

    /// Completed and target courses summed over every level.
    pub fn totals(&self) -> (u64, u64) {
        self.course_statistics
            .iter()
            .fold((0, 0), |(completed, target), level| {
                (completed + level.completed_courses, target + level.target_courses)
            })
    }

    pub fn overall_rate(&self) -> f64 {
        let (completed, target) = self.totals();
        rate(target, completed)
    }
}
