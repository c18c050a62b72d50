//! Personal course completion of a single employee.

use aidash_core::course::{CourseCategoryStatistics, CourseItem, PersonalCourseCompletion};

/// Employee number answered when the request names none.
pub const DEFAULT_ACCOUNT: &str = "123456";

struct LevelSeed {
    level: &'static str,
    prefix: &'static str,
    /// Course names, completed ones first.
    courses: &'static [&'static str],
    completed: usize,
}

const LEVELS: &[LevelSeed] = &[
    LevelSeed {
        level: "基础",
        prefix: "COURSE_BASIC",
        courses: &[
            "AI基础概念与原理",
            "机器学习入门",
            "深度学习基础",
            "Python编程基础",
            "数据科学基础",
            "统计学基础",
            "数据可视化",
            "算法与数据结构",
            "自然语言处理入门",
            "计算机视觉入门",
        ],
        completed: 8,
    },
    LevelSeed {
        level: "进阶",
        prefix: "COURSE_INTER",
        courses: &[
            "深度学习进阶",
            "神经网络架构设计",
            "模型训练与优化",
            "迁移学习",
            "强化学习基础",
            "模型部署与工程化",
            "分布式训练",
            "模型压缩与加速",
        ],
        completed: 5,
    },
    LevelSeed {
        level: "高阶",
        prefix: "COURSE_ADV",
        courses: &[
            "大模型原理与应用",
            "Transformer架构深入",
            "多模态学习",
            "生成式AI技术",
            "AI安全与伦理",
            "AI系统架构设计",
        ],
        completed: 3,
    },
    LevelSeed {
        level: "实战",
        prefix: "COURSE_PRAC",
        courses: &[
            "AI项目实战：智能推荐系统",
            "AI项目实战：图像识别系统",
            "AI项目实战：对话系统",
            "AI项目实战：知识图谱构建",
            "AI项目实战：自动化运维",
        ],
        completed: 2,
    },
];

fn level(seed: &LevelSeed) -> CourseCategoryStatistics {
    let course_list = seed
        .courses
        .iter()
        .enumerate()
        .map(|(i, name)| CourseItem {
            course_name: name.to_string(),
            course_number: format!("{}_{:03}", seed.prefix, i + 1),
            is_completed: i < seed.completed,
        })
        .collect();
    let total = seed.courses.len() as u64;
    let mut stats = CourseCategoryStatistics {
        course_level: seed.level.to_string(),
        total_courses: total,
        target_courses: total,
        completed_courses: seed.completed as u64,
        completion_rate: 0.0,
        course_list,
    };
    stats.recompute_rate();
    stats
}

/// Course completion for `account`, blank meaning [`DEFAULT_ACCOUNT`].
pub fn personal_course_completion(account: &str) -> PersonalCourseCompletion {
    let account = match account.trim() {
        "" => DEFAULT_ACCOUNT,
        account => account,
    };
    PersonalCourseCompletion {
        emp_num: account.to_string(),
        emp_name: "张三".to_string(),
        course_statistics: LEVELS.iter().map(level).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_match_their_course_lists() {
        let completion = personal_course_completion("");
        assert_eq!(completion.emp_num, DEFAULT_ACCOUNT);

        let summary: Vec<_> = completion
            .course_statistics
            .iter()
            .map(|level| {
                (
                    level.course_level.as_str(),
                    level.total_courses,
                    level.completed_courses,
                    level.completion_rate,
                )
            })
            .collect();
        assert_eq!(
            summary,
            [
                ("基础", 10, 8, 80.0),
                ("进阶", 8, 5, 62.5),
                ("高阶", 6, 3, 50.0),
                ("实战", 5, 2, 40.0),
            ]
        );
        for level in &completion.course_statistics {
            let done = level.course_list.iter().filter(|c| c.is_completed).count();
            assert_eq!(done as u64, level.completed_courses);
        }
    }

    #[test]
    fn course_numbers_are_sequential_per_level() {
        let completion = personal_course_completion(" 654321 ");
        assert_eq!(completion.emp_num, "654321");
        let practice = &completion.course_statistics[3].course_list;
        assert_eq!(practice[0].course_number, "COURSE_PRAC_001");
        assert_eq!(practice[4].course_number, "COURSE_PRAC_005");
        assert!(!practice[4].is_completed);
    }
}
