use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// 等级制评语
///
/// 始终由数字分数派生，不允许独立赋值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterGrade {
    Emerging,
    Developing,
    Proficient,
    Extending,
}

impl LetterGrade {
    /// 分数到等级的换算（各档下界包含在本档内）
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 90 => LetterGrade::Extending,
            s if s >= 80 => LetterGrade::Proficient,
            s if s >= 65 => LetterGrade::Developing,
            _ => LetterGrade::Emerging,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::Emerging => "Emerging",
            LetterGrade::Developing => "Developing",
            LetterGrade::Proficient => "Proficient",
            LetterGrade::Extending => "Extending",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 评分
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    // 总分，0-100，未评分时为空
    pub score: Option<i32>,
    // 由 score 派生的等级
    pub letter_grade: Option<LetterGrade>,
    // 各项评分维度的分数，键集合由作业定义
    #[serde(default)]
    pub rubric_scores: BTreeMap<String, Option<i32>>,
    // 评语（富文本）
    #[serde(default)]
    pub feedback: String,
    // 评分者 ID
    pub graded_by: Option<i64>,
    // 评分时间
    pub graded_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_grade_boundaries() {
        // 每档边界逐一验证
        assert_eq!(LetterGrade::from_score(0), LetterGrade::Emerging);
        assert_eq!(LetterGrade::from_score(64), LetterGrade::Emerging);
        assert_eq!(LetterGrade::from_score(65), LetterGrade::Developing);
        assert_eq!(LetterGrade::from_score(79), LetterGrade::Developing);
        assert_eq!(LetterGrade::from_score(80), LetterGrade::Proficient);
        assert_eq!(LetterGrade::from_score(89), LetterGrade::Proficient);
        assert_eq!(LetterGrade::from_score(90), LetterGrade::Extending);
        assert_eq!(LetterGrade::from_score(100), LetterGrade::Extending);
    }

    #[test]
    fn test_letter_grade_total_over_range() {
        // [0, 100] 内每个整数都必须落在且仅落在一个档位
        for s in 0..=100 {
            let expected = if s >= 90 {
                LetterGrade::Extending
            } else if s >= 80 {
                LetterGrade::Proficient
            } else if s >= 65 {
                LetterGrade::Developing
            } else {
                LetterGrade::Emerging
            };
            assert_eq!(LetterGrade::from_score(s), expected, "score {s}");
        }
    }

    #[test]
    fn test_letter_grade_wire_format() {
        let json = serde_json::to_string(&LetterGrade::Proficient).unwrap();
        assert_eq!(json, "\"Proficient\"");
        let parsed: LetterGrade = serde_json::from_str("\"Extending\"").unwrap();
        assert_eq!(parsed, LetterGrade::Extending);
    }

    #[test]
    fn test_grade_deserialize_camel_case() {
        let json = r#"{
            "score": 85,
            "letterGrade": "Proficient",
            "rubricScores": {"communication": 90, "critical-thinking": null},
            "feedback": "<p>Well done</p>",
            "gradedBy": 7,
            "gradedAt": "2025-03-14T09:26:53Z"
        }"#;
        let grade: Grade = serde_json::from_str(json).unwrap();
        assert_eq!(grade.score, Some(85));
        assert_eq!(grade.letter_grade, Some(LetterGrade::Proficient));
        assert_eq!(grade.rubric_scores.get("communication"), Some(&Some(90)));
        assert_eq!(grade.rubric_scores.get("critical-thinking"), Some(&None));
        assert_eq!(grade.graded_by, Some(7));
    }
}
