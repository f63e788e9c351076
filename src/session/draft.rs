//! 评分草稿
//!
//! 选中提交时从其已有评分初始化；切换提交时整体丢弃，
//! 保存成功后用服务端返回的评分重建。

use std::collections::BTreeMap;

use crate::errors::{GradeFlowError, Result};
use crate::models::grades::entities::{Grade, LetterGrade};
use crate::models::grades::requests::UpdateGradeRequest;
use crate::models::homeworks::entities::RubricCompetency;
use crate::models::submissions::entities::SubmissionStatus;
use crate::utils::validate::parse_score_input;

/// 参与校验的字段
///
/// 强类型键，总分和各评分维度各占一个独立的错误槽位。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum GradeField {
    Score,
    Competency(String),
}

/// 单个分数输入框的状态
#[derive(Debug, Clone, Default)]
pub struct ScoreInput {
    // 原始输入文本，无效时保留用于回显
    raw: String,
    // 最近一次通过校验的值
    value: Option<i32>,
    error: Option<&'static str>,
}

impl ScoreInput {
    fn from_value(value: Option<i32>) -> Self {
        Self {
            raw: value.map(|v| v.to_string()).unwrap_or_default(),
            value,
            error: None,
        }
    }

    /// 接收一次原始输入
    ///
    /// 无效输入保留原文回显并记录错误，同时保持上一次的有效值不变；
    /// 有效输入更新值并清除错误。
    fn set(&mut self, raw: &str) {
        self.raw = raw.to_string();
        match parse_score_input(raw) {
            Ok(value) => {
                self.value = value;
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> Option<i32> {
        self.value
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }
}

/// 评分草稿
#[derive(Debug, Clone)]
pub struct GradeDraft {
    score: ScoreInput,
    // 键集合在初始化时由作业的评分维度固定
    rubric_scores: BTreeMap<String, ScoreInput>,
    feedback: String,
}

impl GradeDraft {
    pub fn new(rubric: &[RubricCompetency], grade: Option<&Grade>) -> Self {
        let score = ScoreInput::from_value(grade.and_then(|g| g.score));

        let mut rubric_scores = BTreeMap::new();
        for competency in rubric {
            let value = grade.and_then(|g| g.rubric_scores.get(&competency.key).copied().flatten());
            rubric_scores.insert(competency.key.clone(), ScoreInput::from_value(value));
        }

        let feedback = grade.map(|g| g.feedback.clone()).unwrap_or_default();

        Self {
            score,
            rubric_scores,
            feedback,
        }
    }

    pub fn update_score(&mut self, raw: &str) {
        self.score.set(raw);
    }

    pub fn update_rubric_score(&mut self, key: &str, raw: &str) -> Result<()> {
        match self.rubric_scores.get_mut(key) {
            Some(input) => {
                input.set(raw);
                Ok(())
            }
            // 键集合固定，未知维度直接拒绝而不是悄悄新建槽位
            None => Err(GradeFlowError::validation(format!(
                "Unknown rubric competency: {key}"
            ))),
        }
    }

    pub fn update_feedback(&mut self, html: impl Into<String>) {
        self.feedback = html.into();
    }

    /// 等级始终由当前有效总分派生，从不独立存储
    pub fn letter_grade(&self) -> Option<LetterGrade> {
        self.score.value().map(LetterGrade::from_score)
    }

    pub fn score(&self) -> &ScoreInput {
        &self.score
    }

    pub fn rubric_score(&self, key: &str) -> Option<&ScoreInput> {
        self.rubric_scores.get(key)
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// 当前所有字段的校验错误
    pub fn validation_errors(&self) -> BTreeMap<GradeField, &'static str> {
        let mut errors = BTreeMap::new();
        if let Some(message) = self.score.error() {
            errors.insert(GradeField::Score, message);
        }
        for (key, input) in &self.rubric_scores {
            if let Some(message) = input.error() {
                errors.insert(GradeField::Competency(key.clone()), message);
            }
        }
        errors
    }

    pub fn has_errors(&self) -> bool {
        self.score.error().is_some()
            || self.rubric_scores.values().any(|input| input.error().is_some())
    }

    /// 组装保存载荷，未填写的数字项序列化为 null
    pub fn to_update_request(
        &self,
        graded_by: i64,
        graded_at: chrono::DateTime<chrono::Utc>,
    ) -> UpdateGradeRequest {
        UpdateGradeRequest {
            score: self.score.value(),
            rubric_scores: self
                .rubric_scores
                .iter()
                .map(|(key, input)| (key.clone(), input.value()))
                .collect(),
            letter_grade: self.letter_grade(),
            feedback: self.feedback.clone(),
            graded_by,
            graded_at,
            submission_status: SubmissionStatus::Graded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validate::SCORE_RANGE_MESSAGE;

    fn rubric() -> Vec<RubricCompetency> {
        vec![
            RubricCompetency {
                key: "communication".to_string(),
                title: "Communication".to_string(),
                description: None,
            },
            RubricCompetency {
                key: "critical-thinking".to_string(),
                title: "Critical Thinking".to_string(),
                description: Some("Reasoning quality".to_string()),
            },
        ]
    }

    fn graded() -> Grade {
        let mut rubric_scores = BTreeMap::new();
        rubric_scores.insert("communication".to_string(), Some(70));
        Grade {
            score: Some(85),
            letter_grade: Some(LetterGrade::Proficient),
            rubric_scores,
            feedback: "<p>Good work</p>".to_string(),
            graded_by: Some(3),
            graded_at: Some(chrono::Utc::now()),
        }
    }

    #[test]
    fn test_empty_draft_for_ungraded_submission() {
        let draft = GradeDraft::new(&rubric(), None);
        assert_eq!(draft.score().raw(), "");
        assert_eq!(draft.score().value(), None);
        assert_eq!(draft.letter_grade(), None);
        assert_eq!(draft.rubric_score("communication").unwrap().value(), None);
        assert_eq!(draft.feedback(), "");
        assert!(!draft.has_errors());
    }

    #[test]
    fn test_draft_initialized_from_existing_grade() {
        let grade = graded();
        let draft = GradeDraft::new(&rubric(), Some(&grade));
        assert_eq!(draft.score().value(), Some(85));
        assert_eq!(draft.score().raw(), "85");
        assert_eq!(draft.letter_grade(), Some(LetterGrade::Proficient));
        assert_eq!(draft.rubric_score("communication").unwrap().value(), Some(70));
        assert_eq!(draft.rubric_score("critical-thinking").unwrap().value(), None);
        assert_eq!(draft.feedback(), "<p>Good work</p>");
    }

    #[test]
    fn test_valid_score_updates_letter_grade() {
        let mut draft = GradeDraft::new(&rubric(), None);
        draft.update_score("92");
        assert_eq!(draft.score().value(), Some(92));
        assert_eq!(draft.letter_grade(), Some(LetterGrade::Extending));

        draft.update_score("64");
        assert_eq!(draft.letter_grade(), Some(LetterGrade::Emerging));
    }

    #[test]
    fn test_empty_input_unsets_score() {
        let grade = graded();
        let mut draft = GradeDraft::new(&rubric(), Some(&grade));
        draft.update_score("");
        assert_eq!(draft.score().value(), None);
        assert_eq!(draft.letter_grade(), None);
        assert!(!draft.has_errors());
    }

    #[test]
    fn test_invalid_score_keeps_previous_value_and_raw_text() {
        let mut draft = GradeDraft::new(&rubric(), None);
        draft.update_score("85");
        draft.update_score("150");

        // 无效输入：保留原文回显，有效值与派生等级保持不变
        assert_eq!(draft.score().raw(), "150");
        assert_eq!(draft.score().value(), Some(85));
        assert_eq!(draft.letter_grade(), Some(LetterGrade::Proficient));
        assert_eq!(draft.score().error(), Some(SCORE_RANGE_MESSAGE));
        assert!(draft.has_errors());
        assert_eq!(
            draft.validation_errors().get(&GradeField::Score),
            Some(&SCORE_RANGE_MESSAGE)
        );
    }

    #[test]
    fn test_correction_clears_error() {
        let mut draft = GradeDraft::new(&rubric(), None);
        draft.update_score("abc");
        assert!(draft.has_errors());

        draft.update_score("77");
        assert!(!draft.has_errors());
        assert_eq!(draft.score().value(), Some(77));
        assert_eq!(draft.letter_grade(), Some(LetterGrade::Developing));
    }

    #[test]
    fn test_rubric_errors_are_per_key() {
        let mut draft = GradeDraft::new(&rubric(), None);
        draft.update_rubric_score("communication", "150").unwrap();
        draft.update_rubric_score("critical-thinking", "90").unwrap();

        let errors = draft.validation_errors();
        assert_eq!(
            errors.get(&GradeField::Competency("communication".to_string())),
            Some(&SCORE_RANGE_MESSAGE)
        );
        assert!(!errors.contains_key(&GradeField::Competency("critical-thinking".to_string())));
        assert_eq!(draft.rubric_score("communication").unwrap().raw(), "150");
        assert_eq!(
            draft.rubric_score("critical-thinking").unwrap().value(),
            Some(90)
        );
    }

    #[test]
    fn test_unknown_competency_rejected() {
        let mut draft = GradeDraft::new(&rubric(), None);
        assert!(draft.update_rubric_score("collaboration", "80").is_err());
        assert!(draft.rubric_score("collaboration").is_none());
    }

    #[test]
    fn test_update_request_nulls_unset_fields() {
        let mut draft = GradeDraft::new(&rubric(), None);
        draft.update_score("85");
        draft.update_feedback("<p>Nice</p>");

        let graded_at = chrono::Utc::now();
        let request = draft.to_update_request(7, graded_at);
        assert_eq!(request.score, Some(85));
        assert_eq!(request.letter_grade, Some(LetterGrade::Proficient));
        assert_eq!(request.rubric_scores.get("communication"), Some(&None));
        assert_eq!(request.rubric_scores.get("critical-thinking"), Some(&None));
        assert_eq!(request.feedback, "<p>Nice</p>");
        assert_eq!(request.graded_by, 7);
        assert_eq!(request.graded_at, graded_at);
        assert_eq!(request.submission_status, SubmissionStatus::Graded);
    }
}
