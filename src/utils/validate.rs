/// 分数输入校验失败时展示给用户的提示
pub const SCORE_RANGE_MESSAGE: &str = "Scores must be integers between 0 and 100";

/// 解析评分输入框的原始文本
///
/// 规则：
/// - 空白输入视为"未填写"，返回 Ok(None)
/// - 只接受 [0, 100] 范围内的整数（不接受小数、正负号以外的字符）
/// - 其余输入一律返回统一的提示文案
pub fn parse_score_input(raw: &str) -> Result<Option<i32>, &'static str> {
    let trimmed = raw.trim();

    // 空输入表示清除该项分数
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: i32 = trimmed.parse().map_err(|_| SCORE_RANGE_MESSAGE)?;

    // 范围校验：0 <= x <= 100
    if !(0..=100).contains(&value) {
        return Err(SCORE_RANGE_MESSAGE);
    }

    Ok(Some(value))
}
