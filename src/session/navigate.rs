use tracing::debug;

use super::{GradingSession, select};
use crate::errors::{GradeFlowError, Result};

/// 导航方向（提交列表按最近更新倒序）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

pub(super) async fn navigate(session: &mut GradingSession, direction: Direction) -> Result<()> {
    let Some(current_id) = session.current.as_ref().map(|c| c.submission.id) else {
        return Err(GradeFlowError::validation("No submission selected"));
    };

    let Some(position) = session.order.iter().position(|item| item.id == current_id) else {
        return Err(GradeFlowError::not_found(format!(
            "提交不在当前列表中: {current_id}"
        )));
    };

    // 边界处不回绕
    let target = match direction {
        Direction::Previous => position.checked_sub(1),
        Direction::Next => {
            let next = position + 1;
            (next < session.order.len()).then_some(next)
        }
    };

    let Some(target) = target else {
        debug!("Navigation {:?} at boundary, ignoring", direction);
        return Ok(());
    };

    let target_id = session.order[target].id;
    select::select_submission(session, target_id).await
}
