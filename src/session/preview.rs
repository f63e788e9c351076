//! 附件预览状态
//!
//! 分页文档跟踪当前页码与缩放倍率；图片直接内联展示；
//! 无法识别的格式回退为下载入口。

use crate::models::files::entities::SubmissionFile;

pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 3.0;
pub const ZOOM_STEP: f32 = 0.25;
const ZOOM_DEFAULT: f32 = 1.0;

/// 附件的预览方式，按文件扩展名判定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    PagedDocument,
    Image,
    Unsupported,
}

pub fn preview_kind(file_name: &str) -> PreviewKind {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => PreviewKind::PagedDocument,
        Some("png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp") => PreviewKind::Image,
        _ => PreviewKind::Unsupported,
    }
}

/// 预览面板的展示状态
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewDisplay {
    /// 分页文档内联预览
    Paged {
        url: String,
        // 当前页，1 起始，始终落在 [1, page_count] 内
        page: u32,
        // 渲染器加载完成前未知
        page_count: Option<u32>,
        zoom: f32,
    },
    /// 图片内联预览
    Image { url: String },
    /// 回退：仅提供下载（不支持的格式，或预览 URL 获取失败）
    Download { url: String },
}

#[derive(Debug, Clone)]
pub struct PreviewState {
    file: SubmissionFile,
    display: PreviewDisplay,
}

impl PreviewState {
    pub fn paged(file: SubmissionFile, url: String) -> Self {
        Self {
            file,
            display: PreviewDisplay::Paged {
                url,
                page: 1,
                page_count: None,
                zoom: ZOOM_DEFAULT,
            },
        }
    }

    pub fn image(file: SubmissionFile, url: String) -> Self {
        Self {
            file,
            display: PreviewDisplay::Image { url },
        }
    }

    pub fn download(file: SubmissionFile, url: String) -> Self {
        Self {
            file,
            display: PreviewDisplay::Download { url },
        }
    }

    pub fn file(&self) -> &SubmissionFile {
        &self.file
    }

    pub fn display(&self) -> &PreviewDisplay {
        &self.display
    }

    /// 渲染器加载完成后回报总页数，当前页随之重新收敛
    pub fn document_loaded(&mut self, pages: u32) {
        if let PreviewDisplay::Paged {
            page, page_count, ..
        } = &mut self.display
        {
            let pages = pages.max(1);
            *page_count = Some(pages);
            *page = (*page).clamp(1, pages);
        }
    }

    pub fn set_page(&mut self, target: u32) {
        if let PreviewDisplay::Paged {
            page, page_count, ..
        } = &mut self.display
        {
            let target = target.max(1);
            // 总页数未知时只约束下界
            *page = match page_count {
                Some(pages) => target.min(*pages),
                None => target,
            };
        }
    }

    pub fn next_page(&mut self) {
        if let PreviewDisplay::Paged { page, .. } = &self.display {
            let page = *page;
            self.set_page(page + 1);
        }
    }

    pub fn prev_page(&mut self) {
        if let PreviewDisplay::Paged { page, .. } = &self.display {
            let page = *page;
            self.set_page(page.saturating_sub(1));
        }
    }

    pub fn zoom_in(&mut self) {
        self.adjust_zoom(ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.adjust_zoom(-ZOOM_STEP);
    }

    fn adjust_zoom(&mut self, delta: f32) {
        if let PreviewDisplay::Paged { zoom, .. } = &mut self.display {
            *zoom = (*zoom + delta).clamp(ZOOM_MIN, ZOOM_MAX);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf() -> SubmissionFile {
        SubmissionFile {
            s3_key: "submissions/42/report.pdf".to_string(),
            file_name: "report.pdf".to_string(),
        }
    }

    fn zoom_of(state: &PreviewState) -> f32 {
        match state.display() {
            PreviewDisplay::Paged { zoom, .. } => *zoom,
            _ => panic!("not a paged preview"),
        }
    }

    fn page_of(state: &PreviewState) -> u32 {
        match state.display() {
            PreviewDisplay::Paged { page, .. } => *page,
            _ => panic!("not a paged preview"),
        }
    }

    #[test]
    fn test_preview_kind_by_extension() {
        assert_eq!(preview_kind("report.pdf"), PreviewKind::PagedDocument);
        assert_eq!(preview_kind("Report.PDF"), PreviewKind::PagedDocument);
        assert_eq!(preview_kind("photo.jpeg"), PreviewKind::Image);
        assert_eq!(preview_kind("diagram.png"), PreviewKind::Image);
        assert_eq!(preview_kind("notes.docx"), PreviewKind::Unsupported);
        assert_eq!(preview_kind("no-extension"), PreviewKind::Unsupported);
    }

    #[test]
    fn test_paged_defaults() {
        let state = PreviewState::paged(pdf(), "https://example/signed".to_string());
        assert_eq!(page_of(&state), 1);
        assert_eq!(zoom_of(&state), 1.0);
    }

    #[test]
    fn test_zoom_in_three_steps() {
        let mut state = PreviewState::paged(pdf(), "u".to_string());
        state.zoom_in();
        state.zoom_in();
        state.zoom_in();
        assert_eq!(zoom_of(&state), 1.75);
    }

    #[test]
    fn test_zoom_clamps_at_bounds() {
        let mut state = PreviewState::paged(pdf(), "u".to_string());
        for _ in 0..20 {
            state.zoom_in();
        }
        assert_eq!(zoom_of(&state), ZOOM_MAX);

        for _ in 0..20 {
            state.zoom_out();
        }
        assert_eq!(zoom_of(&state), ZOOM_MIN);
    }

    #[test]
    fn test_page_clamps_to_range() {
        let mut state = PreviewState::paged(pdf(), "u".to_string());
        state.document_loaded(5);

        state.set_page(0);
        assert_eq!(page_of(&state), 1);

        state.set_page(6);
        assert_eq!(page_of(&state), 5);

        state.set_page(3);
        state.next_page();
        assert_eq!(page_of(&state), 4);
        state.next_page();
        state.next_page();
        assert_eq!(page_of(&state), 5);

        state.prev_page();
        assert_eq!(page_of(&state), 4);
    }

    #[test]
    fn test_prev_page_at_first_is_noop() {
        let mut state = PreviewState::paged(pdf(), "u".to_string());
        state.document_loaded(5);
        state.prev_page();
        assert_eq!(page_of(&state), 1);
    }

    #[test]
    fn test_document_loaded_reclamps_current_page() {
        let mut state = PreviewState::paged(pdf(), "u".to_string());
        // 总页数未知时允许先行翻页
        state.set_page(9);
        assert_eq!(page_of(&state), 9);

        state.document_loaded(5);
        assert_eq!(page_of(&state), 5);
    }

    #[test]
    fn test_zoom_ignored_for_images() {
        let file = SubmissionFile {
            s3_key: "submissions/42/photo.png".to_string(),
            file_name: "photo.png".to_string(),
        };
        let mut state = PreviewState::image(file, "u".to_string());
        state.zoom_in();
        state.next_page();
        assert!(matches!(state.display(), PreviewDisplay::Image { .. }));
    }
}
