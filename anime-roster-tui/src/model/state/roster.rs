//! 角色名单状态

use anime_roster_core::{CharacterRecord, PageView};

/// 名单加载状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

/// 角色名单状态
#[derive(Debug)]
pub struct RosterState {
    /// 分页控制器
    pub view: PageView<CharacterRecord>,
    /// 当前页内的光标行
    pub cursor: usize,
    /// 加载状态
    pub load_state: LoadState,
}

impl RosterState {
    pub fn new(page_size: usize) -> Self {
        Self {
            view: PageView::new(page_size),
            cursor: 0,
            load_state: LoadState::Loading,
        }
    }

    /// 装载角色列表
    pub fn load(&mut self, characters: Vec<CharacterRecord>) {
        self.view.load(characters);
        self.cursor = 0;
        self.load_state = LoadState::Loaded;
    }

    /// 加载失败：列表置空并记录错误
    pub fn fail(&mut self, message: impl Into<String>) {
        self.view.load(Vec::new());
        self.cursor = 0;
        self.load_state = LoadState::Failed(message.into());
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// 光标上移
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// 光标下移（不超过当前页最后一行）
    pub fn cursor_down(&mut self) {
        let rows = self.view.current_slice().len();
        if self.cursor + 1 < rows {
            self.cursor += 1;
        }
    }

    /// 光标跳到第一行
    pub fn cursor_first(&mut self) {
        self.cursor = 0;
    }

    /// 光标跳到最后一行
    pub fn cursor_last(&mut self) {
        self.cursor = self.view.current_slice().len().saturating_sub(1);
    }

    /// 下一页，光标复位
    pub fn next_page(&mut self) -> bool {
        let moved = self.view.next_page();
        if moved {
            self.cursor = 0;
        }
        moved
    }

    /// 上一页，光标复位
    pub fn previous_page(&mut self) -> bool {
        let moved = self.view.previous_page();
        if moved {
            self.cursor = 0;
        }
        moved
    }

    /// 选中光标所在的角色
    pub fn select_under_cursor(&mut self) -> Option<&CharacterRecord> {
        if self.view.select_at(self.cursor) {
            self.view.selection()
        } else {
            None
        }
    }

    pub fn close_selection(&mut self) {
        self.view.close_selection();
    }
}
