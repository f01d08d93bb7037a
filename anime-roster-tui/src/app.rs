//!
//! app.rs
//! 应用主循环
//!
//!
//! 在应用启动时，App 的初始状态为：
//!
//! App {
//!     should_quit: false,                 // 决定应用是否应该退出
//!     roster: RosterState {
//!         view: PageView (空列表),
//!         cursor: 0,
//!         load_state: Loading,            // 等待后台任务
//!     },
//!     modal: ModalState { active: None },
//!     language: 配置中的语言,
//!     status_message: None,
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     while let Ok(msg) = rx.try_recv() {             // 取出后台任务送回的消息
//!         update::update(&mut app , msg)
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新状态
//!     }
//! }

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 轮询超时
const TICK: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, rx: &mut UnboundedReceiver<AppMessage>) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 处理后台消息
        drain_background(app, rx);

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(TICK)? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}

/// 取出所有已到达的后台消息
fn drain_background(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>) {
    while let Ok(msg) = rx.try_recv() {
        update::update(app, msg);
    }
}
