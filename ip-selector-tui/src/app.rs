//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无按键）：
//! loop {
//!
//!     events.drain()                                  // 取出服务层的 UiTransition 与提示
//!     update(app, Tick)                               // 过期的成功横幅恢复为空
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }
//!     if let Some(event) = poll_event() {             // 最多等待 100ms
//!         let msg = handle_event(event, &app);
//!         if let Some(cmd) = update(&mut app, msg) {  // Update 只改 Model
//!             panel.dispatch(cmd)                     // I/O 交给后台任务
//!         }
//!     }
//! }

use std::time::Duration;

use anyhow::Result;
use tokio::task::JoinHandle;

use crate::backend::{PanelEvents, PanelService};
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
///
/// 返回退出时仍在执行的保存任务（如果有）。
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    panel: &PanelService,
    events: &mut PanelEvents,
) -> Result<Option<JoinHandle<()>>> {
    let mut on_quit = None;

    loop {
        // 1. 折叠服务层事件
        for msg in events.drain() {
            apply(app, msg, panel);
        }
        apply(app, AppMessage::Tick, panel);

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            let pending = apply(app, msg, panel);
            if app.should_quit {
                on_quit = pending;
            }
        }
    }

    Ok(on_quit)
}

/// 更新状态，必要时把命令交给 Backend 层
fn apply(app: &mut App, msg: AppMessage, panel: &PanelService) -> Option<JoinHandle<()>> {
    let command = update::update(app, msg)?;
    tracing::debug!(?command, "dispatching");
    Some(panel.dispatch(command))
}
