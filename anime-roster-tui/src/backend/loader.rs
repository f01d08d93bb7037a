//! 后台名单加载

use anime_roster_core::{RosterService, SourceConfig};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::AppMessage;

/// 在 runtime 上启动一次性加载任务，结果通过 `tx` 送回主循环
pub fn spawn_roster_load(runtime: &Handle, source: SourceConfig, tx: UnboundedSender<AppMessage>) {
    runtime.spawn(async move {
        let msg = load_roster(&source).await;
        if tx.send(msg).is_err() {
            log::debug!("UI loop closed before the roster arrived");
        }
    });
}

/// 加载名单并包装为消息
async fn load_roster(source: &SourceConfig) -> AppMessage {
    log::info!(
        "Fetching roster of anime {} from {}",
        source.anime_id,
        source.base_url
    );

    let result = match RosterService::new(source) {
        Ok(service) => service.load_roster().await,
        Err(e) => Err(e),
    };

    AppMessage::CharactersLoaded(result.map_err(|e| e.to_string()))
}
