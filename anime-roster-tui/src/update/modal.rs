//! 弹窗更新逻辑

use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => {
            // 关闭详情弹窗时同时清除选中项
            if matches!(app.modal.active, Some(Modal::Detail(_))) {
                app.roster.close_selection();
            }
            app.modal.close();
        }
    }
}
