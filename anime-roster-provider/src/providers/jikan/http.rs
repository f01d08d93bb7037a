//! Jikan HTTP 请求方法

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::providers::common::join_url;
use crate::traits::{ProviderErrorMapper, RawApiError};

use super::{JikanCharactersResponse, JikanErrorBody, JikanProvider};

impl JikanProvider {
    /// 角色列表接口地址
    pub(crate) fn characters_url(&self) -> String {
        join_url(&self.base_url, &format!("anime/{}/characters", self.anime_id))
    }

    /// 执行 GET 请求，获取角色列表原始响应
    pub(crate) async fn get_characters(&self) -> Result<JikanCharactersResponse> {
        let url = self.characters_url();
        let request = self.client.get(&url).header("Accept", "application/json");

        let (status, body) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;

        if !(200..300).contains(&status) {
            let message = serde_json::from_str::<JikanErrorBody>(&body)
                .map(JikanErrorBody::into_message)
                .unwrap_or_else(|_| (!body.trim().is_empty()).then(|| body.trim().to_string()));
            log::error!("[{}] API 错误: HTTP {status}", self.provider_name());
            return Err(self.map_error(RawApiError::new(status, message)));
        }

        HttpUtils::parse_json(&body, self.provider_name())
    }
}
