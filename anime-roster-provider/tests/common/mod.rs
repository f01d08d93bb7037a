//! 共享测试工具和辅助函数

#![allow(dead_code)]

use anime_roster_provider::SourceConfig;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 单次应答的 HTTP 模拟服务
pub struct MockResponse {
    pub status_line: &'static str,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

impl MockResponse {
    pub fn json(status_line: &'static str, body: impl Into<String>) -> Self {
        Self {
            status_line,
            headers: vec![("Content-Type", "application/json".to_string())],
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }
}

/// 启动只应答一次的本地 HTTP 服务，返回其根地址
///
/// 返回的第二个值在服务读到请求行后给出该请求行（如 `GET /anime/21/characters HTTP/1.1`）。
pub async fn serve_once(
    response: MockResponse,
) -> (String, tokio::sync::oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = tokio::sync::oneshot::channel();

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };

        let mut buf = Vec::new();
        let mut chunk = [0_u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut chunk).await {
                Ok(0) | Err(_) => break,
                Ok(n) => buf.extend_from_slice(&chunk[..n]),
            }
        }
        let request = String::from_utf8_lossy(&buf);
        let request_line = request.lines().next().unwrap_or_default().to_string();
        let _ = tx.send(request_line);

        let mut raw = format!("HTTP/1.1 {}\r\n", response.status_line);
        for (name, value) in &response.headers {
            raw.push_str(&format!("{name}: {value}\r\n"));
        }
        raw.push_str(&format!(
            "Content-Length: {}\r\nConnection: close\r\n\r\n",
            response.body.len()
        ));
        raw.push_str(&response.body);

        let _ = socket.write_all(raw.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    (format!("http://{addr}"), rx)
}

/// 指向本地模拟服务的数据源配置
pub fn local_config(base_url: &str, anime_id: u64) -> SourceConfig {
    SourceConfig {
        base_url: base_url.to_string(),
        anime_id,
        connect_timeout_secs: 2,
        request_timeout_secs: 5,
    }
}

/// 生成含 `count` 个角色的 Jikan 响应体
pub fn characters_body(count: usize) -> String {
    let entries: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"character":{{"mal_id":{id},"name":"Character {i}","images":{{"jpg":{{"image_url":"https://cdn.example/{id}.jpg"}}}}}},"role":"{role}"}}"#,
                id = i + 1,
                role = if i < 3 { "Main" } else { "Supporting" },
            )
        })
        .collect();
    format!(r#"{{"data":[{}]}}"#, entries.join(","))
}
