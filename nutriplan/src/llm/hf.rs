//! Hugging Face Inference API client: one POST per call, no retries, no
//! timeout tuning, no rate-limit handling.

use async_trait::async_trait;
use serde_json::json;

use super::InferenceClient;

/// Default model endpoint on the Hugging Face Inference API.
const HF_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct-v0.3";

/// Tokens requested from the model per call.
const MAX_NEW_TOKENS: u32 = 256;

fn model_url() -> String {
    std::env::var("HF_MODEL_URL").unwrap_or_else(|_| HF_MODEL_URL.to_string())
}

/// Client for the hosted inference endpoint.
///
/// Holds the bearer token loaded at startup and a single [`reqwest::Client`].
pub struct HfInference {
    api_key: String,
    http: reqwest::Client,
}

impl HfInference {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl InferenceClient for HfInference {
    /// Sends `{"inputs": prompt, "parameters": {"max_new_tokens": 256}}`
    /// with `Authorization: Bearer <key>`.
    ///
    /// Non-success status becomes `"Error: <status> - <body>"`; transport
    /// and parse failures take the same `"Error: ..."` channel so every
    /// failure path stays user-visible text. On success, returns the first
    /// element's `generated_text` when the body is a non-empty array of
    /// objects; any other shape falls back to the stringified body.
    async fn generate(&self, prompt: &str) -> String {
        let body = json!({
            "inputs": prompt,
            "parameters": { "max_new_tokens": MAX_NEW_TOKENS },
        });
        let res = match self
            .http
            .post(model_url())
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
        {
            Ok(res) => res,
            Err(e) => return format!("Error: request failed - {e}"),
        };

        let status = res.status();
        let text = match res.text().await {
            Ok(t) => t,
            Err(e) => return format!("Error: {} - failed to read body: {e}", status.as_u16()),
        };
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "inference request failed");
            return format!("Error: {} - {}", status.as_u16(), text);
        }

        let parsed: serde_json::Value = match serde_json::from_str(&text) {
            Ok(v) => v,
            Err(e) => return format!("Error: invalid response body - {e}"),
        };
        match parsed
            .get(0)
            .and_then(|first| first.get("generated_text"))
            .and_then(|t| t.as_str())
        {
            Some(generated) => generated.to_string(),
            // The array-of-objects shape is a guess at the API, not a
            // contract; unexpected shapes come back whole.
            None => parsed.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    /// Reads one HTTP request; returns (head, body).
    async fn read_http_request(stream: &mut TcpStream) -> (String, String) {
        let mut buf = Vec::new();
        let mut tmp = [0u8; 1024];
        loop {
            let n = stream.read(&mut tmp).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&tmp[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let header_end = pos + 4;
                let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
                let content_length = head
                    .lines()
                    .find_map(|line| {
                        line.to_ascii_lowercase()
                            .strip_prefix("content-length:")
                            .and_then(|v| v.trim().parse::<usize>().ok())
                    })
                    .unwrap_or(0);
                let mut body = buf[header_end..].to_vec();
                while body.len() < content_length {
                    let m = stream.read(&mut tmp).await.unwrap();
                    if m == 0 {
                        break;
                    }
                    body.extend_from_slice(&tmp[..m]);
                }
                return (head, String::from_utf8_lossy(&body[..content_length]).to_string());
            }
        }
        (String::new(), String::new())
    }

    async fn write_http_response(stream: &mut TcpStream, status: &str, body: &str) {
        let resp = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nConnection: close\r\nContent-Length: {}\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(resp.as_bytes()).await.unwrap();
    }

    /// One server task handles all cases in sequence so the HF_MODEL_URL
    /// override is set exactly once for the whole test.
    #[tokio::test]
    async fn generate_covers_success_error_and_fallback_paths() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let mut seen_head = String::new();
            let mut seen_body = String::new();
            for _ in 0..3 {
                let (mut stream, _) = listener.accept().await.unwrap();
                let (head, body) = read_http_request(&mut stream).await;
                let req: serde_json::Value = serde_json::from_str(&body).unwrap();
                match req["inputs"].as_str().unwrap() {
                    "ok" => {
                        seen_head = head;
                        seen_body = body;
                        write_http_response(
                            &mut stream,
                            "200 OK",
                            r#"[{"generated_text":"Eat more greens."}]"#,
                        )
                        .await;
                    }
                    "boom" => {
                        write_http_response(
                            &mut stream,
                            "503 Service Unavailable",
                            r#"{"error":"model loading"}"#,
                        )
                        .await;
                    }
                    "odd" => {
                        write_http_response(&mut stream, "200 OK", r#"{"unexpected":"shape"}"#)
                            .await;
                    }
                    other => panic!("unexpected prompt: {}", other),
                }
            }
            (seen_head, seen_body)
        });

        let old = std::env::var("HF_MODEL_URL").ok();
        std::env::set_var("HF_MODEL_URL", format!("http://{}", addr));

        let client = HfInference::new("test-token".to_string());

        let ok = client.generate("ok").await;
        assert_eq!(ok, "Eat more greens.");

        let err = client.generate("boom").await;
        assert!(err.starts_with("Error: 503 - "));
        assert!(err.contains("model loading"));

        let odd = client.generate("odd").await;
        assert_eq!(odd, r#"{"unexpected":"shape"}"#);

        if let Some(v) = old {
            std::env::set_var("HF_MODEL_URL", v);
        } else {
            std::env::remove_var("HF_MODEL_URL");
        }

        let (head, body) = server.await.unwrap();
        let head = head.to_ascii_lowercase();
        assert!(head.contains("authorization: bearer test-token"));
        assert!(head.contains("content-type: application/json"));
        let sent: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(sent["inputs"], "ok");
        assert_eq!(sent["parameters"]["max_new_tokens"], 256);
    }
}
