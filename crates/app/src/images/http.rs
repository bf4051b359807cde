//! HTTP image generation client.

use std::{path::PathBuf, time::Duration};

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use jiff::Timestamp;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::info;

use super::{GeneratedImage, ImageGenerationError, ImageGenerator};

/// Characters of the prompt kept in the generated file name.
const SLUG_LEN: usize = 20;

/// Configuration for an OpenAI-compatible image generation endpoint.
#[derive(Debug, Clone)]
pub struct ImageGeneratorConfig {
    /// Full endpoint URL, e.g. `"https://api.openai.com/v1/images/generations"`.
    pub endpoint: String,

    /// Bearer API key.
    pub api_key: String,

    /// Requested image size, e.g. `"512x512"`.
    pub size: String,

    /// Directory generated images are written to.
    pub image_dir: PathBuf,

    /// URL prefix the image directory is served under.
    pub public_prefix: String,

    /// Upper bound for the whole provider request.
    pub timeout: Duration,
}

/// Generates images through a remote provider and stores them locally.
#[derive(Debug, Clone)]
pub struct HttpImageGenerator {
    config: ImageGeneratorConfig,
    http: Client,
}

impl HttpImageGenerator {
    /// Create a new generator from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ImageGeneratorConfig) -> Result<Self, ImageGenerationError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ImageGenerationError::Http)?;

        Ok(Self { config, http })
    }

    async fn request_image(&self, prompt: &str) -> Result<Vec<u8>, ImageGenerationError> {
        let body = GenerateRequest {
            prompt,
            size: &self.config.size,
            n: 1,
            response_format: "b64_json",
        };

        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(ImageGenerationError::UnexpectedResponse(format!(
                "generation request failed with status {status}: {text}"
            )));
        }

        let parsed: GenerateResponse = response.json().await?;

        let encoded = parsed
            .data
            .into_iter()
            .next()
            .and_then(|image| image.b64_json)
            .filter(|encoded| !encoded.is_empty())
            .ok_or(ImageGenerationError::NoImageData)?;

        Ok(BASE64.decode(encoded)?)
    }
}

#[async_trait]
impl ImageGenerator for HttpImageGenerator {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ImageGenerationError> {
        let prompt = prompt.trim();

        if prompt.is_empty() {
            return Err(ImageGenerationError::EmptyPrompt);
        }

        let bytes = self.request_image(prompt).await?;

        let file_name = file_name_for(prompt, Timestamp::now());

        fs::create_dir_all(&self.config.image_dir).await?;
        fs::write(self.config.image_dir.join(&file_name), &bytes).await?;

        info!(file = %file_name, bytes = bytes.len(), "generated product image");

        Ok(GeneratedImage {
            public_path: format!(
                "{}/{file_name}",
                self.config.public_prefix.trim_end_matches('/')
            ),
        })
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    size: &'a str,
    n: u8,
    response_format: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    data: Vec<GeneratedData>,
}

#[derive(Debug, Deserialize)]
struct GeneratedData {
    b64_json: Option<String>,
}

/// `ai_<unix seconds>_<slug>.png`, where the slug is the first prompt
/// characters with anything outside `[A-Za-z0-9]` replaced by `_`.
fn file_name_for(prompt: &str, now: Timestamp) -> String {
    let slug: String = prompt
        .chars()
        .take(SLUG_LEN)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    format!("ai_{}_{slug}.png", now.as_second())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;

    #[test]
    fn file_name_uses_timestamp_and_prompt_slug() -> TestResult {
        let now: Timestamp = "2026-03-02T12:00:00Z".parse()?;

        let name = file_name_for("Margherita pizza, wood-fired & fresh basil", now);

        assert_eq!(name, "ai_1772452800_Margherita_pizza__wo.png");

        Ok(())
    }

    #[test]
    fn file_name_handles_short_and_non_ascii_prompts() -> TestResult {
        let now: Timestamp = "2026-03-02T12:00:00Z".parse()?;

        assert_eq!(file_name_for("Kopi ☕", now), "ai_1772452800_Kopi__.png");

        Ok(())
    }

    #[test]
    fn response_without_data_parses_to_empty() -> TestResult {
        let parsed: GenerateResponse = serde_json::from_str("{}")?;

        assert!(parsed.data.is_empty());

        Ok(())
    }

    fn config(endpoint: String, image_dir: PathBuf, timeout: Duration) -> ImageGeneratorConfig {
        ImageGeneratorConfig {
            endpoint,
            api_key: "test-key".to_string(),
            size: "512x512".to_string(),
            image_dir,
            public_prefix: "/images/".to_string(),
            timeout,
        }
    }

    /// Serve one canned HTTP response on a local port.
    async fn serve_once(status: &'static str, body: String) -> TestResult<String> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await?;
            let mut buf = vec![0_u8; 16 * 1024];
            let _read = socket.read(&mut buf).await?;

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );

            socket.write_all(response.as_bytes()).await?;
            socket.shutdown().await
        });

        Ok(format!("http://{addr}/v1/images/generations"))
    }

    #[tokio::test]
    async fn empty_prompt_is_rejected_without_a_request() -> TestResult {
        let dir = tempfile::tempdir()?;
        let generator = HttpImageGenerator::new(config(
            "http://127.0.0.1:9/never-called".to_string(),
            dir.path().to_path_buf(),
            Duration::from_secs(1),
        ))?;

        let result = generator.generate("   ").await;

        assert!(matches!(result, Err(ImageGenerationError::EmptyPrompt)));

        Ok(())
    }

    #[tokio::test]
    async fn decoded_image_is_written_and_public_path_returned() -> TestResult {
        let dir = tempfile::tempdir()?;
        let payload = BASE64.encode(b"not really a png");
        let endpoint =
            serve_once("200 OK", format!(r#"{{"data":[{{"b64_json":"{payload}"}}]}}"#)).await?;

        let generator = HttpImageGenerator::new(config(
            endpoint,
            dir.path().to_path_buf(),
            Duration::from_secs(5),
        ))?;

        let image = generator.generate("Margherita").await?;

        let file_name = image
            .public_path
            .strip_prefix("/images/")
            .ok_or("public path should sit under /images/")?;

        assert!(file_name.ends_with("_Margherita.png"), "{file_name}");
        assert_eq!(
            std::fs::read(dir.path().join(file_name))?,
            b"not really a png"
        );

        Ok(())
    }

    #[tokio::test]
    async fn provider_error_status_is_reported() -> TestResult {
        let dir = tempfile::tempdir()?;
        let endpoint = serve_once(
            "500 Internal Server Error",
            r#"{"error":"boom"}"#.to_string(),
        )
        .await?;

        let generator = HttpImageGenerator::new(config(
            endpoint,
            dir.path().to_path_buf(),
            Duration::from_secs(5),
        ))?;

        let result = generator.generate("Margherita").await;

        assert!(
            matches!(result, Err(ImageGenerationError::UnexpectedResponse(_))),
            "{result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn missing_image_data_is_reported() -> TestResult {
        let dir = tempfile::tempdir()?;
        let endpoint = serve_once("200 OK", r#"{"data":[]}"#.to_string()).await?;

        let generator = HttpImageGenerator::new(config(
            endpoint,
            dir.path().to_path_buf(),
            Duration::from_secs(5),
        ))?;

        let result = generator.generate("Margherita").await;

        assert!(matches!(result, Err(ImageGenerationError::NoImageData)));

        Ok(())
    }

    #[tokio::test]
    async fn slow_provider_surfaces_timeout() -> TestResult {
        let dir = tempfile::tempdir()?;
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await?;
            tokio::time::sleep(Duration::from_secs(10)).await;
            drop(socket);

            Ok::<_, std::io::Error>(())
        });

        let generator = HttpImageGenerator::new(config(
            format!("http://{addr}/v1/images/generations"),
            dir.path().to_path_buf(),
            Duration::from_millis(200),
        ))?;

        let result = generator.generate("Margherita").await;

        assert!(
            matches!(result, Err(ImageGenerationError::Timeout)),
            "{result:?}"
        );

        server.abort();

        Ok(())
    }
}
