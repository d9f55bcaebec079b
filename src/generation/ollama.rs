use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::time::{timeout, Duration};
use crate::cache::{cache_key, ResponseCache};
use crate::circuit_breaker::{CircuitBreaker, RetryPolicy};
use crate::config::GeneratorConfig;
use crate::error::{BotError, GenerationError};
use crate::generation::{ContentGenerator, GenerationOptions};
use crate::logging::{log_generation_call, log_timeout};
use crate::perf::PerfTimer;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    system: &'a str,
    prompt: &'a str,
    stream: bool,
    options: RequestOptions,
}

#[derive(Serialize)]
struct RequestOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Client for an Ollama-compatible `/api/generate` endpoint
/// with timeout, bounded retry, circuit breaker and response cache.
pub struct OllamaGenerator {
    client: Client,
    endpoint: String,
    model: String,
    call_timeout: Duration,
    retry: RetryPolicy,
    breaker: CircuitBreaker,
    cache: ResponseCache,
}

impl OllamaGenerator {
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, BotError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs + 5))
            .tcp_keepalive(Duration::from_secs(30))
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| BotError::new(
                format!("Failed to create HTTP client: {}", e),
                "startup"
            ))?;

        Ok(OllamaGenerator {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            call_timeout: Duration::from_secs(config.timeout_secs),
            retry: RetryPolicy {
                max_retries: config.max_retries,
                ..RetryPolicy::default()
            },
            breaker: CircuitBreaker::new(
                Duration::from_secs(config.circuit_cooldown_secs),
                config.circuit_failure_threshold,
            ),
            cache: ResponseCache::new(config.cache_capacity, chrono::Duration::hours(12)),
        })
    }

    async fn call_once(
        &self,
        system: &str,
        prompt: &str,
        options: &GenerationOptions,
    ) -> anyhow::Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&GenerateRequest {
                model: &self.model,
                system,
                prompt,
                stream: false,
                options: RequestOptions {
                    temperature: options.temperature,
                    num_predict: options.max_output_tokens,
                },
            })
            .send()
            .await
            .with_context(|| format!("Failed to reach generator at {}", self.endpoint))?
            .error_for_status()
            .with_context(|| format!("Generator '{}' returned an error status", self.model))?;

        let body: GenerateResponse = response
            .json()
            .await
            .with_context(|| format!("Failed to decode response from '{}'", self.model))?;

        if body.response.trim().is_empty() {
            anyhow::bail!("Model '{}' returned empty response", self.model);
        }
        Ok(body.response)
    }
}

#[async_trait]
impl ContentGenerator for OllamaGenerator {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        system: &str,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, GenerationError> {
        let _perf = PerfTimer::new("generation_total");
        let key = cache_key(&self.model, system, prompt);
        if let Some(hit) = self.cache.get(&key, Utc::now()) {
            return Ok(hit);
        }

        if !self.breaker.allow_request() {
            return Err(GenerationError::CircuitOpen);
        }

        let mut last_error = GenerationError::Unavailable("no attempt made".to_string());
        for attempt in 0..=self.retry.max_retries {
            let started = std::time::Instant::now();
            let outcome = timeout(self.call_timeout, self.call_once(system, prompt, options)).await;
            let latency_ms = started.elapsed().as_millis() as u64;

            match outcome {
                Ok(Ok(text)) => {
                    log_generation_call(&self.model, "generate", true, latency_ms);
                    self.breaker.record_success();
                    self.cache.put(key, text.clone(), Utc::now());
                    return Ok(text);
                }
                Ok(Err(e)) => {
                    log_generation_call(&self.model, "generate", false, latency_ms);
                    last_error = GenerationError::Unavailable(format!("{:#}", e));
                }
                Err(_) => {
                    log_timeout(&self.model, self.call_timeout.as_secs());
                    last_error = GenerationError::Timeout(self.call_timeout.as_secs());
                }
            }
            self.breaker.record_failure();

            if attempt < self.retry.max_retries && self.breaker.allow_request() {
                let delay = self.retry.delay_for_attempt(attempt);
                tracing::warn!(
                    model = %self.model,
                    error = %last_error,
                    attempt = attempt + 1,
                    delay_ms = delay.as_millis() as u64,
                    "Generation failed, retrying with backoff"
                );
                tokio::time::sleep(delay).await;
            } else {
                break;
            }
        }

        tracing::error!(model = %self.model, error = %last_error, "Generation failed after retries");
        Err(last_error)
    }
}
