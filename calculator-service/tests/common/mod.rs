//! Test helper module for calculator-service integration tests.

#![allow(dead_code)]

use calculator_service::{config::CalculatorConfig, Application};
use reqwest::Client;

/// A running calculator service bound to a random local port.
pub struct TestApp {
    pub address: String,
    client: Client,
}

impl TestApp {
    /// Spawn the application in the background on `127.0.0.1:<random>`.
    pub async fn spawn() -> Self {
        let application = Application::build(CalculatorConfig::for_tests())
            .await
            .expect("Failed to build application");
        let address = format!("http://127.0.0.1:{}", application.port());

        // The listener is already bound, so requests queue until serving starts.
        tokio::spawn(async move {
            let _ = application.run_until_stopped().await;
        });

        Self {
            address,
            client: Client::new(),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
