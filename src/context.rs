//! Console Context
//!
//! Read-only services provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::ConsoleConfig;

/// Config and API client shared by every page
#[derive(Clone, Debug)]
pub struct ConsoleContext {
    pub config: ConsoleConfig,
    pub api: ApiClient,
}

impl ConsoleContext {
    pub fn new(config: ConsoleConfig, csrf_token: String) -> Self {
        let mut api = ApiClient::new(&config);
        if !csrf_token.is_empty() {
            api = api.with_csrf_token(csrf_token);
        }
        Self { config, api }
    }
}

pub fn use_console() -> ConsoleContext {
    expect_context::<ConsoleContext>()
}
