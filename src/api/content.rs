//! Static Content Endpoints

use super::ApiClient;
use crate::error::FetchError;

/// Server-rendered HTML panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentPage {
    Help,
    PrivacyPolicy,
    Terms,
}

impl ContentPage {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ContentPage::Help => "/api/help",
            ContentPage::PrivacyPolicy => "/api/privacy_policy",
            ContentPage::Terms => "/api/terms_and_conditions",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ContentPage::Help => "Help",
            ContentPage::PrivacyPolicy => "Privacy Policy",
            ContentPage::Terms => "Terms and Conditions",
        }
    }
}

pub async fn fetch_content(api: &ApiClient, page: ContentPage) -> Result<String, FetchError> {
    api.get_text(page.endpoint(), &[]).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::config::ConsoleConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_help_html() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/help"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<h2>Help</h2>"))
            .mount(&server)
            .await;

        let config = ConsoleConfig {
            api_base: server.uri(),
            ..ConsoleConfig::default()
        };
        let html = fetch_content(&ApiClient::new(&config), ContentPage::Help).await.unwrap();
        assert_eq!(html, "<h2>Help</h2>");
    }
}
