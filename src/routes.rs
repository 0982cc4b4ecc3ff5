//! Client-side routes of the console

use crate::api::ContentPage;
use crate::query::{decode_query, detail_href};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Systems,
    SystemInfo { uuid: String },
    Executables,
    FileInfo { sha256: String },
    ProcessEvents,
    Profile,
    ChangePassword,
    PasswordReset,
    Content(ContentPage),
}

impl Route {
    /// Resolve `location.pathname` and `location.search`. Unknown paths
    /// land on the dashboard.
    pub fn from_location(path: &str, search: &str) -> Self {
        let param = |key: &str| {
            decode_query(search)
                .into_iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v)
                .unwrap_or_default()
        };

        match path.trim_end_matches('/') {
            "" => Route::Dashboard,
            "/systems" => Route::Systems,
            "/executables" => Route::Executables,
            "/process_events" => Route::ProcessEvents,
            "/profile" => Route::Profile,
            "/change_password" => Route::ChangePassword,
            "/password_reset" => Route::PasswordReset,
            "/help" => Route::Content(ContentPage::Help),
            "/privacy_policy" => Route::Content(ContentPage::PrivacyPolicy),
            "/terms_and_conditions" => Route::Content(ContentPage::Terms),
            p if p.starts_with("/systeminfo") => Route::SystemInfo { uuid: param("uuid") },
            p if p.starts_with("/file") => Route::FileInfo { sha256: param("sha256") },
            _ => Route::Dashboard,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::Systems => "/systems".to_string(),
            Route::SystemInfo { uuid } => detail_href("/systeminfo", "uuid", uuid),
            Route::Executables => "/executables".to_string(),
            Route::FileInfo { sha256 } => detail_href("/fileinfo", "sha256", sha256),
            Route::ProcessEvents => "/process_events".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::ChangePassword => "/change_password".to_string(),
            Route::PasswordReset => "/password_reset".to_string(),
            Route::Content(ContentPage::Help) => "/help".to_string(),
            Route::Content(ContentPage::PrivacyPolicy) => "/privacy_policy".to_string(),
            Route::Content(ContentPage::Terms) => "/terms_and_conditions".to_string(),
        }
    }

    /// Top-level section highlighted in the header
    pub fn section(&self) -> Route {
        match self {
            Route::SystemInfo { .. } => Route::Systems,
            Route::FileInfo { .. } => Route::Executables,
            Route::ChangePassword => Route::Profile,
            other => other.clone(),
        }
    }
}
