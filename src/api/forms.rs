//! Account and Detail Page Endpoints

use serde::Serialize;

use super::ApiClient;
use crate::error::{FetchError, SubmissionError};
use crate::models::{FileInfo, Profile, SystemInfo};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ProfileArgs<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ChangePasswordArgs<'a> {
    new_password: &'a str,
    current_password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ResetPasswordArgs<'a> {
    new_password: &'a str,
}

#[derive(Serialize)]
struct SystemCommentArgs<'a> {
    #[serde(rename = "Comment")]
    comment: &'a str,
    uuid: &'a str,
}

// ========================
// Profile
// ========================

pub async fn fetch_profile(api: &ApiClient) -> Result<Profile, FetchError> {
    api.get_json("/api/profile.json", &[]).await
}

pub async fn save_profile(api: &ApiClient, profile: &Profile) -> Result<(), SubmissionError> {
    let args = ProfileArgs {
        first_name: &profile.first_name,
        last_name: &profile.last_name,
        email: &profile.email,
    };
    api.post_form("/api/profile.json", &args).await.map(|_| ())
}

// ========================
// Passwords
// ========================

pub async fn change_password(
    api: &ApiClient,
    new_password: &str,
    current_password: &str,
) -> Result<(), SubmissionError> {
    let args = ChangePasswordArgs {
        new_password,
        current_password,
    };
    api.post_form("/api/change_password.json", &args).await.map(|_| ())
}

pub async fn reset_password(api: &ApiClient, new_password: &str) -> Result<(), SubmissionError> {
    api.post_form("/api/reset_password.json", &ResetPasswordArgs { new_password })
        .await
        .map(|_| ())
}

// ========================
// Detail Pages
// ========================

pub async fn fetch_system_info(api: &ApiClient, uuid: &str) -> Result<SystemInfo, FetchError> {
    api.get_json("/api/systeminfo.json", &[("uuid", uuid.to_string())]).await
}

pub async fn save_system_comment(api: &ApiClient, uuid: &str, comment: &str) -> Result<(), SubmissionError> {
    api.post_form("/api/systeminfo.json", &SystemCommentArgs { comment, uuid })
        .await
        .map(|_| ())
}

pub async fn fetch_file_info(api: &ApiClient, sha256: &str) -> Result<FileInfo, FetchError> {
    api.get_json("/api/fileinfo.json", &[("sha256", sha256.to_string())]).await
}
