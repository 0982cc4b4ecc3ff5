//! File Info Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Flash, FlashMessage};
use crate::context::use_console;
use crate::error::LOAD_FAILED_MESSAGE;
use crate::models::{value_text, FileInfo};

type Row = (&'static str, fn(&FileInfo) -> String);

const NETWORK: &[Row] = &[
    ("File path", |f| f.file_path.clone()),
    ("First seen", |f| f.first_seen.clone()),
    ("Last seen", |f| f.last_seen.clone()),
    ("Number of systems", |f| value_text(&f.num_systems)),
];

const CALCULATED: &[Row] = &[
    ("Sha256", |f| f.sha256.clone()),
    ("Sha1", |f| f.sha1.clone()),
    ("Md5", |f| f.md5.clone()),
    ("Size", |f| value_text(&f.size)),
];

const EXTRACTED: &[Row] = &[
    ("Company Name", |f| f.company_name.clone()),
    ("Product Name", |f| f.product_name.clone()),
    ("Product Version", |f| f.product_version.clone()),
    ("File Description", |f| f.file_description.clone()),
    ("Internal name", |f| f.internal_name.clone()),
    ("File version", |f| f.file_version.clone()),
    ("Original filename", |f| f.original_filename.clone()),
];

const SIGNATURE: &[Row] = &[
    ("Subject", |f| f.subject.clone()),
    ("Serial Number", |f| f.serial_number.clone()),
    ("Digest algorithm", |f| f.digest_algorithm.clone()),
    ("Digest encryption algorithm", |f| f.digest_encryption_algorithm.clone()),
];

/// Details page for one executable, keyed by its SHA-256
#[component]
pub fn FileInfoPage(#[prop(into)] sha256: String) -> impl IntoView {
    let api_client = StoredValue::new(use_console().api);
    let sha256 = StoredValue::new(sha256);
    let info = RwSignal::new(FileInfo::default());
    let flash = RwSignal::new(None::<FlashMessage>);

    Effect::new(move |prev: Option<()>| {
        if prev.is_some() {
            return;
        }
        let api_client = api_client.get_value();
        let sha256 = sha256.get_value();
        spawn_local(async move {
            match api::fetch_file_info(&api_client, &sha256).await {
                Ok(loaded) => {
                    info.try_set(loaded);
                }
                Err(err) => {
                    log::warn!(target: "fileinfo", "[FILE] load {} failed: {}", sha256, err);
                    flash.try_set(Some(FlashMessage::danger(LOAD_FAILED_MESSAGE)));
                }
            }
        });
    });

    let table = move |rows: &'static [Row]| {
        view! {
            <table class="data_listing">
                {rows.iter().map(|(label, value)| {
                    let value = *value;
                    view! {
                        <tr>
                            <th>{*label}</th>
                            <td>{move || info.with(value)}</td>
                        </tr>
                    }
                }).collect_view()}
            </table>
        }
    };

    view! {
        <div>
            <h2>"File"</h2>
            <Flash message=flash />
            <h3>"Your network"</h3>
            {table(NETWORK)}
            <h3>"File Data"</h3>
            <div class="row">
                <div class="col-md-7">
                    <h4>"Calculated from the file"</h4>
                    {table(CALCULATED)}
                </div>
                <div class="col-md-5">
                    <h4>"Extracted from the file"</h4>
                    {table(EXTRACTED)}
                </div>
            </div>
            <h3>"Signature information"</h3>
            {table(SIGNATURE)}
        </div>
    }
}
