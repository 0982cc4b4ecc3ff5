//! Grid Container Bindings
//!
//! Per-entity wiring of a list endpoint into the paginated grid: which
//! columns to show, which can be filtered, and how a raw server row
//! becomes a displayable record.

use std::fmt;

use crate::models::{field_text, ColumnDescriptor, ColumnKind, Projection, RawRow, RowRecord};
use crate::query::detail_href;

/// Everything a grid needs to know about one entity list
#[derive(Clone, Copy)]
pub struct GridBinding {
    pub title: &'static str,
    pub endpoint: &'static str,
    /// Display headers, in order. Header clicks sort by these names.
    pub columns: &'static [&'static str],
    /// Empty when the entity has no structured filter
    pub filter_columns: &'static [ColumnDescriptor],
    pub default_sort: &'static str,
    pub projection: Projection,
}

impl fmt::Debug for GridBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridBinding")
            .field("title", &self.title)
            .field("endpoint", &self.endpoint)
            .field("default_sort", &self.default_sort)
            .finish_non_exhaustive()
    }
}

impl GridBinding {
    pub fn has_filter(&self) -> bool {
        !self.filter_columns.is_empty()
    }
}

// ========================
// Systems
// ========================

pub const SYSTEMS: GridBinding = GridBinding {
    title: "Systems",
    endpoint: "/api/systems.json",
    columns: &[
        "Machine Name",
        "Comment",
        "Agent Version",
        "OS",
        "Manufacturer",
        "Model",
        "Last Seen",
        "First Seen",
    ],
    filter_columns: &[],
    default_sort: "Last Seen",
    projection: project_system,
};

fn project_system(row: &RawRow) -> RowRecord {
    RowRecord::new()
        .link(
            "Machine Name",
            detail_href("/systeminfo", "uuid", &field_text(row, "System")),
            field_text(row, "MachineName"),
        )
        .text("Comment", field_text(row, "Comment"))
        .text("Agent Version", field_text(row, "AgentVersion"))
        .text("OS", field_text(row, "OSHumanName"))
        .text("Manufacturer", field_text(row, "Manufacturer"))
        .text("Model", field_text(row, "Model"))
        .text("Last Seen", field_text(row, "LastSeen"))
        .text("First Seen", field_text(row, "FirstSeen"))
}

// ========================
// Executables
// ========================

fn product_options() -> &'static [&'static str] {
    &[
        "Windows Search",
        "Windows Installer - Unicode",
        "VMware Tools",
        "Sysinternals Debugview",
        "Summit Route EPP",
        "Process Explorer",
        "Microsoft Windows Operating System",
        "Microsoft Visual Studio 2013",
        "Google Update",
        "Google Chrome",
        "",
    ]
}

fn company_options() -> &'static [&'static str] {
    &[
        "VMware, Inc.",
        "Sysinternals - www.sysinternals.com",
        "Sysinternals",
        "Summit Route",
        "Microsoft Corporation",
        "Google Inc.",
        "",
    ]
}

fn signer_options() -> &'static [&'static str] {
    &["Google Inc", "Microsoft Corporation", "Microsoft Windows", "VMware, Inc.", ""]
}

const EXECUTABLE_FILTERS: &[ColumnDescriptor] = &[
    ColumnDescriptor::new("Path", ColumnKind::Text),
    ColumnDescriptor::new("LastSeen", ColumnKind::Date),
    ColumnDescriptor::new("FirstSeen", ColumnKind::Date),
    ColumnDescriptor::new("ProductName", ColumnKind::TextOptions(product_options)),
    ColumnDescriptor::new("CompanyName", ColumnKind::TextOptions(company_options)),
    ColumnDescriptor::new("Count", ColumnKind::Int),
    ColumnDescriptor::new("Signer", ColumnKind::TextOptions(signer_options)),
];

pub const EXECUTABLES: GridBinding = GridBinding {
    title: "Executables",
    endpoint: "/api/files.json",
    columns: &[
        "Path",
        "Last Seen",
        "First Seen",
        "Product Name",
        "Company Name",
        "Count",
        "Signer",
    ],
    filter_columns: EXECUTABLE_FILTERS,
    default_sort: "Last Seen",
    projection: project_executable,
};

fn project_executable(row: &RawRow) -> RowRecord {
    RowRecord::new()
        .link(
            "Path",
            detail_href("/fileinfo", "sha256", &field_text(row, "Sha256")),
            field_text(row, "FilePath"),
        )
        .text("Last Seen", field_text(row, "LastSeen"))
        .text("First Seen", field_text(row, "FirstSeen"))
        .text("Product Name", field_text(row, "ProductName"))
        .text("Company Name", field_text(row, "CompanyName"))
        .text("Count", field_text(row, "NumSystems"))
        .text("Signer", field_text(row, "SignerSubjectShortName"))
}

// ========================
// Process Events
// ========================

pub const PROCESS_EVENTS: GridBinding = GridBinding {
    title: "Process Events",
    endpoint: "/api/processes.json",
    columns: &["Path", "Command", "Time"],
    filter_columns: &[],
    default_sort: "Time",
    projection: project_process_event,
};

fn project_process_event(row: &RawRow) -> RowRecord {
    RowRecord::new()
        .link(
            "Path",
            detail_href("/fileinfo", "sha256", &field_text(row, "Sha256")),
            field_text(row, "FilePath"),
        )
        .text("Command", field_text(row, "CommandLine"))
        .text("Time", field_text(row, "EventTime"))
}
