// netwatch - detail rendering and export for captured network/state records
//
// Given one captured record (an intercepted HTTP request or a dispatched
// action) this crate builds:
// - a filtered, sectioned view of its attributes
// - a plain-text export report for sharing or copying
// - a status badge (color + short labels)
//
// Architecture:
// - record: classification and normalization of raw capture JSON
// - filter: reserved-attribute exclusion
// - sections: display rows and export blocks per section
// - export: report composition and copy targets
// - status: badge color bucketing
// - share / clipboard: the side-effecting sinks, failures contained
// - tui: terminal detail screen

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod detail;
pub mod export;
pub mod filter;
pub mod logging;
pub mod record;
pub mod sections;
pub mod share;
pub mod status;
pub mod tui;
pub mod util;

pub use detail::DetailView;
pub use export::{compose_action_report, compose_report, export_record};
pub use filter::{filter_attributes, ExclusionSet};
pub use record::{classify, LogRecord, RecordKind};
pub use sections::SectionFormatter;
pub use status::{color_for, Badge, StatusColor};
