//! Chat message model, raw-record ingestion and shared lexicon tables

mod config;
mod error;
pub mod ingest;
pub mod lexicon;
mod types;

pub use config::{ChatlogConfig, Config, Locale, SummaryConfig};
pub use error::{Error, Result};
pub use ingest::{Envelope, locate_messages, parse_messages};
pub use types::{MSG_TYPE_IMAGE, MSG_TYPE_SHARE, MSG_TYPE_TEXT, Message, Reference, Share};
