//! End-to-end tests across handles, formats and entities
//!
//! - Materializing inputs delivered as streams, files and base64
//! - Negotiating formats from the catalog
//! - Storing complex outputs and submitting jobs

mod tests_handle_materialization;
mod tests_format_negotiation;
mod tests_process_io;
