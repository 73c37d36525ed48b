//! Transport layer: wire-format details of the gateway's HTTP API.

mod send;

pub use send::{build_send_url, encode_send_query};
