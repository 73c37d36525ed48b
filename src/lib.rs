//! Typed blocking Rust client for the Jasmin SMS gateway HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for
//! the gateway's query-string format, and a small client issuing the request.
//!
//! ```rust,no_run
//! use jasmin_http::{Content, Credentials, Destination, JasminClient, SendOptions, SmsRequest};
//!
//! fn main() -> Result<(), jasmin_http::JasminError> {
//!     let client = JasminClient::builder(Credentials::new("foo", "bar")?)
//!         .endpoint("http://127.0.0.1:1401/send")
//!         .build()?;
//!     let request = SmsRequest::new(
//!         Destination::new("+27821234567")?,
//!         Content::new("Hello world!")?,
//!         SendOptions::default(),
//!     );
//!     let body = client.send(request)?;
//!     println!("{body}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, HttpStatusError, JasminClient, JasminClientBuilder, JasminError};
pub use domain::{
    CallbackUrl, Coding, Content, DeliveryReceipt, Destination, DlrLevel, DlrMethod, Password,
    PhoneNumber, Priority, SendOptions, SenderId, SmsRequest, Username, ValidationError,
};
