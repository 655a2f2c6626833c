//! Authenticated client for the Jamf classic API: bearer-token lifecycle, silent renewal,
//! and JSON/XML content negotiation in one crate.
//!
//! Every authenticated call flows through the same pipeline: the expiration guard makes sure a
//! usable bearer token is cached (acquiring one with HTTP Basic credentials when needed), the
//! dispatcher decorates and sends the request, and the decoder picks JSON or XML from the
//! response `Content-Type`.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod http;
pub mod obs;
pub mod resource;
pub mod store;

pub use client::Client;
pub use error::{Error, Result};

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::RwLock;
	pub use reqwest::{
		Client as ReqwestClient, Error as ReqwestError, Method, Request, Response, StatusCode,
	};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use url;
#[cfg(test)] use {base64 as _, color_eyre as _};
