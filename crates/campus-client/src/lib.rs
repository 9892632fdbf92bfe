//! Campus Client Library
//!
//! Client SDK for the campus administration backend: authentication,
//! buildings, classrooms, and classroom types, with session state
//! persisted between invocations.
//!
//! # Architecture
//!
//! - [`storage`] - durable session store (token, user type, profile)
//! - [`http`] - configured request pipeline: bearer-token attachment,
//!   envelope unwrapping, status mapping
//! - [`api`] - one function per backend endpoint
//! - [`session`] - in-memory session context with login/logout
//! - [`nav`] - route guard and unauthorized-redirect decisions
//!
//! # Quick start
//!
//! ```no_run
//! use campus_client::{ClientConfig, HttpClient, Session, SessionStorage};
//! use campus_client::types::{LoginRequest, UserType};
//!
//! # async fn run() -> campus_client::Result<()> {
//! let storage = SessionStorage::default_location();
//! let client = HttpClient::new(&ClientConfig::from_env(), storage);
//! let mut session = Session::new(client);
//!
//! session
//!     .login(&LoginRequest {
//!         user_type: UserType::Teacher,
//!         user_name: "t1".to_string(),
//!         password: "secret".to_string(),
//!     })
//!     .await?;
//!
//! let page = campus_client::api::building::get_page(
//!     session.client(),
//!     &campus_client::types::BuildingPageQuery {
//!         page: 1,
//!         size: 10,
//!         ..Default::default()
//!     },
//! )
//! .await?;
//! println!("{} buildings", page.total);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod nav;
pub mod session;
pub mod storage;
pub mod types;

pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use http::HttpClient;
pub use nav::NavDecision;
pub use session::Session;
pub use storage::SessionStorage;
