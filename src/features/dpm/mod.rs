//! DPM server integration shared by the page controllers.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/users` | Directory of names, ids and the current user id |
//! | GET | `/dpm/all` | All reports |
//! | GET | `/dpm/approve` | Reports awaiting approval |
//! | POST | `/dpm` | Create a report |
//! | POST | `/dpm/approve/:id` | Approve a report, body `{points, name}` |
//! | POST | `/dpm/deny/:id` | Deny a report |

pub mod clients;
pub mod dtos;
pub mod models;
pub mod session;

pub use clients::{DpmApi, DpmApiClient};
pub use session::SessionContext;
