//! Provider listings feature: registration, browse, search and detail.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/` | Categories + latest approved listings |
//! | GET | `/search` | Filter approved listings by category/city |
//! | GET | `/provider/register` | Registration form |
//! | POST | `/provider/register` | Submit a listing (pending approval) |
//! | GET | `/thankyou` | Post-submission confirmation |
//! | GET | `/provider/{id}` | Listing detail |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use handlers::PagesState;
pub use services::{ManualReceiptVerifier, PaymentVerifier, ProviderService};
