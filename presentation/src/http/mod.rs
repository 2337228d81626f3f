//! HTTP boundary
//!
//! Routes, handlers, and the mapping from pipeline errors to status codes.
//!
//! | Route | Method | Description |
//! |-------|--------|-------------|
//! | `/api/generate-domains` | POST | Validate the body and return `{ "suggestions": [...] }` |
//! | `/health` | GET | Liveness probe, returns `ok` |

pub mod error;
pub mod handlers;
pub mod router;

pub use error::{ApiError, ErrorBody};
pub use handlers::{AppState, GenerateDomainsResponse};
pub use router::{GENERATE_DOMAINS_PATH, router};
