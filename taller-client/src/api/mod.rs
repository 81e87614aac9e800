//! Role-scoped API surfaces
//!
//! One typed surface per dashboard role. Every call resolves the
//! session token first; without one the request is never issued and
//! the caller gets `ClientError::MissingSession`.

mod admin;
mod staff;
mod user;

pub use admin::AdminApi;
pub use staff::StaffApi;
pub use user::UserApi;

use crate::{ClientError, ClientResult, SessionProvider};
use std::sync::Arc;

fn require_token(session: &Arc<dyn SessionProvider>) -> ClientResult<String> {
    session.token().ok_or(ClientError::MissingSession)
}
