//! Request context
//!
//! 每个请求携带的身份上下文。由 ContextMiddleware 在进入 handler
//! 之前写入 request extensions，handler 直接以 extractor 形式取用。

use actix_web::dev::Payload;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{Ready, ready};

use crate::errors::{Result, WorkdeckError};

use super::models::{AuthenticatedUser, Workspace};

/// Identity attached to a single request
///
/// Both fields are either present together or absent together. An absent
/// pair means the request is unauthenticated, which is a normal state
/// and not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestContext {
    user: Option<AuthenticatedUser>,
    workspace: Option<Workspace>,
}

impl RequestContext {
    /// Context for an unauthenticated request
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context for a signed-in user inside their workspace
    ///
    /// The user must actually belong to the workspace. A mismatched pair
    /// is rejected instead of silently attaching a foreign tenant.
    pub fn authenticated(user: AuthenticatedUser, workspace: Workspace) -> Result<Self> {
        if user.workspace_id != workspace.id {
            return Err(WorkdeckError::identity_rejected(format!(
                "User {} belongs to workspace {}, not {}",
                user.id, user.workspace_id, workspace.id
            )));
        }
        Ok(Self {
            user: Some(user),
            workspace: Some(workspace),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.user.as_ref()
    }

    pub fn workspace(&self) -> Option<&Workspace> {
        self.workspace.as_ref()
    }

    /// Email for log lines, `anonymous` when signed out
    pub fn actor(&self) -> &str {
        self.user.as_ref().map_or("anonymous", |u| u.email.as_str())
    }
}

impl FromRequest for RequestContext {
    type Error = Error;
    type Future = Ready<std::result::Result<Self, Self::Error>>;

    /// Extraction never fails. A request the middleware did not see, or
    /// one the resolver declined, extracts as [`RequestContext::anonymous`].
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(req
            .extensions()
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_else(RequestContext::anonymous)))
    }
}
