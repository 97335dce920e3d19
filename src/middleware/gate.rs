//! Gate middleware: annotates every connection attempt with an authorization decision.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::models::ConnectionContext;
use crate::services::Gatekeeper;

/// Authorization decision attached to the request. Handlers must close the socket when `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserAuth(pub bool);

/// Middleware: run the gatekeeper, attach `UserAuth` and the `ConnectionContext` to the
/// request extensions, then always forward. Never rejects on its own.
pub async fn gate_connection(
    State(gatekeeper): State<Gatekeeper>,
    mut request: Request,
    next: Next,
) -> Response {
    let mut ctx = ConnectionContext::from_uri(request.uri());
    gatekeeper.annotate(&mut ctx).await;
    debug!(
        path = %ctx.path,
        has_token = ctx.token().is_some(),
        authorized = ctx.user_auth,
        "connection gated"
    );

    request.extensions_mut().insert(UserAuth(ctx.user_auth));
    request.extensions_mut().insert(ctx);
    next.run(request).await
}
