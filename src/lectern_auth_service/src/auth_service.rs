use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, request},
    middleware,
    routing::{get, post, put},
};
use lectern_adapters::{AllowedOrigins, Settings};
use lectern_axum::{
    AppState,
    gate::{authenticate, require_admin},
    routes::{
        forgot_password, google_callback, google_login, list_users, login, logout, my_profile,
        platform_stats, register, reset_password, update_role, verify,
    },
};
use lectern_core::{EmailClient, IdentityProvider, UserStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Router builder for the whole authentication surface.
///
/// Stores and clients implement `Clone` via internal `Arc`s, so the
/// shared state clones cheaply into every handler.
pub struct AuthService {
    router: Router,
}

impl AuthService {
    pub fn new<U, E, P>(
        user_store: U,
        email_client: E,
        identity_provider: P,
        settings: Arc<Settings>,
    ) -> Self
    where
        U: UserStore + Clone + 'static,
        E: EmailClient + Clone + 'static,
        P: IdentityProvider + Clone + 'static,
    {
        let state = AppState::new(user_store, email_client, identity_provider, settings);

        let public = Router::new()
            .route("/user/register", post(register::<U, E, P>))
            .route("/user/verify", post(verify::<U, E, P>))
            .route("/user/login", post(login::<U, E, P>))
            .route("/user/forgot", post(forgot_password::<U, E, P>))
            .route("/user/reset", post(reset_password::<U, E, P>))
            .route("/auth/google", get(google_login::<U, E, P>))
            .route("/auth/google/callback", get(google_callback::<U, E, P>))
            .route("/auth/logout", get(logout::<U, E, P>));

        let protected = Router::new()
            .route("/user/me", get(my_profile::<U, E, P>))
            .route("/user/{id}/role", put(update_role::<U, E, P>))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                authenticate::<U, E, P>,
            ));

        // Admin routes stack the role gate inside the session gate.
        let admin = Router::new()
            .route("/admin/stats", get(platform_stats::<U, E, P>))
            .route("/admin/users", get(list_users::<U, E, P>))
            .layer(middleware::from_fn(require_admin))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                authenticate::<U, E, P>,
            ));

        let router = public.merge(protected).merge(admin).with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Finish the router, optionally restricted to the configured CORS
    /// origins.
    pub fn into_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run as a standalone server on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.into_router(allowed_origins);

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
