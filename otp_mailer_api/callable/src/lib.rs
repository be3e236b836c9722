//! HTTP server exposing the otp mailer as a callable function.
//!
//! Callable functions receive their argument as `{"data": ...}` and answer
//! with `{"result": ...}` on success or `{"error": {"status", "message"}}`
//! if the call itself could not be processed.

use std::net::IpAddr;

use axum::Router;
use otp_mailer_core_otp_contracts::OtpEmailService;
use tokio::net::TcpListener;
use tracing::info;

mod errors;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct CallableServer<Otp> {
    otp: Otp,
}

impl<Otp> CallableServer<Otp>
where
    Otp: OtpEmailService,
{
    pub fn new(otp: Otp) -> Self {
        Self { otp }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        info!("Listening on {}", listener.local_addr()?);
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::otp::router(self.otp.into()))
            .fallback(routes::not_found);

        // outermost last: the trace span needs the request id
        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
