//! HTTP dashboard server.
//!
//! Every connection gets its own task; all of them read the same
//! `Arc<Dataset>`. The accept loop stops on Ctrl-C.

pub mod page;
pub mod routes;

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Request;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use cupdash_core::Dataset;

pub use routes::route;

/// Serve the dashboard on `addr` until interrupted.
pub async fn serve(dataset: Arc<Dataset>, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, records = dataset.records.len(), "dashboard listening");

    loop {
        let (stream, peer) = tokio::select! {
            accepted = listener.accept() => accepted?,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down dashboard");
                return Ok(());
            }
        };

        let io = TokioIo::new(stream);
        let dataset = Arc::clone(&dataset);

        tokio::spawn(async move {
            let service = service_fn(move |req: Request<Incoming>| {
                let response = route(&dataset, req.method(), req.uri());
                async move { Ok::<_, Infallible>(response) }
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                tracing::warn!(%peer, "connection error: {err}");
            }
        });
    }
}
