use crate::utility::shutdown::shutdown_signal;
use axum::Router;
use eyre::Report;
use fxproxy_primitives::models::app_config::AppConfig;
use std::net::SocketAddr;

pub async fn serve(router: Router, config: &AppConfig) -> Result<(), Report> {
    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .map_err(|e| eyre::eyre!("Invalid bind address: {}", e))?;

    tracing::info!("available at http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);

    axum::serve(
        tokio::net::TcpListener::bind(&addr).await?,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}
