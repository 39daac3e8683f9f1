//! HTTP API module for the Ferie Engine.
//!
//! This module provides the REST API endpoints for balance reports, leave
//! request simulation, holiday calendars and working-day listings.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BalanceInput, BalanceRequest, HolidaysQuery, LeaveEntryRequest, SimulationRequest,
    WorkingDaysQuery,
};
pub use response::{ApiError, ApiErrorResponse, BalanceResponse};
pub use state::AppState;

/// Serves the API on an already bound listener until the server stops.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(addr = %addr, "Ferie engine API listening");
    }
    axum::serve(listener, create_router(state)).await
}
