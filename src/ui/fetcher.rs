//! Background fetch worker.
//!
//! The UI thread never awaits the network. Mounted screens hand a
//! [`FetchRequest`] to the worker over a bounded channel; each request runs
//! in its own task and its [`FetchOutcome`] is posted back as an
//! [`AppEvent::Fetched`].

use std::sync::mpsc as std_mpsc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::catalog::{CatalogClient, CatalogError, ProductDetail, ProductPage};
use crate::shutdown::ShutdownHandle;
use crate::ui::events::AppEvent;
use crate::ui::navigation::ScreenId;

/// Requests waiting for the worker. One per mounted screen at most.
pub const FETCH_QUEUE_DEPTH: usize = 16;

pub type FetchSender = mpsc::Sender<FetchRequest>;
pub type FetchReceiver = mpsc::Receiver<FetchRequest>;

pub fn fetch_channel() -> (FetchSender, FetchReceiver) {
    mpsc::channel(FETCH_QUEUE_DEPTH)
}

/// What a freshly mounted screen needs loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Products { screen: ScreenId },
    Product { screen: ScreenId, id: u64 },
}

impl FetchRequest {
    pub fn screen(&self) -> ScreenId {
        match self {
            FetchRequest::Products { screen } | FetchRequest::Product { screen, .. } => *screen,
        }
    }
}

/// Result of a [`FetchRequest`], still addressed to the requesting screen.
#[derive(Debug)]
pub enum FetchOutcome {
    Products {
        screen: ScreenId,
        result: Result<ProductPage, CatalogError>,
    },
    Product {
        screen: ScreenId,
        id: u64,
        result: Result<ProductDetail, CatalogError>,
    },
}

impl FetchOutcome {
    pub fn screen(&self) -> ScreenId {
        match self {
            FetchOutcome::Products { screen, .. } | FetchOutcome::Product { screen, .. } => {
                *screen
            }
        }
    }
}

/// Perform one request against the catalog.
pub async fn execute(client: &CatalogClient, request: FetchRequest) -> FetchOutcome {
    match request {
        FetchRequest::Products { screen } => FetchOutcome::Products {
            screen,
            result: client.list_products().await,
        },
        FetchRequest::Product { screen, id } => FetchOutcome::Product {
            screen,
            id,
            result: client.get_product(id).await,
        },
    }
}

/// Serve requests until the sender is dropped or shutdown is signaled.
pub async fn run_fetcher(
    client: CatalogClient,
    mut requests: FetchReceiver,
    events: std_mpsc::Sender<AppEvent>,
    shutdown: ShutdownHandle,
) {
    loop {
        let request = tokio::select! {
            _ = shutdown.wait() => break,
            request = requests.recv() => match request {
                Some(request) => request,
                None => break,
            },
        };

        debug!(?request, "fetch started");
        let client = client.clone();
        let events = events.clone();
        tokio::spawn(async move {
            let outcome = execute(&client, request).await;
            if events.send(AppEvent::Fetched(outcome)).is_err() {
                debug!("event loop closed, dropping fetch outcome");
            }
        });
    }
    debug!("fetch worker stopped");
}
