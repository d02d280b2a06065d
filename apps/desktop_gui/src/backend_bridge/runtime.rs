//! Worker thread that downloads and decodes menu images off the UI thread.

use std::{thread, time::Duration};

use crossbeam_channel::{Receiver, Sender};
use reqwest::{header::CONTENT_TYPE, Client as HttpClient};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{CardImageDecoder, UiEvent};

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, timeout: Duration) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Info(format!(
                    "Image worker failed to start: {err}"
                )));
                tracing::error!("failed to build image worker runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let http = match HttpClient::builder().timeout(timeout).build() {
                Ok(http) => http,
                Err(err) => {
                    let _ = ui_tx.try_send(UiEvent::Info(format!(
                        "Image worker failed to start: {err}"
                    )));
                    tracing::error!("failed to build http client: {err}");
                    return;
                }
            };

            let decoder = CardImageDecoder::with_system_fonts();

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::FetchImage { item_id, url } => {
                        let event = match fetch_image_bytes(&http, &url).await {
                            Ok((bytes, content_type)) => match decoder
                                .decode(&bytes, content_type.as_deref())
                            {
                                Ok(image) => UiEvent::CardImageLoaded {
                                    item_id,
                                    url,
                                    image,
                                },
                                Err(err) => UiEvent::CardImageFailed {
                                    item_id,
                                    url,
                                    reason: format!("decode failed: {err}"),
                                },
                            },
                            Err(err) => UiEvent::CardImageFailed {
                                item_id,
                                url,
                                reason: format!("download failed: {err}"),
                            },
                        };
                        if !deliver(&ui_tx, event) {
                            break;
                        }
                    }
                }
            }
            tracing::debug!("image worker command queue closed");
        });
    });
}

/// Blocks until the UI takes the result. A dropped result would leave its card loading forever,
/// so a full queue waits instead. Returns false once the UI side is gone.
fn deliver(ui_tx: &Sender<UiEvent>, event: UiEvent) -> bool {
    match ui_tx.send(event) {
        Ok(()) => true,
        Err(_) => {
            tracing::debug!("ui event queue closed; stopping image worker");
            false
        }
    }
}

async fn fetch_image_bytes(
    http: &HttpClient,
    url: &str,
) -> Result<(Vec<u8>, Option<String>), reqwest::Error> {
    let response = http.get(url).send().await?.error_for_status()?;
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    Ok((response.bytes().await?.to_vec(), content_type))
}
