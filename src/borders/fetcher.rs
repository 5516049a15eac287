//! Border dataset fetch worker.

use crate::borders::types::{BorderFetchChannels, BorderFetchCommand, BorderFetchResult};
use anyhow::Result;
use geojson::{FeatureCollection, GeoJson};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;

// Natural Earth 110m admin-0 boundaries as GeoJSON.
const BORDERS_URL: &str = "https://raw.githubusercontent.com/nvkelso/natural-earth-vector/master/geojson/ne_110m_admin_0_countries.geojson";

/// Start the background border fetch worker thread.
pub fn start_border_worker() -> BorderFetchChannels {
    let (cmd_tx, cmd_rx) = mpsc::channel::<BorderFetchCommand>();
    let (res_tx, res_rx) = mpsc::channel::<BorderFetchResult>();

    thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
        rt.block_on(async move {
            let client = reqwest::Client::new();

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BorderFetchCommand::Fetch => {
                        // Failures are logged where the result is drained
                        let msg = match fetch_borders(&client).await {
                            Ok(collection) => BorderFetchResult::Loaded(Box::new(collection)),
                            Err(err) => BorderFetchResult::Failed(err.to_string()),
                        };
                        let _ = res_tx.send(msg);
                    }
                }
            }
        });
    });

    BorderFetchChannels {
        cmd_tx,
        res_rx: Arc::new(Mutex::new(res_rx)),
    }
}

async fn fetch_borders(client: &reqwest::Client) -> Result<FeatureCollection> {
    let resp = client.get(BORDERS_URL).send().await?;
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        anyhow::bail!("HTTP {status} for {BORDERS_URL}");
    }
    let geojson: GeoJson = body.parse()?;
    Ok(FeatureCollection::try_from(geojson)?)
}
