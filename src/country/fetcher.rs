//! Country data fetch worker.

use crate::country::types::{
    CountryFetchChannels, CountryFetchCommand, CountryFetchResult, CountryRecord,
    merge_country_responses,
};
use anyhow::Result;
use std::sync::{Arc, Mutex, mpsc};
use std::thread;

const COUNTRIES_ENDPOINT: &str = "https://restcountries.com/v3.1/all";

// The endpoint caps the response size per request, so the record is
// assembled from two field subsets merged client-side by cca3.
const PRIMARY_FIELDS: &str =
    "name,cca3,latlng,capital,population,region,subregion,flag,flags,currencies";
const SUPPLEMENT_FIELDS: &str = "cca3,languages,borders,area,maps,timezones";

/// Start the background country fetch worker thread.
pub fn start_country_worker() -> CountryFetchChannels {
    let (cmd_tx, cmd_rx) = mpsc::channel::<CountryFetchCommand>();
    let (res_tx, res_rx) = mpsc::channel::<CountryFetchResult>();

    thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
        rt.block_on(async move {
            let client = reqwest::Client::new();

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    CountryFetchCommand::FetchAll => {
                        // Failures are logged where the result is drained
                        let msg = match fetch_all_countries(&client).await {
                            Ok(countries) => CountryFetchResult::Loaded(countries),
                            Err(err) => CountryFetchResult::Failed(err.to_string()),
                        };
                        let _ = res_tx.send(msg);
                    }
                }
            }
        });
    });

    CountryFetchChannels {
        cmd_tx,
        res_rx: Arc::new(Mutex::new(res_rx)),
    }
}

async fn fetch_all_countries(client: &reqwest::Client) -> Result<Vec<CountryRecord>> {
    let primary = fetch_field_subset(client, PRIMARY_FIELDS);
    let supplement = fetch_field_subset(client, SUPPLEMENT_FIELDS);
    let (primary, supplement) = tokio::try_join!(primary, supplement)?;
    Ok(merge_country_responses(primary, supplement))
}

async fn fetch_field_subset(client: &reqwest::Client, fields: &str) -> Result<Vec<CountryRecord>> {
    let url = format!("{COUNTRIES_ENDPOINT}?fields={fields}");
    let resp = client.get(&url).send().await?;
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        anyhow::bail!("HTTP {status} for {url}");
    }
    Ok(serde_json::from_str(&body)?)
}
