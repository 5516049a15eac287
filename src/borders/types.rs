//! Border fetch communication types and line-entity bookkeeping.

use bevy::prelude::*;
use geojson::FeatureCollection;
use std::sync::{
    Arc, Mutex,
    mpsc::{Receiver, Sender},
};

/// Commands for the border fetch worker thread.
pub enum BorderFetchCommand {
    Fetch,
}

/// Results from the border fetch worker thread.
pub enum BorderFetchResult {
    Loaded(Box<FeatureCollection>),
    Failed(String),
}

/// Resource containing channels for communicating with the worker thread.
#[derive(Resource)]
pub struct BorderFetchChannels {
    pub cmd_tx: Sender<BorderFetchCommand>,
    pub res_rx: Arc<Mutex<Receiver<BorderFetchResult>>>,
}

/// Tracks the attached border line entity and its mesh, plus a parsed
/// collection waiting for the globe root to exist.
#[derive(Resource, Default)]
pub struct BorderLines {
    pub pending: Option<Box<FeatureCollection>>,
    pub entity: Option<Entity>,
    pub mesh: Option<Handle<Mesh>>,
}
