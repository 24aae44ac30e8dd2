use crate::{
    configuration::Settings,
    utils::{generator::Generator, storage::JsonStorage, store::Store},
};
use axum::extract::FromRef;

#[derive(FromRef, Clone)]
pub struct AppState {
    pub store: Store,
    pub storage: JsonStorage,
    pub generator: Generator,
}

impl AppState {
    pub fn new(config: &Settings) -> Self {
        AppState {
            store: Store::new(),
            storage: JsonStorage::new(&config.storage),
            generator: Generator::new(config.generator.seed),
        }
    }
}
