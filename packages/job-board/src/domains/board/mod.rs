//! Controllers that keep the shared job store in step with the jobs API.
//!
//! All three controllers of a [`Board`] write through the same [`SharedStore`].
//! None of them return errors: remote failures are logged, shown through the
//! prompter, and reported as an outcome value.

pub mod editor;
pub mod load;
pub mod moves;
pub mod mutations;

pub use editor::Editor;
pub use load::{LoadController, LoadState, LOAD_FAILED_MESSAGE};
pub use moves::{BoardController, MoveOutcome, MOVE_FAILED_MESSAGE};
pub use mutations::{
    DeleteOutcome, MutationController, SubmitOutcome, CREATE_FAILED_MESSAGE,
    DELETE_CONFIRM_QUESTION, DELETE_FAILED_MESSAGE, UPDATE_FAILED_MESSAGE,
};

use std::sync::Arc;

use crate::domains::jobs::SharedStore;
use crate::kernel::{BaseJobService, BasePrompter};

/// The store plus the controllers that write to it.
#[derive(Clone)]
pub struct Board {
    store: SharedStore,
    loader: Arc<LoadController>,
    mutations: Arc<MutationController>,
    moves: Arc<BoardController>,
}

impl Board {
    /// Board over an empty store; call `loader().start()` to fill it.
    pub fn new(service: Arc<dyn BaseJobService>, prompter: Arc<dyn BasePrompter>) -> Self {
        Self::with_store(SharedStore::default(), service, prompter)
    }

    pub fn with_store(
        store: SharedStore,
        service: Arc<dyn BaseJobService>,
        prompter: Arc<dyn BasePrompter>,
    ) -> Self {
        Self {
            loader: Arc::new(LoadController::new(store.clone(), service.clone())),
            mutations: Arc::new(MutationController::new(
                store.clone(),
                service.clone(),
                prompter.clone(),
            )),
            moves: Arc::new(BoardController::new(store.clone(), service, prompter)),
            store,
        }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn loader(&self) -> &LoadController {
        &self.loader
    }

    pub fn mutations(&self) -> &MutationController {
        &self.mutations
    }

    pub fn moves(&self) -> &BoardController {
        &self.moves
    }
}
