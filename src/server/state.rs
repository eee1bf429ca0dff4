use std::sync::Arc;

use crate::library::{PostcardLibrary, StoryLibrary};
use crate::tale::TaleComposer;

/// Shared handles for the request handlers. Cloning is cheap; the
/// composer and both shelves live for the whole process.
#[derive(Clone)]
pub struct AppState {
    pub composer: Arc<TaleComposer>,
    pub stories: Arc<StoryLibrary>,
    pub canvases: Arc<PostcardLibrary>,
}

impl AppState {
    pub fn new(composer: TaleComposer) -> Self {
        Self {
            composer: Arc::new(composer),
            stories: Arc::new(StoryLibrary::new()),
            canvases: Arc::new(PostcardLibrary::new()),
        }
    }
}
