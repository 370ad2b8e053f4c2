use mongodb::Database;

use crate::state::preview::PreviewSlot;

/// Shared application state handed to every handler.
pub struct AppState {
    pub db: Database,
    pub preview: PreviewSlot,
}
