//! AppEntities - Global Entity Handles
//!
//! State shared by several views lives here. State with a single owner (the
//! sidebar, the tab strip) stays with that owner instead.

use gpui::{App, AppContext, Entity, Global};

use crate::i18n::Locale;
use crate::state::i18n_state::I18nState;

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Internationalization state
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities
    pub fn init(locale: Locale, cx: &mut App) -> Self {
        Self {
            i18n: cx.new(|_| I18nState::new(locale)),
        }
    }
}
