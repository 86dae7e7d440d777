use roster_business::{BusinessConfig, USER_MANAGEMENT_BASE, register_user_management};
use roster_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        Self::at(config, USER_MANAGEMENT_BASE)
    }

    /// Starts the router at `initial_href` instead of the users screen.
    pub fn at(config: BusinessConfig, initial_href: &str) -> Self {
        let mut ctx = StateCtx::new();
        register_user_management(&mut ctx, config, initial_href);
        Self { ctx }
    }

    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url))
    }
}
