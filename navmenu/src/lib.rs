pub(crate) mod affordance;
pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod policy;
pub(crate) mod state;

pub use affordance::Affordance;
pub use config::{MenuConfig, DEFAULT_MOBILE_BREAKPOINT};
pub use error::{NavMenuError, NavMenuResult};
pub use policy::{is_root_path, should_synthesize_control, ClickLocation};
pub use state::MenuState;
