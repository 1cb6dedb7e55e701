pub mod breadcrumb;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod overlay;
pub mod presence;
pub mod toggle;
pub mod transition;

pub use config::ShellConfig;
pub use connectivity::{ConnectivityPlatform, ConnectivityStore, PlatformWatch, Subscription};
pub use error::{ConfigError, ConnectivityError};
pub use overlay::{FrameDriver, OverlayController, OverlaySnapshot, Timer, TransitionDriver};
pub use presence::{Phase, Presence, TransitionTicket};
pub use transition::{Direction, Easing, Pose, TransitionConfig};
