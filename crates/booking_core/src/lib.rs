//! Booking flow core: the screen state machine for the match ticket app,
//! its catalog input and the projections/asset helpers used by front-ends.

pub mod assets;
pub mod catalog;
pub mod flow;
pub mod logos;
pub mod view;

pub use assets::{resolve_team_image, AssetSource, DirectoryAssets, ResolvedImage};
pub use catalog::MatchCatalog;
pub use flow::{BookingFlow, FlowSettings, LogoutPolicy, Screen, SessionSnapshot, TicketIdAllocator};
pub use logos::{FallbackStyle, Placeholder};
pub use view::{seat_label, ScreenView, SessionView};
