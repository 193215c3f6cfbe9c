pub mod avatar;
pub mod config;

pub use avatar::colors::{avatar_color, AvatarColor, PALETTE};
pub use avatar::initials::initials;
pub use avatar::url::resolve_avatar_url;
pub use avatar::{avatar_for, Avatar, Profile};
pub use config::AvatarSettings;
