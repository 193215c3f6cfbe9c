pub mod colors;
pub mod initials;
pub mod url;

use crate::config::AvatarSettings;

/// The profile fields an avatar is derived from.
#[derive(Clone, Copy, Debug, Default)]
pub struct Profile<'a> {
    pub display_name: Option<&'a str>,
    pub avatar_path: Option<&'a str>,
}

/// What a profile view should draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Avatar {
    Image { url: String },
    /// Initials on a solid background, when there is no image.
    Placeholder { initials: String, color: &'static str },
}

/// Image if the avatar reference resolves, otherwise an initials placeholder.
pub fn avatar_for(profile: &Profile<'_>, settings: &AvatarSettings) -> Avatar {
    match url::resolve_avatar_url(profile.avatar_path, &settings.backend_url) {
        Some(url) => Avatar::Image { url },
        None => Avatar::Placeholder {
            initials: initials::initials(profile.display_name),
            color: colors::avatar_color(profile.display_name),
        },
    }
}
