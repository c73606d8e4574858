// ── API → domain conversion ──

use ghview_api::UserResponse;

use crate::model::Profile;

impl From<UserResponse> for Profile {
    fn from(user: UserResponse) -> Self {
        Profile::new(user.login, user.name, user.avatar_url)
    }
}
