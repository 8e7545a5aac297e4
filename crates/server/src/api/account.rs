use dioxus::prelude::*;
use shared_types::UserProfile;

/// Fetch the signed-in partner user's profile (language, organization).
#[server]
pub async fn get_user_profile() -> Result<UserProfile, ServerFnError> {
    use super::to_server_fn_error;

    crate::upstream::get_json::<UserProfile>("/users/profile")
        .await
        .map_err(to_server_fn_error)
}
