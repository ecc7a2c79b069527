use serde::{Deserialize, Serialize};

/// Opaque user identifier, issued by the identity collaborator after sign-in.
///
/// The core never inspects it; callers pass it explicitly instead of reading
/// an ambient current-user singleton.
pub type UserId = String;

/// Signed-in user as handed over by the identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub photo_url: Option<String>,
}
