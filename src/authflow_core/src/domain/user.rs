/// Normalized profile of an authenticated user.
///
/// Produced only by translating the identity endpoint's user record into the
/// domain; equality is structural. `is_new_user` is true exactly when the
/// endpoint reported no prior authentication timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    email: String,
    first_name: String,
    last_name: String,
    is_new_user: bool,
}

impl User {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        is_new_user: bool,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            is_new_user,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn is_new_user(&self) -> bool {
        self.is_new_user
    }
}
