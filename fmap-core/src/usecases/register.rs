use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub first_name: String,
    pub email: EmailAddress,
    pub password: String,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    let password = u.password.parse::<Password>()?;
    if repo.try_get_user_by_username(&u.username)?.is_some() {
        return Err(Error::UserExists);
    }
    let new_user = User {
        id: Id::new(),
        username: u.username,
        first_name: u.first_name,
        last_name: String::new(),
        email: u.email,
        password,
    };
    log::debug!("Creating new user: username = {}", new_user.username);
    repo.create_user(&new_user)?;
    Ok(new_user)
}
