use super::prelude::*;

#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
}

pub fn update_profile<R: UserRepo>(
    repo: &R,
    username: &str,
    update: ProfileUpdate,
) -> Result<User> {
    let Some(mut user) = repo.try_get_user_by_username(username)? else {
        return Err(Error::UserDoesNotExist);
    };
    let ProfileUpdate {
        first_name,
        last_name,
        email,
    } = update;
    user.first_name = first_name;
    user.last_name = last_name;
    user.email = email;
    repo.update_user(&user)?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{register::*, tests::MockDb},
        *,
    };

    #[test]
    fn update_an_existing_profile() {
        let db = MockDb::default();
        create_new_user(
            &db,
            NewUser {
                username: "foo".into(),
                first_name: "Foo".into(),
                email: "foo@bar.de".parse().unwrap(),
                password: "secret1".into(),
            },
        )
        .unwrap();
        let user = update_profile(
            &db,
            "foo",
            ProfileUpdate {
                first_name: "Bar".into(),
                last_name: "Baz".into(),
                email: "new@bar.de".parse().unwrap(),
            },
        )
        .unwrap();
        assert_eq!(user.first_name, "Bar");
        assert_eq!(db.users.borrow()[0].last_name, "Baz");
        assert_eq!(db.users.borrow()[0].email.as_str(), "new@bar.de");
    }

    #[test]
    fn reject_an_update_for_an_unknown_user() {
        let db = MockDb::default();
        let err = update_profile(
            &db,
            "nobody",
            ProfileUpdate {
                first_name: String::new(),
                last_name: String::new(),
                email: "foo@bar.de".parse().unwrap(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::UserDoesNotExist));
    }
}
