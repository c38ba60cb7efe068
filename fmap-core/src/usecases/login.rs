use super::prelude::*;

pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

pub fn login_with_username<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    repo.try_get_user_by_username(login.username)
        .map_err(Error::Repo)
        .and_then(|user| {
            if let Some(u) = user {
                if u.password.verify(login.password) {
                    Ok(u)
                } else {
                    Err(Error::Credentials)
                }
            } else {
                Err(Error::Credentials)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::{
        super::{register::*, tests::MockDb},
        *,
    };

    #[test]
    fn login_with_valid_credentials() {
        let db = MockDb::default();
        create_new_user(
            &db,
            NewUser {
                username: "foo".into(),
                first_name: String::new(),
                email: "foo@bar.de".parse().unwrap(),
                password: "secret1".into(),
            },
        )
        .unwrap();
        let user = login_with_username(
            &db,
            &Credentials {
                username: "foo",
                password: "secret1",
            },
        )
        .unwrap();
        assert_eq!(user.username, "foo");
    }

    #[test]
    fn login_with_invalid_credentials() {
        let db = MockDb::default();
        create_new_user(
            &db,
            NewUser {
                username: "foo".into(),
                first_name: String::new(),
                email: "foo@bar.de".parse().unwrap(),
                password: "secret1".into(),
            },
        )
        .unwrap();
        assert!(matches!(
            login_with_username(
                &db,
                &Credentials {
                    username: "foo",
                    password: "wrong",
                }
            ),
            Err(Error::Credentials)
        ));
        assert!(matches!(
            login_with_username(
                &db,
                &Credentials {
                    username: "nobody",
                    password: "secret1",
                }
            ),
            Err(Error::Credentials)
        ));
    }
}
