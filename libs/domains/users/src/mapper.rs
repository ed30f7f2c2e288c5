//! Conversions between wire DTOs and the stored entity.

use crate::models::{User, UserRequest, UserResponse};

/// New entity without an id; the store assigns one on save.
pub fn to_entity(request: UserRequest) -> User {
    User {
        id: None,
        name: request.name.unwrap_or_default(),
        email: request.email.unwrap_or_default(),
        password: request.password.unwrap_or_default(),
    }
}

/// Copy every present request field onto `user`. The id is never touched.
pub fn apply(request: UserRequest, user: &mut User) {
    if let Some(name) = request.name {
        user.name = name;
    }
    if let Some(email) = request.email {
        user.email = email;
    }
    if let Some(password) = request.password {
        user.password = password;
    }
}

pub fn to_response(user: &User) -> UserResponse {
    UserResponse {
        id: user.id.clone().unwrap_or_default(),
        name: user.name.clone(),
        email: user.email.clone(),
        password: user.password.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> User {
        User {
            id: Some("abc".to_string()),
            name: "usuario".to_string(),
            email: "usuario@email.com".to_string(),
            password: "usuario123".to_string(),
        }
    }

    #[test]
    fn test_to_entity_has_no_id() {
        let user = to_entity(UserRequest::new("usuario", "usuario@email.com", "usuario123"));
        assert_eq!(user.id, None);
        assert_eq!(user.email, "usuario@email.com");
    }

    #[test]
    fn test_request_fields_survive_entity_and_response() {
        let request = UserRequest::new("usuario", "usuario@email.com", "usuario123");
        let response = to_response(&to_entity(request.clone()));

        assert_eq!(Some(response.name), request.name);
        assert_eq!(Some(response.email), request.email);
        assert_eq!(Some(response.password), request.password);
    }

    #[test]
    fn test_apply_overwrites_present_fields_only() {
        let mut user = stored();
        apply(
            UserRequest {
                email: Some("novo@email.com".to_string()),
                ..Default::default()
            },
            &mut user,
        );

        assert_eq!(user.id.as_deref(), Some("abc"));
        assert_eq!(user.name, "usuario");
        assert_eq!(user.email, "novo@email.com");
        assert_eq!(user.password, "usuario123");
    }

    #[test]
    fn test_to_response_copies_every_field() {
        let response = to_response(&stored());
        assert_eq!(
            response,
            UserResponse {
                id: "abc".to_string(),
                name: "usuario".to_string(),
                email: "usuario@email.com".to_string(),
                password: "usuario123".to_string(),
            }
        );
    }
}
