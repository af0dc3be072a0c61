//! User entity, role enumeration and the identity carried in session tokens.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Closed set of roles, stored and transmitted as small integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Administrator managing the vacation catalogue
    Admin = 1,
    /// Regular registered user
    User = 2,
}

impl Role {
    /// Numeric identifier of the role
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Looks up a role by its numeric identifier
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Role::Admin),
            2 => Some(Role::User),
            _ => None,
        }
    }

    /// Parses a numeric-looking string such as `"1"` into a role
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<i64>().ok().and_then(Self::from_id)
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.id())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // The role may have crossed a serialization boundary as `1` or `"1"`.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawRole {
            Number(i64),
            Text(String),
        }

        match RawRole::deserialize(deserializer)? {
            RawRole::Number(id) => {
                Role::from_id(id).ok_or_else(|| D::Error::custom(format!("unknown role id {}", id)))
            }
            RawRole::Text(raw) => {
                Role::parse(&raw).ok_or_else(|| D::Error::custom(format!("unknown role id {:?}", raw)))
            }
        }
    }
}

/// Sanitized user payload embedded in and recovered from a session token
///
/// There is deliberately no password field on this type: it is built from a
/// [`User`] by dropping the digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(rename = "roleId")]
    pub role: Role,
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Persisted user record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Database identifier
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Login email, unique across users
    pub email: String,
    /// HMAC digest of the password, never the plaintext
    pub password_digest: String,
    pub role: Role,
}

impl User {
    /// Builds the token payload for this user
    pub fn identity(&self) -> Identity {
        Identity::from(self)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// User record about to be inserted; the id is assigned by storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_digest: String,
    pub role: Role,
}

impl NewUser {
    /// Attaches the storage-assigned id
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password_digest: self.password_digest,
            role: self.role,
        }
    }
}

/// Registration input with the plaintext password
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Login input
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
