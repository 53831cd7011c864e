//! User records and the payloads that create and modify them.
//!
//! A [`User`] is only ever constructed by the repository, which assigns its
//! [`UserId`]. Callers submit a [`NewUser`] to create a record and a
//! [`UserPatch`] to change one.
//!
//! ## Partial updates
//!
//! [`User::apply_patch`] overwrites a field only when the patch carries a
//! non-empty value for it. An omitted field and an empty string are both
//! no-ops, so a field can never be cleared through an update.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::types::ids::UserId;

/// A stored directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// The auto-generated id of the user
    #[schema(value_type = String)]
    pub id: UserId,
    /// The first name of the user
    pub first_name: String,
    /// The last name of the user
    pub last_name: String,
    /// The email of the user
    pub email: String,
    /// The mobile number of the user
    pub mobile: String,
    /// The address of the user
    pub address: String,
    /// The pincode of the user
    pub pincode: String,
}

impl User {
    pub fn new(id: UserId, fields: NewUser) -> Self {
        let NewUser {
            first_name,
            last_name,
            email,
            mobile,
            address,
            pincode,
        } = fields;

        Self {
            id,
            first_name,
            last_name,
            email,
            mobile,
            address,
            pincode,
        }
    }

    /// Merge a partial update into this record. The id is never touched.
    pub fn apply_patch(&mut self, patch: UserPatch) {
        let UserPatch {
            first_name,
            last_name,
            email,
            mobile,
            address,
            pincode,
        } = patch;

        merge_field(&mut self.first_name, first_name);
        merge_field(&mut self.last_name, last_name);
        merge_field(&mut self.email, email);
        merge_field(&mut self.mobile, mobile);
        merge_field(&mut self.address, address);
        merge_field(&mut self.pincode, pincode);
    }
}

fn merge_field(slot: &mut String, value: Option<String>) {
    if let Some(value) = value.filter(|value| !value.is_empty()) {
        *slot = value;
    }
}

/// Body of a create request.
///
/// Missing fields default to the empty string. Presence checks belong to
/// the client; an `id` or any unknown key in the body is ignored.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema,
)]
#[serde(default)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub address: String,
    pub pincode: String,
}

/// Body of an update request. `None` and `Some("")` leave a field as is.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema,
)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
}
