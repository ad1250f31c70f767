use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for `POST /member`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMember {
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// Request body for `PUT /member/{id}`. Every field is required: an update
/// overwrites the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateMember {
    pub name: String,
    pub email: String,
    pub age: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            email: member.email,
            age: member.age,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
