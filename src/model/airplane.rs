use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AirplaneDto {
    pub id: String,
    pub name: String,
    pub capacity: i32,
}
