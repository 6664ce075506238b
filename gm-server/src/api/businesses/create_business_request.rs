use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateBusinessRequest {
    pub name: String,
}
