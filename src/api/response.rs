use serde::Serialize;

#[derive(Serialize)]
pub struct StatusMessage {
    pub status: u16,
    pub message: String,
}

impl StatusMessage {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
pub struct StatusData<T> {
    pub status: u16,
    pub data: T,
}

#[derive(Serialize)]
pub struct Created {
    pub status: u16,
    pub message: String,
    #[serde(rename = "resourceId")]
    pub resource_id: String,
}
