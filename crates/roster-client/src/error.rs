use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{method} {path} failed: {status} {body}")]
    Status {
        method: String,
        path: String,
        status: StatusCode,
        body: String,
    },
    #[error("error decoding response from {path}: {message}")]
    Decode { path: String, message: String },
    #[error("error encoding request payload: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("refusing to use http:// without --insecure: {addr}")]
    InsecureAddress { addr: String },
    #[error("user {login} has no id")]
    MissingId { login: String },
    #[error("{failed} of {total} user deletions failed")]
    BatchDelete { failed: usize, total: usize },
}
