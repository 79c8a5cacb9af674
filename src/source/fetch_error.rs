use crate::robots::RobotsError;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP Error Status Code = {0}")]
    HttpError(u16),

    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    #[error(transparent)]
    RobotsError(#[from] RobotsError),
}
