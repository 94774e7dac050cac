use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("invalid background color '{0}': expected #rrggbb")] Color(String),
    #[error("bundle write failed: {0}")] Bundle(String),
}
