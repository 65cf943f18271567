use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    /// Database setup or query failed during a test.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
