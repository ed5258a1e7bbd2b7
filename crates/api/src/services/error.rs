use courier_database::StoreError;

#[derive(Debug)]
pub enum ServiceError {
    BadRequest(String),
    Database(StoreError),
    Internal(String),
}

impl ServiceError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        Self::Database(err)
    }
}

impl From<ServiceError> for crate::ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::BadRequest(msg) => crate::ApiError::bad_request(msg),
            ServiceError::Database(db_err) => {
                tracing::error!("Database error: {}", db_err);
                crate::ApiError::internal_server_error("Database operation failed")
            }
            ServiceError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                crate::ApiError::internal_server_error(msg)
            }
        }
    }
}
