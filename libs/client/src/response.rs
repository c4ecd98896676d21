use crate::ClientError;

pub(crate) type Response<T> = Result<T, ClientError>;

pub(crate) trait IntoResponse<T> {
    fn into_response(self, message: &str) -> Response<T>;
}

impl<T> IntoResponse<T> for Result<T, reqwest::Error> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| ClientError::ReqwestError {
            source: e,
            message: message.to_string(),
        })
    }
}

impl<T> IntoResponse<T> for Result<T, serde_json::Error> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| ClientError::SerdeJsonError {
            source: e,
            message: message.to_string(),
        })
    }
}

impl<T> IntoResponse<T> for Result<T, std::io::Error> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| ClientError::StdIoError {
            source: e,
            message: message.to_string(),
        })
    }
}

impl<T> IntoResponse<T> for Option<T> {
    fn into_response(self, message: &str) -> Response<T> {
        self.ok_or_else(|| ClientError::Option {
            message: message.to_string(),
        })
    }
}
