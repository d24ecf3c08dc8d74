//! 带校验的 json 请求体
//!
//! [`axum::Json`] 解析失败时会根据原因返回 400/415/422，而且不会调用 [`Validate`]。
//! [`ValidatedJson`] 先解析再校验，所有错误都转换成 [`AppError`]，统一返回 400。

use crate::models::err::AppError;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

/// 解析并校验 json 请求体
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}
