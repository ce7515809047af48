pub mod account;
pub mod companies;
pub mod contribute;
pub mod homepage;
pub mod questions;

use crate::rejections::AppError;

pub async fn not_found() -> AppError {
    AppError::NotFound
}
