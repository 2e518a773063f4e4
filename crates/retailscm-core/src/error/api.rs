// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Conversion into HTTP errors.
//!
//! ```rust,ignore
//! async fn form(ctx: RenderContext, id: String) -> masterror::AppResult<Json<View>> {
//!     let track = load(&id)?;
//!     Ok(Json(renderer.view(&mut ctx, &track)?))
//! }
//! ```

use masterror::AppError;

use super::Error;

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        match err {
            Error::LoginRequired => AppError::unauthorized(err.to_string()),
            Error::Config(_) => AppError::bad_request(err.to_string()),
            _ => AppError::internal(err.to_string())
        }
    }
}
