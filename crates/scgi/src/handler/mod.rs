//! The seam where the application computes a response.
//!
//! The engine hands a complete [`ScgiRequest`] to a [`Handler`] and sends
//! back whatever it returns. [`make_handler`] adapts a plain async function
//! so simple applications never implement the trait by hand.

use std::error::Error;
use std::future::Future;

use async_trait::async_trait;

use crate::protocol::{ScgiRequest, ScgiResponse};

#[async_trait]
pub trait Handler {
    type Error: Into<Box<dyn Error + Send + Sync>>;

    async fn call(&self, request: ScgiRequest) -> Result<ScgiResponse, Self::Error>;
}

#[derive(Debug)]
pub struct HandlerFn<F> {
    f: F,
}

#[async_trait]
impl<Err, F, Fut> Handler for HandlerFn<F>
where
    F: Fn(ScgiRequest) -> Fut + Send + Sync,
    Err: Into<Box<dyn Error + Send + Sync>>,
    Fut: Future<Output = Result<ScgiResponse, Err>> + Send,
{
    type Error = Err;

    async fn call(&self, request: ScgiRequest) -> Result<ScgiResponse, Self::Error> {
        (self.f)(request).await
    }
}

pub fn make_handler<F, Err, Ret>(f: F) -> HandlerFn<F>
where
    Err: Into<Box<dyn Error + Send + Sync>>,
    Ret: Future<Output = Result<ScgiResponse, Err>>,
    F: Fn(ScgiRequest) -> Ret,
{
    HandlerFn { f }
}
