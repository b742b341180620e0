use anyhow::Result;
use std::future::Future;
use std::pin::Pin;

use crate::model::{self, Message};
use crate::params::GenerationParams;
use crate::providers::azure::AzureClient;

pub type CompletionFuture<'a> = Pin<Box<dyn Future<Output = Result<String>> + 'a>>;

/// Narrow seam over the remote completion service: transcript in, reply text
/// out. The conversation logic never sees transport or wire-format details.
pub trait CompletionGateway {
    fn complete<'a>(&'a self, transcript: &'a [Message]) -> CompletionFuture<'a>;
}

pub struct AzureGateway<'a> {
    client: &'a AzureClient,
    params: &'a GenerationParams,
}

impl<'a> AzureGateway<'a> {
    pub fn new(client: &'a AzureClient, params: &'a GenerationParams) -> Self {
        Self { client, params }
    }
}

impl CompletionGateway for AzureGateway<'_> {
    fn complete<'a>(&'a self, transcript: &'a [Message]) -> CompletionFuture<'a> {
        Box::pin(async move { model::request_reply(self.client, self.params, transcript).await })
    }
}
