//! Unsubscribed address management.
//!
//! Kept for accounts that predate the suppression list; newer accounts
//! should manage addresses through [`super::suppression`] instead.

use crate::endpoints;
use crate::models::{AddressRef, OperationStatus, UnsubscribedList, UnsubscribedStatus};
use crate::{Client, Result};

/// Operations under `unsubscribed/*`, obtained from
/// [`Client::unsubscribed`].
#[derive(Debug, Clone, Copy)]
pub struct UnsubscribedApi<'a> {
    client: &'a Client,
}

impl<'a> UnsubscribedApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        UnsubscribedApi { client }
    }

    /// Marks `address` as unsubscribed from all further sends.
    pub async fn set(&self, address: &str) -> Result<OperationStatus> {
        self.client
            .call(endpoints::UNSUBSCRIBED_SET, &address_ref(address))
            .await
    }

    /// Reports whether `address` has unsubscribed.
    pub async fn check(&self, address: &str) -> Result<UnsubscribedStatus> {
        self.client
            .call(endpoints::UNSUBSCRIBED_CHECK, &address_ref(address))
            .await
    }

    /// Lists unsubscribed addresses; `address` narrows to one mailbox, `""`
    /// lists all.
    pub async fn list(&self, address: &str) -> Result<UnsubscribedList> {
        self.client
            .call(endpoints::UNSUBSCRIBED_LIST, &address_ref(address))
            .await
    }
}

fn address_ref(address: &str) -> AddressRef {
    AddressRef {
        address: address.to_string(),
    }
}
