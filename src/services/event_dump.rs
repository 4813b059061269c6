//! Delivery event exports.

use crate::endpoints;
use crate::models::{
    DumpRef, EventDumpCreated, EventDumpInfo, EventDumpList, EventDumpRequest, OperationStatus,
    Pagination,
};
use crate::{Client, Result};

/// Operations under `event-dump/*`, obtained from [`Client::event_dump`].
///
/// Exports are prepared asynchronously: [`create`](Self::create) returns a
/// `dump_id`, and [`get`](Self::get) reports a download URL once the dump
/// status reaches `complete`.
#[derive(Debug, Clone, Copy)]
pub struct EventDumpApi<'a> {
    client: &'a Client,
}

impl<'a> EventDumpApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        EventDumpApi { client }
    }

    /// Requests a new export of delivery events.
    pub async fn create(&self, request: EventDumpRequest) -> Result<EventDumpCreated> {
        self.client.call(endpoints::EVENT_DUMP_CREATE, &request).await
    }

    /// Fetches the state of one export, including the download URL when
    /// ready.
    pub async fn get(&self, dump_id: &str) -> Result<EventDumpInfo> {
        self.client
            .call(endpoints::EVENT_DUMP_GET, &dump_ref(dump_id))
            .await
    }

    /// Lists known exports, newest first.
    pub async fn list(&self, page: Pagination) -> Result<EventDumpList> {
        self.client.call(endpoints::EVENT_DUMP_LIST, &page).await
    }

    /// Deletes a finished or pending export.
    pub async fn delete(&self, dump_id: &str) -> Result<OperationStatus> {
        self.client
            .call(endpoints::EVENT_DUMP_DELETE, &dump_ref(dump_id))
            .await
    }
}

fn dump_ref(dump_id: &str) -> DumpRef {
    DumpRef {
        dump_id: dump_id.to_string(),
    }
}
