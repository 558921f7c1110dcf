//! Message service
//!
//! Handles message creation, fetching, listing, editing, and deletion.

use chrono::NaiveDate;
use tracing::{info, instrument};
use validator::Validate;

use triage_core::{Message, MessageId};

use crate::dto::{CreateMessageRequest, MessageResponse, UpdateMessageRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Date format accepted in requests: `YYYY-MM-DD`
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new message
    #[instrument(skip(self, request))]
    pub async fn create_message(
        &self,
        request: CreateMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        request.validate()?;
        let date = parse_date(&request.date)?;

        let message = Message::new(date, request.status, request.text);
        self.ctx.message_repo().create(&message).await?;

        info!(message_id = %message.id, "Message created");

        Ok(MessageResponse::from(&message))
    }

    /// Get message by ID
    #[instrument(skip(self))]
    pub async fn get_message(&self, id: MessageId) -> ServiceResult<MessageResponse> {
        let message = self
            .ctx
            .message_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Message", id.to_string()))?;

        Ok(MessageResponse::from(&message))
    }

    /// List all messages in insertion order
    #[instrument(skip(self))]
    pub async fn list_messages(&self) -> ServiceResult<Vec<MessageResponse>> {
        let messages = self.ctx.message_repo().list_all().await?;
        Ok(messages.iter().map(MessageResponse::from).collect())
    }

    /// Update message date, status, and text; the id is immutable
    #[instrument(skip(self, request))]
    pub async fn update_message(
        &self,
        id: MessageId,
        request: UpdateMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        request.validate()?;
        let date = parse_date(&request.date)?;

        let mut message = self
            .ctx
            .message_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Message", id.to_string()))?;

        message.date = date;
        message.status = request.status;
        message.text = request.text;

        self.ctx.message_repo().update(&message).await?;

        info!(message_id = %id, "Message updated");

        Ok(MessageResponse::from(&message))
    }

    /// Delete a message, returning its last state
    #[instrument(skip(self))]
    pub async fn delete_message(&self, id: MessageId) -> ServiceResult<MessageResponse> {
        let message = self
            .ctx
            .message_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Message", id.to_string()))?;

        self.ctx.message_repo().delete(id).await?;

        info!(message_id = %id, "Message deleted");

        Ok(MessageResponse::from(&message))
    }
}

fn parse_date(raw: &str) -> ServiceResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| ServiceError::validation(format!("invalid date: {raw} (expected YYYY-MM-DD)")))
}
