//! Applying to and suggesting responsibilities.

use serenity::all::CreateMessage;

use crate::{
    data::{
        responsibility_request::NewResponsibilityRequest, ResponsibilityRepository,
        ResponsibilityRequestRepository,
    },
    error::AppError,
    model::responsibility::{RequestKind, RequestStatus, Responsibility, ResponsibilityRequest},
};

use super::{embed, ResponsibilityService};

impl<'a> ResponsibilityService<'a> {
    /// Files a member's application to a responsibility.
    ///
    /// # Returns
    /// - `Ok((Responsibility, ResponsibilityRequest))` - The responsibility and pending request
    /// - `Err(AppError::NotFound)` - The responsibility no longer exists
    /// - `Err(AppError::BadRequest)` - Already responsible, or an application is pending
    pub async fn apply(
        &self,
        responsibility_id: i32,
        user_id: u64,
        reason: &str,
    ) -> Result<(Responsibility, ResponsibilityRequest), AppError> {
        let responsibility = ResponsibilityRepository::new(self.db)
            .find_by_id(responsibility_id)
            .await?
            .ok_or_else(|| AppError::NotFound("That responsibility no longer exists.".to_string()))?;

        if responsibility.responsibles.contains(&user_id) {
            return Err(AppError::BadRequest(format!(
                "You are already responsible for `{}`.",
                responsibility.name
            )));
        }

        let request_repo = ResponsibilityRequestRepository::new(self.db);
        if request_repo
            .find_pending_application(responsibility_id, user_id)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(format!(
                "You already applied for `{}`. Wait for a decision.",
                responsibility.name
            )));
        }

        let request = request_repo
            .create(NewResponsibilityRequest {
                guild_id: responsibility.guild_id,
                kind: RequestKind::Apply,
                responsibility_id: Some(responsibility_id),
                user_id,
                suggested_name: None,
                content: reason.trim().to_string(),
            })
            .await?;

        tracing::info!(
            "User {} applied for responsibility '{}' (request {})",
            user_id,
            responsibility.name,
            request.id
        );

        Ok((responsibility, request))
    }

    /// Files a suggestion for a new responsibility.
    ///
    /// # Returns
    /// - `Ok(ResponsibilityRequest)` - The pending suggestion
    /// - `Err(AppError::BadRequest)` - The name is empty or already taken
    pub async fn suggest(
        &self,
        guild_id: u64,
        user_id: u64,
        name: &str,
        description: &str,
    ) -> Result<ResponsibilityRequest, AppError> {
        let name = name.trim();
        if name.is_empty() || name.chars().count() > super::MAX_NAME_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Responsibility names must be 1 to {} characters.",
                super::MAX_NAME_LENGTH
            )));
        }

        if ResponsibilityRepository::new(self.db)
            .find_by_name(guild_id, name)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(format!(
                "A responsibility named `{}` already exists.",
                name
            )));
        }

        let request = ResponsibilityRequestRepository::new(self.db)
            .create(NewResponsibilityRequest {
                guild_id,
                kind: RequestKind::Suggest,
                responsibility_id: None,
                user_id,
                suggested_name: Some(name.to_string()),
                content: description.trim().to_string(),
            })
            .await?;

        tracing::info!(
            "User {} suggested responsibility '{}' in guild {} (request {})",
            user_id,
            name,
            guild_id,
            request.id
        );

        Ok(request)
    }

    /// Records where the review embed of a request was posted.
    pub async fn attach_request_message(
        &self,
        request_id: i32,
        channel_id: u64,
        message_id: u64,
    ) -> Result<(), AppError> {
        ResponsibilityRequestRepository::new(self.db)
            .set_message(request_id, channel_id, message_id)
            .await?;

        Ok(())
    }

    /// Approves a pending request.
    ///
    /// An application makes the applicant responsible (granting the responsibility's
    /// roles); a suggestion creates the suggested responsibility. The requester is told by
    /// DM on a best-effort basis.
    ///
    /// # Returns
    /// - `Ok((ResponsibilityRequest, Responsibility))` - Decided request and affected
    ///   responsibility
    /// - `Err(AppError::NotFound)` - No such request, or its responsibility was deleted
    /// - `Err(AppError::BadRequest)` - The request was already decided
    pub async fn approve_request(
        &self,
        request_id: i32,
        approver_id: u64,
    ) -> Result<(ResponsibilityRequest, Responsibility), AppError> {
        let request = self.require_pending(request_id).await?;

        let responsibility = match request.kind {
            RequestKind::Apply => {
                let responsibility = ResponsibilityRepository::new(self.db)
                    .find_by_id(request.responsibility_id.unwrap_or_default())
                    .await?
                    .ok_or_else(|| {
                        AppError::NotFound("That responsibility no longer exists.".to_string())
                    })?;

                if responsibility.responsibles.contains(&request.user_id) {
                    responsibility
                } else {
                    self.assign(responsibility, request.user_id).await?
                }
            }
            RequestKind::Suggest => {
                let name = request.suggested_name.clone().unwrap_or_default();
                self.create(request.guild_id, &name, &request.content).await?
            }
        };

        let decided = ResponsibilityRequestRepository::new(self.db)
            .decide(request_id, RequestStatus::Approved, approver_id)
            .await?
            .ok_or_else(|| AppError::NotFound("That request no longer exists.".to_string()))?;

        tracing::info!(
            "Request {} approved by user {} ({})",
            request_id,
            approver_id,
            responsibility.name
        );

        self.notify_requester(&decided, &responsibility.name).await;

        Ok((decided, responsibility))
    }

    /// Rejects a pending request and tells the requester by DM.
    pub async fn reject_request(
        &self,
        request_id: i32,
        rejecter_id: u64,
    ) -> Result<ResponsibilityRequest, AppError> {
        let request = self.require_pending(request_id).await?;

        let decided = ResponsibilityRequestRepository::new(self.db)
            .decide(request_id, RequestStatus::Rejected, rejecter_id)
            .await?
            .ok_or_else(|| AppError::NotFound("That request no longer exists.".to_string()))?;

        tracing::info!("Request {} rejected by user {}", request_id, rejecter_id);

        let name = match request.responsibility_id {
            Some(id) => ResponsibilityRepository::new(self.db)
                .find_by_id(id)
                .await?
                .map(|r| r.name)
                .unwrap_or_default(),
            None => request.suggested_name.clone().unwrap_or_default(),
        };
        self.notify_requester(&decided, &name).await;

        Ok(decided)
    }

    pub async fn pending_requests(
        &self,
        guild_id: u64,
    ) -> Result<Vec<ResponsibilityRequest>, AppError> {
        Ok(ResponsibilityRequestRepository::new(self.db)
            .get_pending(guild_id)
            .await?)
    }

    async fn require_pending(&self, request_id: i32) -> Result<ResponsibilityRequest, AppError> {
        let request = ResponsibilityRequestRepository::new(self.db)
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("That request no longer exists.".to_string()))?;

        if request.status != RequestStatus::Pending {
            return Err(AppError::BadRequest(format!(
                "That request was already {}.",
                request.status.as_str()
            )));
        }

        Ok(request)
    }

    async fn notify_requester(&self, request: &ResponsibilityRequest, name: &str) {
        let message = CreateMessage::new().embed(embed::decision_dm_embed(request, name));

        if let Err(e) = self.discord.send_dm(request.user_id, message).await {
            tracing::warn!("Failed to DM requester {}: {}", request.user_id, e);
        }
    }
}
