use crate::error::ApiError;
use crate::shared::{
    guard::Guard,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use reminder_server_api_structs::delete_reminder::*;
use reminder_server_domain::Reminder;
use reminder_server_infra::{ReminderContext, StoreError};

pub async fn delete_reminder_controller(
    body: web::Bytes,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ApiError> {
    let body = Guard::against_malformed_json(&body)?;
    let id = Guard::against_missing_id(&body)?;

    let usecase = DeleteReminderUseCase { id };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse::new()))
        .map_err(ApiError::from)
}

#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub id: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    MissingId,
    NotFound(String),
    Storage(StoreError),
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingId => Self::BadClientData("missing id".into()),
            UseCaseError::NotFound(_) => Self::NotFound("id not found".into()),
            UseCaseError::Storage(StoreError::CorruptState(_)) => {
                Self::InternalError("corrupt storage".into())
            }
            UseCaseError::Storage(StoreError::Persistence(_)) => {
                Self::InternalError("failed to save after delete".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReminderUseCase {
    /// The removed `Reminder`
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        if self.id.is_empty() {
            return Err(UseCaseError::MissingId);
        }

        let session = ctx.store.lock().await;
        let mut reminders = session.load().await.map_err(UseCaseError::Storage)?;

        let position = reminders
            .iter()
            .position(|r| r.id() == Some(self.id.as_str()))
            .ok_or_else(|| UseCaseError::NotFound(self.id.clone()))?;
        let removed = reminders.remove(position);

        session
            .save(&reminders)
            .await
            .map_err(UseCaseError::Storage)?;

        Ok(removed)
    }
}
