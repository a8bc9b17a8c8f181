use crate::error::ApiError;
use crate::shared::{
    guard::Guard,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use reminder_server_api_structs::add_reminder::*;
use reminder_server_domain::{Reminder, ShapeError};
use reminder_server_infra::{ReminderContext, StoreError};
use reminder_server_utils::create_reminder_id;
use tracing::info;

pub async fn add_reminder_controller(
    body: web::Bytes,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ApiError> {
    let candidate: RequestBody = Guard::against_malformed_json(&body)?;

    let usecase = AddReminderUseCase { candidate };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(reminder))
        .map_err(ApiError::from)
}

#[derive(Debug)]
pub struct AddReminderUseCase {
    pub candidate: serde_json::Value,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidShape(ShapeError),
    DuplicateId(String),
    Storage(StoreError),
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidShape(e) => Self::InvalidShape(e.to_string()),
            UseCaseError::DuplicateId(_) => Self::Conflict("duplicate id".into()),
            UseCaseError::Storage(StoreError::CorruptState(_)) => {
                Self::InternalError("corrupt storage".into())
            }
            UseCaseError::Storage(StoreError::Persistence(_)) => {
                Self::InternalError("failed to save".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for AddReminderUseCase {
    type Response = APIResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "AddReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let candidate = std::mem::take(&mut self.candidate);
        let mut reminder = Reminder::from_value(candidate).map_err(UseCaseError::InvalidShape)?;

        let session = ctx.store.lock().await;
        let mut reminders = session.load().await.map_err(UseCaseError::Storage)?;

        match reminder.id().map(str::to_owned) {
            Some(id) => {
                if reminders.iter().any(|r| r.id() == Some(id.as_str())) {
                    return Err(UseCaseError::DuplicateId(id));
                }
            }
            None => {
                let id = loop {
                    let id = create_reminder_id(ctx.sys.get_timestamp_millis());
                    if !reminders.iter().any(|r| r.id() == Some(id.as_str())) {
                        break id;
                    }
                };
                reminder.set_id(id);
            }
        }

        reminders.push(reminder.clone());
        session
            .save(&reminders)
            .await
            .map_err(UseCaseError::Storage)?;

        info!("Added reminder with id: {:?}", reminder.id());
        Ok(reminder)
    }
}
