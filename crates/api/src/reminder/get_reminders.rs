use crate::error::ApiError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use reminder_server_api_structs::get_reminders::*;
use reminder_server_infra::{ReminderContext, StoreError};

pub async fn get_reminders_controller(
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ApiError> {
    let usecase = GetRemindersUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(reminders))
        .map_err(ApiError::from)
}

#[derive(Debug)]
pub struct GetRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    Storage(StoreError),
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Storage(_) => Self::InternalError("corrupt storage".into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRemindersUseCase {
    type Response = APIResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminders";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        ctx.store.load().await.map_err(UseCaseError::Storage)
    }
}
