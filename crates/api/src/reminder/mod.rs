mod add_reminder;
mod delete_reminder;
mod get_reminders;

use actix_web::web;
use add_reminder::add_reminder_controller;
use delete_reminder::delete_reminder_controller;
use get_reminders::get_reminders_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/reminders", web::get().to(get_reminders_controller));
    cfg.route("/api/add", web::post().to(add_reminder_controller));
    cfg.route("/api/delete", web::post().to(delete_reminder_controller));
}
