//! Reusable UI components.

pub mod avatar;
pub mod layout;
pub mod roles_management;
pub mod status_badge;
pub mod task_form;
pub mod toaster;
pub mod user_management;
