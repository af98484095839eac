pub mod ai;
pub mod dashboard;
pub mod deadline;
pub mod dispatch;
pub mod document;
pub mod init;
pub mod notifications;
pub mod post_grad;
pub mod profile;
pub mod requirement;
pub mod shared;
pub mod timeline;
pub mod university;
