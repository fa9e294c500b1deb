pub mod command;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod ui;

pub use command::Command;
pub use error::{Result, TodoError};
pub use input::parse_command;
pub use model::{Task, TaskKind, TaskList};
pub use repository::{FileTaskStore, TaskStore};
pub use service::dto::Response;
pub use service::session::Session;
pub use ui::{BufferUi, TextUi, Ui};
