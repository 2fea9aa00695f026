pub mod marathon;
pub mod transport;

pub use crate::domain::model::{App, AppId, RegistrationIntent, Task, TaskId};
pub use crate::domain::ports::{HttpResponse, Marathoner, Transport};
pub use crate::utils::error::Result;
