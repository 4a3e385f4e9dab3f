mod page;
mod session;

pub use page::{PageProbe, PageSnapshot};
pub use session::{BrowserConfig, BrowserKind, new_session};
