pub mod health;
pub mod http;
pub mod notifier;
pub mod poller;
pub mod recency;
pub mod sites;
pub mod title_filter;

pub use notifier::{Notifier, TelegramNotifier};
pub use poller::{CycleOutcome, CycleReport, PollCycle};
pub use recency::RecencyFilter;
pub use sites::SiteAdapter;
pub use title_filter::TitleFilter;
