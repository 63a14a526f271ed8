mod charts;
pub use charts::{BarChart, DonutChart, LineChart};

mod controls;
pub use controls::{ColorSchemeOption, SettingToggle, SidebarItem};

pub mod icons;

mod modal;
pub use modal::ModalFrame;

mod schedule;
pub use schedule::{Schedule, ScheduleItem};

mod stat_card;
pub use stat_card::StatCard;
