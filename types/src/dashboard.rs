//! Hard-coded figures shown on the dashboard.

use jiff::civil::{Time, time};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Accent {
    #[default]
    Blue,
    Purple,
    Red,
}

impl Accent {
    pub fn class(&self) -> &'static str {
        match self {
            Accent::Blue => "accent-blue",
            Accent::Purple => "accent-purple",
            Accent::Red => "accent-red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub title: &'static str,
    pub value: &'static str,
    pub subtitle: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepartmentSentiment {
    pub department: &'static str,
    pub satisfaction: f64,
    pub engagement: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodPoint {
    pub month: &'static str,
    pub mood: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    InProgress,
    Completed,
    Pending,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskSlice {
    pub name: &'static str,
    pub status: TaskStatus,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub time: Time,
    pub title: &'static str,
}

/// `(value, label)` pairs for the task distribution period selector.
pub const TASK_PERIODS: [(&str, &str); 3] = [
    ("today", "Today"),
    ("week", "This Week"),
    ("month", "This Month"),
];

pub const SCHEDULE_PERIODS: [&str; 2] = ["Today", "Tomorrow"];

pub const MOOD_DOMAIN: (f64, f64) = (6.0, 9.0);

pub fn stats() -> Vec<Stat> {
    vec![
        Stat {
            title: "Due Tasks",
            value: "45",
            subtitle: "Completed: 14",
            accent: Accent::default(),
        },
        Stat {
            title: "Features",
            value: "80",
            subtitle: "Implemented: 11",
            accent: Accent::Blue,
        },
        Stat {
            title: "Issues",
            value: "34",
            subtitle: "Closed today: 10",
            accent: Accent::Purple,
        },
        Stat {
            title: "Overdue",
            value: "7",
            subtitle: "New Added: 4",
            accent: Accent::Red,
        },
    ]
}

pub fn sentiment() -> Vec<DepartmentSentiment> {
    [
        ("Engineering", 85.0, 78.0),
        ("Marketing", 75.0, 82.0),
        ("Sales", 90.0, 88.0),
        ("Support", 70.0, 75.0),
        ("HR", 88.0, 85.0),
    ]
    .into_iter()
    .map(|(department, satisfaction, engagement)| DepartmentSentiment {
        department,
        satisfaction,
        engagement,
    })
    .collect()
}

pub fn mood_trend() -> Vec<MoodPoint> {
    [
        ("Jan", 7.2),
        ("Feb", 7.5),
        ("Mar", 7.8),
        ("Apr", 7.3),
        ("May", 7.9),
        ("Jun", 8.1),
    ]
    .into_iter()
    .map(|(month, mood)| MoodPoint { month, mood })
    .collect()
}

pub fn mood_average(points: &[MoodPoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    points.iter().map(|p| p.mood).sum::<f64>() / points.len() as f64
}

pub fn task_distribution() -> Vec<TaskSlice> {
    vec![
        TaskSlice {
            name: "In Progress",
            status: TaskStatus::InProgress,
            value: 35.0,
            color: "#4F46E5",
        },
        TaskSlice {
            name: "Completed",
            status: TaskStatus::Completed,
            value: 45.0,
            color: "#22C55E",
        },
        TaskSlice {
            name: "Pending",
            status: TaskStatus::Pending,
            value: 15.0,
            color: "#EAB308",
        },
        TaskSlice {
            name: "Cancelled",
            status: TaskStatus::Cancelled,
            value: 5.0,
            color: "#EF4444",
        },
    ]
}

/// Share of each slice in percent, in slice order.
pub fn percentages(slices: &[TaskSlice]) -> Vec<f64> {
    let total: f64 = slices.iter().map(|s| s.value).sum();
    slices
        .iter()
        .map(|s| if total > 0.0 { s.value * 100.0 / total } else { 0.0 })
        .collect()
}

pub fn schedule() -> Vec<ScheduleEntry> {
    vec![
        ScheduleEntry {
            time: time(10, 0, 0, 0),
            title: "Group Meeting",
        },
        ScheduleEntry {
            time: time(12, 30, 0, 0),
            title: "Public Beta Release",
        },
        ScheduleEntry {
            time: time(14, 0, 0, 0),
            title: "Client Testing",
        },
    ]
}

impl ScheduleEntry {
    /// `10:00 AM` style.
    pub fn time_label(&self) -> String {
        self.time.strftime("%-I:%M %p").to_string()
    }
}
