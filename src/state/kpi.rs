//! KPI dashboard datasets.
//!
//! Static figures rendered as tables and tiles behind a view switcher.

#[cfg(test)]
#[path = "kpi_test.rs"]
mod kpi_test;

/// Which dashboard view is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KpiView {
    #[default]
    Financial,
    Projects,
    Team,
}

impl KpiView {
    pub const ALL: [Self; 3] = [Self::Financial, Self::Projects, Self::Team];

    pub fn title(self) -> &'static str {
        match self {
            Self::Financial => "Financial",
            Self::Projects => "Projects",
            Self::Team => "Team",
        }
    }
}

/// One month of revenue/expense figures.
#[derive(Clone, Copy, Debug)]
pub struct MonthlyMetric {
    pub month: &'static str,
    pub revenue: i64,
    pub expenses: i64,
}

impl MonthlyMetric {
    pub fn profit(self) -> i64 {
        self.revenue - self.expenses
    }
}

/// Project completion share, in percent.
#[derive(Clone, Copy, Debug)]
pub struct CompletionSlice {
    pub label: &'static str,
    pub share: u32,
}

/// A team's performance score out of 100.
#[derive(Clone, Copy, Debug)]
pub struct TeamScore {
    pub team: &'static str,
    pub performance: u32,
}

pub const MONTHLY_METRICS: [MonthlyMetric; 12] = [
    MonthlyMetric { month: "Jan", revenue: 4000, expenses: 2400 },
    MonthlyMetric { month: "Feb", revenue: 3000, expenses: 1398 },
    MonthlyMetric { month: "Mar", revenue: 2000, expenses: 9800 },
    MonthlyMetric { month: "Apr", revenue: 2780, expenses: 3908 },
    MonthlyMetric { month: "May", revenue: 1890, expenses: 4800 },
    MonthlyMetric { month: "Jun", revenue: 2390, expenses: 3800 },
    MonthlyMetric { month: "Jul", revenue: 3490, expenses: 4300 },
    MonthlyMetric { month: "Aug", revenue: 4000, expenses: 2400 },
    MonthlyMetric { month: "Sep", revenue: 5000, expenses: 3000 },
    MonthlyMetric { month: "Oct", revenue: 6000, expenses: 3500 },
    MonthlyMetric { month: "Nov", revenue: 7000, expenses: 4000 },
    MonthlyMetric { month: "Dec", revenue: 9000, expenses: 5000 },
];

pub const COMPLETION_BREAKDOWN: [CompletionSlice; 3] = [
    CompletionSlice { label: "Completed", share: 75 },
    CompletionSlice { label: "In Progress", share: 15 },
    CompletionSlice { label: "Not Started", share: 10 },
];

pub const TEAM_PERFORMANCE: [TeamScore; 5] = [
    TeamScore { team: "Team A", performance: 90 },
    TeamScore { team: "Team B", performance: 75 },
    TeamScore { team: "Team C", performance: 86 },
    TeamScore { team: "Team D", performance: 65 },
    TeamScore { team: "Team E", performance: 78 },
];
