//! Application state for the TUI

use crate::config::Settings;
use crate::models::{ExpenseRecord, Month, MonthlyIncome};
use crate::reports::{ComparisonReport, MonthlyReport};

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Comparison,
}

impl ActiveView {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Comparison => "Comparison",
        }
    }
}

/// A guest's cached records and the label shown for them
#[derive(Debug, Clone)]
pub struct GuestSnapshot {
    pub label: String,
    pub records: Vec<ExpenseRecord>,
}

/// Main application state
pub struct App<'a> {
    pub settings: &'a Settings,
    own: Vec<ExpenseRecord>,
    income: Option<MonthlyIncome>,
    guest: Option<GuestSnapshot>,

    pub should_quit: bool,
    pub active_view: ActiveView,

    /// Month being viewed; kept while the all-months view is on
    pub month: Month,
    pub all_months: bool,

    /// First row shown in scrollable lists
    pub scroll: usize,

    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    pub fn new(
        settings: &'a Settings,
        own: Vec<ExpenseRecord>,
        income: Option<MonthlyIncome>,
        guest: Option<GuestSnapshot>,
    ) -> Self {
        Self {
            settings,
            own,
            income,
            guest,
            should_quit: false,
            active_view: ActiveView::default(),
            month: Month::current(),
            all_months: false,
            scroll: 0,
            status_message: None,
        }
    }

    /// The month filter currently applied
    pub fn period(&self) -> Option<Month> {
        (!self.all_months).then_some(self.month)
    }

    pub fn period_label(&self) -> String {
        match self.period() {
            Some(month) => month.long_name(),
            None => "All months".to_string(),
        }
    }

    pub fn monthly_report(&self) -> MonthlyReport {
        MonthlyReport::generate(&self.own, self.period(), self.income, self.settings)
    }

    /// `None` when no guest snapshot was loaded
    pub fn comparison_report(&self) -> Option<ComparisonReport> {
        self.guest.as_ref().map(|guest| {
            ComparisonReport::generate(
                &self.own,
                &guest.records,
                self.period(),
                &self.settings.primary_label,
                &guest.label,
                &self.settings.currency_symbol,
            )
        })
    }

    pub fn next_month(&mut self) {
        self.month = self.month.next();
        self.all_months = false;
        self.scroll = 0;
    }

    pub fn prev_month(&mut self) {
        self.month = self.month.prev();
        self.all_months = false;
        self.scroll = 0;
    }

    pub fn toggle_all_months(&mut self) {
        self.all_months = !self.all_months;
        self.scroll = 0;
    }

    pub fn switch_view(&mut self) {
        self.active_view = match self.active_view {
            ActiveView::Dashboard => ActiveView::Comparison,
            ActiveView::Comparison => ActiveView::Dashboard,
        };
        self.scroll = 0;
        if self.active_view == ActiveView::Comparison && self.guest.is_none() {
            self.set_status("No guest snapshot; run 'gastos sync --guest <username>'");
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
