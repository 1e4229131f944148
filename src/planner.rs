use crate::allocation;
use crate::config::PlannerConfig;
use crate::difficulty::DifficultyClassifier;
use crate::error::{PlannerError, PlannerResult};
use crate::insights::{self, Insights, SubjectSummary};
use crate::item::{WorkItem, is_valid_priority_boost};
use crate::parser::parse_declarations;
use crate::rebalance::rebalance;
use crate::schedule::{OverloadWarning, PackingStrategy, Plan, SchedulingOrder, pack_sequential};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Longest plan a request may ask for, about ten years of days.
pub const MAX_DAYS: u32 = 3660;
pub const MAX_DAILY_HOURS: f64 = 24.0;

/// One planning request. Options left unset fall back to the planner's
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub declarations: String,
    pub days: u32,
    pub daily_hours: f64,
    #[serde(default)]
    pub priority_boosts: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_detect: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SchedulingOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

impl PlanRequest {
    pub fn new(declarations: impl Into<String>, days: u32, daily_hours: f64) -> Self {
        Self {
            declarations: declarations.into(),
            days,
            daily_hours,
            priority_boosts: BTreeMap::new(),
            auto_detect: None,
            order: None,
            start_date: None,
        }
    }

    pub fn with_boost(mut self, subject: impl Into<String>, boost: f64) -> Self {
        self.priority_boosts.insert(subject.into(), boost);
        self
    }

    pub fn with_auto_detect(mut self, auto_detect: bool) -> Self {
        self.auto_detect = Some(auto_detect);
        self
    }

    pub fn with_order(mut self, order: SchedulingOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn total_hours(&self) -> f64 {
        f64::from(self.days) * self.daily_hours
    }

    pub fn validate(&self) -> PlannerResult<()> {
        if !(1..=MAX_DAYS).contains(&self.days) {
            return Err(PlannerError::InvalidDays(self.days));
        }
        if !(0.0..=MAX_DAILY_HOURS).contains(&self.daily_hours) {
            return Err(PlannerError::InvalidDailyHours(self.daily_hours));
        }
        for (subject, boost) in &self.priority_boosts {
            if !is_valid_priority_boost(*boost) {
                return Err(PlannerError::InvalidBoost {
                    subject: subject.clone(),
                    boost: *boost,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    pub days: u32,
    pub daily_hours: f64,
    pub total_hours: f64,
    pub total_weight: f64,
    pub strategy: PackingStrategy,
    pub items: Vec<WorkItem>,
    pub subjects: Vec<SubjectSummary>,
    pub plan: Plan,
    pub warnings: Vec<OverloadWarning>,
    pub insights: Insights,
}

impl PlanReport {
    pub fn is_overloaded(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Runs the parse → allocate → pack → summarize pipeline.
///
/// Every call works on its own copy of the request; the planner keeps no
/// state between calls.
pub struct Planner {
    config: PlannerConfig,
    classifier: Box<dyn DifficultyClassifier>,
}

impl Planner {
    pub fn new(config: PlannerConfig) -> PlannerResult<Self> {
        config.validate()?;
        let classifier = Box::new(config.classifier());
        Ok(Self { config, classifier })
    }

    /// Swaps the difficulty heuristic for another implementation.
    pub fn with_classifier(mut self, classifier: Box<dyn DifficultyClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn generate(&self, request: &PlanRequest) -> PlannerResult<PlanReport> {
        self.run(request, PackingStrategy::Sequential)
    }

    pub fn rebalance(&self, request: &PlanRequest) -> PlannerResult<PlanReport> {
        self.run(request, PackingStrategy::Rebalanced)
    }

    /// Plans the same topics against a different time budget.
    pub fn simulate(
        &self,
        request: &PlanRequest,
        days: u32,
        daily_hours: f64,
    ) -> PlannerResult<PlanReport> {
        let mut scenario = request.clone();
        scenario.days = days;
        scenario.daily_hours = daily_hours;
        self.generate(&scenario)
    }

    pub fn parse(&self, request: &PlanRequest) -> Vec<WorkItem> {
        let auto_detect = request.auto_detect.unwrap_or(self.config.auto_detect);
        let classifier = auto_detect.then_some(self.classifier.as_ref());
        parse_declarations(&request.declarations, classifier)
    }

    fn run(&self, request: &PlanRequest, strategy: PackingStrategy) -> PlannerResult<PlanReport> {
        request.validate()?;

        let mut items = self.parse(request);
        if items.is_empty() {
            return Err(PlannerError::EmptyInput);
        }

        allocation::apply_priority_boosts(&mut items, &request.priority_boosts);
        let total_hours = request.total_hours();
        let total_weight = allocation::allocate_hours(&mut items, total_hours);

        let order = request.order.unwrap_or(self.config.scheduling_order);
        let mut plan = match strategy {
            PackingStrategy::Sequential => {
                pack_sequential(&items, request.days, request.daily_hours, order)
            }
            PackingStrategy::Rebalanced => rebalance(&items, request.days, request.daily_hours),
        };

        if let Some(start) = request.start_date {
            let calendar = self.config.study_calendar()?;
            let dates = calendar.dates_for_days(start, plan.days.len())?;
            plan.assign_dates(&dates);
            debug!(%start, "assigned calendar dates");
        }

        let warnings = plan.overloaded_days();
        let subjects = insights::subject_summaries(&items);
        let insights = insights::estimate(
            &items,
            &subjects,
            &warnings,
            request.days,
            request.daily_hours,
            total_weight,
        );

        info!(
            topics = items.len(),
            subjects = subjects.len(),
            days = request.days,
            strategy = ?strategy,
            overloaded_days = warnings.len(),
            "study plan ready"
        );

        Ok(PlanReport {
            days: request.days,
            daily_hours: request.daily_hours,
            total_hours,
            total_weight,
            strategy,
            items,
            subjects,
            plan,
            warnings,
            insights,
        })
    }
}

impl Default for Planner {
    fn default() -> Self {
        let config = PlannerConfig::default();
        let classifier = Box::new(config.classifier());
        Self { config, classifier }
    }
}
