//! Community poll board: seeded polls, one vote per poll, status filter.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::debug;

/// Audience the participation figure is measured against
pub const COMMUNITY_SIZE: u64 = 1_000_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PollStatus {
    Active,
    Closed,
}

impl PollStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PollStatus::Active => "active",
            PollStatus::Closed => "closed",
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub id: String,
    pub title: String,
    pub question: String,
    pub options: Vec<String>,
    pub status: PollStatus,
    pub results: HashMap<String, u64>,
    pub voters_count: u64,
    pub votes_count: u64,
    pub time_created: String,
}

impl Poll {
    fn seeded(
        id: &str,
        title: &str,
        question: &str,
        options: &[&str],
        status: PollStatus,
        results: &[(&str, u64)],
        time_created: &str,
    ) -> Self {
        let results: HashMap<String, u64> = results
            .iter()
            .map(|(option, count)| (option.to_string(), *count))
            .collect();
        let total = results.values().sum();
        Self {
            id: id.to_string(),
            title: title.to_string(),
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            status,
            results,
            voters_count: total,
            votes_count: total,
            time_created: time_created.to_string(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == PollStatus::Active
    }

    pub fn count_for(&self, option: &str) -> u64 {
        self.results.get(option).copied().unwrap_or(0)
    }

    /// Share of votes for `option`, 0 while nobody has voted
    pub fn option_percentage(&self, option: &str) -> f64 {
        if self.votes_count == 0 {
            return 0.0;
        }
        self.count_for(option) as f64 * 100.0 / self.votes_count as f64
    }

    pub fn participation_percentage(&self, total_users: u64) -> f64 {
        if total_users == 0 {
            return 0.0;
        }
        self.voters_count as f64 * 100.0 / total_users as f64
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PollFilter {
    #[default]
    All,
    Active,
    Closed,
}

impl PollFilter {
    pub const ALL: [PollFilter; 3] = [PollFilter::All, PollFilter::Active, PollFilter::Closed];

    pub fn label(&self) -> &'static str {
        match self {
            PollFilter::All => "All Polls",
            PollFilter::Active => "Active Polls",
            PollFilter::Closed => "Closed Polls",
        }
    }

    pub fn matches(&self, poll: &Poll) -> bool {
        match self {
            PollFilter::All => true,
            PollFilter::Active => poll.status == PollStatus::Active,
            PollFilter::Closed => poll.status == PollStatus::Closed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VoteError {
    #[error("No poll with id {0}")]
    UnknownPoll(String),
    #[error("This poll is closed")]
    Closed,
    #[error("'{0}' is not an option of this poll")]
    UnknownOption(String),
    #[error("You have already voted in this poll")]
    AlreadyVoted,
}

#[derive(Clone, PartialEq, Debug)]
pub struct PollBoard {
    polls: Vec<Poll>,
    /// Poll id to the option this session picked
    ballots: HashMap<String, String>,
}

impl Default for PollBoard {
    fn default() -> Self {
        Self::seeded()
    }
}

impl PollBoard {
    pub fn new(polls: Vec<Poll>) -> Self {
        Self {
            polls,
            ballots: HashMap::new(),
        }
    }

    pub fn seeded() -> Self {
        Self::new(vec![
            Poll::seeded(
                "1",
                "Drinking water",
                "Has access to drinking water become more accessible within the last month?",
                &["Yes", "No"],
                PollStatus::Active,
                &[],
                "1 minute ago",
            ),
            Poll::seeded(
                "2",
                "Bullying in Schools",
                "Are more children attending school since the introduction of the new 'No Bullying' policy?",
                &["Yes", "No"],
                PollStatus::Active,
                &[],
                "10 minutes ago",
            ),
            Poll::seeded(
                "3",
                "Crime Rate",
                "Has the crime rate gone down since the introduction of locally available mental-illness assistance centers opened?",
                &["Yes", "No"],
                PollStatus::Closed,
                &[("Yes", 60_000), ("No", 40_000)],
                "1 hour ago",
            ),
            Poll::seeded(
                "4",
                "Average daily food consumption",
                "How many meals a day does every person in your village receive based on the new \"Human Feeding Plan\"?",
                &[
                    "A - 2 meals a day",
                    "B - 3 meals a day",
                    "C - 3 meals a day with snacks",
                ],
                PollStatus::Active,
                &[],
                "5 minutes ago",
            ),
            Poll::seeded(
                "5",
                "Correct clothing",
                "Do you have the correct clothing to live healthly in the winter?",
                &["Yes", "No"],
                PollStatus::Closed,
                &[("Yes", 999_900), ("No", 100)],
                "2 hours ago",
            ),
        ])
    }

    pub fn polls(&self) -> &[Poll] {
        &self.polls
    }

    pub fn get(&self, poll_id: &str) -> Option<&Poll> {
        self.polls.iter().find(|p| p.id == poll_id)
    }

    pub fn filtered(&self, filter: PollFilter) -> Vec<&Poll> {
        self.polls.iter().filter(|p| filter.matches(p)).collect()
    }

    pub fn ballot(&self, poll_id: &str) -> Option<&str> {
        self.ballots.get(poll_id).map(String::as_str)
    }

    pub fn voted_polls(&self) -> HashSet<&str> {
        self.ballots.keys().map(String::as_str).collect()
    }

    pub fn vote(&mut self, poll_id: &str, option: &str) -> Result<(), VoteError> {
        if self.ballots.contains_key(poll_id) {
            return Err(VoteError::AlreadyVoted);
        }
        let poll = self
            .polls
            .iter_mut()
            .find(|p| p.id == poll_id)
            .ok_or_else(|| VoteError::UnknownPoll(poll_id.to_string()))?;
        if !poll.is_active() {
            return Err(VoteError::Closed);
        }
        if !poll.options.iter().any(|o| o == option) {
            return Err(VoteError::UnknownOption(option.to_string()));
        }

        *poll.results.entry(option.to_string()).or_insert(0) += 1;
        poll.voters_count += 1;
        poll.votes_count += 1;
        self.ballots.insert(poll_id.to_string(), option.to_string());
        debug!("Recorded vote on poll {}", poll_id);
        Ok(())
    }
}
